//! Factor scoring and approval probability
//!
//! The five sub-scores are computed once and shared by the weighted total
//! and the breakdown display, so the reported breakdown can never drift
//! from the score the decision is actually made on.

use std::fmt;

use serde::Serialize;

use super::{AGE_CAP_YEARS, CREDIT_SCORE_MAX, CREDIT_SCORE_MIN};
use crate::applicant::ApplicantProfile;
use crate::assumptions::{EmploymentRates, ScoreWeights};

/// Clamp a sub-score onto [0, 100]. Non-finite values map to the nearest
/// bound so degenerate ratios (0/0, x/0) can never leak NaN into a score.
fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// The five factor scores, each on [0, 100], in the fixed display order
/// credit, affordability, loan-size, employment, age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorScores {
    pub credit: f64,
    pub affordability: f64,
    pub loan_size: f64,
    pub employment: f64,
    pub age: f64,
}

impl FactorScores {
    /// Compute all five sub-scores for a profile.
    ///
    /// The raw credit score is clamped onto its [300, 900] domain before
    /// the linear map, so out-of-range input saturates instead of escaping
    /// the scale.
    pub fn from_profile(profile: &ApplicantProfile, rates: &EmploymentRates) -> Self {
        let clamped_credit = profile.credit_score.clamp(CREDIT_SCORE_MIN, CREDIT_SCORE_MAX);
        let credit = clamp_score(
            (clamped_credit - CREDIT_SCORE_MIN) / (CREDIT_SCORE_MAX - CREDIT_SCORE_MIN) * 100.0,
        );

        // Net monthly capacity against the average installment. A household
        // whose debts exceed income goes negative here and clamps to zero.
        let net_income = profile.total_monthly_income() - profile.debts;
        let average_installment = profile.loan_amount / profile.tenure_months.max(1) as f64;
        let affordability = clamp_score(100.0 * net_income / average_installment);

        let loan_size =
            clamp_score(100.0 * (1.0 - profile.loan_amount / profile.annual_income()));

        let employment = clamp_score(100.0 - rates.rate(profile.employment) * 100.0);

        let age = clamp_score(100.0 * profile.age / AGE_CAP_YEARS);

        Self {
            credit,
            affordability,
            loan_size,
            employment,
            age,
        }
    }

    /// Weighted approval probability on [0, 100].
    pub fn probability(&self, weights: &ScoreWeights) -> f64 {
        let weighted = self.credit * weights.credit / 100.0
            + self.affordability * weights.affordability / 100.0
            + self.loan_size * weights.loan_size / 100.0
            + self.employment * weights.employment / 100.0
            + self.age * weights.age / 100.0;
        clamp_score(weighted)
    }

    /// Names and values in display order.
    pub fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("Credit", self.credit),
            ("Affordability", self.affordability),
            ("Loan-size", self.loan_size),
            ("Employment", self.employment),
            ("Age", self.age),
        ]
    }
}

/// Two-outcome classification of the approval probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decision {
    LikelyApproved,
    NeedsReview,
}

impl Decision {
    /// Classify a probability against the approval threshold.
    pub fn classify(probability: f64, threshold: f64) -> Self {
        if probability >= threshold {
            Self::LikelyApproved
        } else {
            Self::NeedsReview
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LikelyApproved => "likely-approved",
            Self::NeedsReview => "needs-review",
        }
    }

    /// Canned recommendation line for the decision.
    pub fn recommendation(self) -> &'static str {
        match self {
            Self::LikelyApproved => "Loan likely to be approved.",
            Self::NeedsReview => "Consider reducing loan amount or improving credit score.",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicant::EmploymentType;
    use approx::assert_abs_diff_eq;

    fn sample_factors() -> FactorScores {
        FactorScores::from_profile(&ApplicantProfile::sample(), &EmploymentRates::default())
    }

    #[test]
    fn test_sample_profile_factors() {
        let factors = sample_factors();

        // 720 on the [300, 900] domain maps to 70
        assert_abs_diff_eq!(factors.credit, 70.0, epsilon = 1e-9);
        // 65k net against an 8,333 average installment saturates
        assert_eq!(factors.affordability, 100.0);
        // 300k loan against 600k annual income
        assert_abs_diff_eq!(factors.loan_size, 50.0, epsilon = 1e-9);
        // Salaried rate 9.5%
        assert_abs_diff_eq!(factors.employment, 90.5, epsilon = 1e-9);
        assert_abs_diff_eq!(factors.age, 100.0 * 32.0 / 75.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sample_probability() {
        let probability = sample_factors().probability(&ScoreWeights::default());
        assert_abs_diff_eq!(probability, 78.115, epsilon = 0.01);
    }

    #[test]
    fn test_credit_score_clamps_before_mapping() {
        let rates = EmploymentRates::default();

        let mut profile = ApplicantProfile::sample();
        profile.credit_score = 100.0;
        assert_eq!(FactorScores::from_profile(&profile, &rates).credit, 0.0);

        profile.credit_score = 2000.0;
        assert_eq!(FactorScores::from_profile(&profile, &rates).credit, 100.0);
    }

    #[test]
    fn test_negative_net_income_clamps_to_zero() {
        let rates = EmploymentRates::default();
        let mut profile = ApplicantProfile::sample();
        profile.debts = 500_000.0;

        assert_eq!(FactorScores::from_profile(&profile, &rates).affordability, 0.0);
    }

    #[test]
    fn test_extreme_inputs_never_escape_range() {
        let rates = EmploymentRates::default();
        let weights = ScoreWeights::default();

        let extremes = [
            (0.0, 0.0, 0.0, 0.0, 0, 0.0, 0.0),
            (-1e12, -1e12, 1e12, -1e12, 1, -500.0, -80.0),
            (1e15, 0.0, 0.0, 1e-9, 600, 1e6, 1e6),
            (f64::NAN, f64::NAN, f64::NAN, f64::NAN, 12, f64::NAN, f64::NAN),
        ];

        for (income, co_income, debts, loan_amount, tenure, credit_score, age) in extremes {
            let profile = ApplicantProfile {
                name: "x".to_string(),
                employment: EmploymentType::Other,
                income,
                co_income,
                debts,
                loan_amount,
                tenure_months: tenure,
                credit_score,
                age,
                purpose: String::new(),
            };
            let factors = FactorScores::from_profile(&profile, &rates);

            for (name, score) in factors.named() {
                assert!(
                    (0.0..=100.0).contains(&score),
                    "{name} factor escaped range: {score}"
                );
            }

            let probability = factors.probability(&weights);
            assert!(probability.is_finite());
            assert!((0.0..=100.0).contains(&probability));
        }
    }

    #[test]
    fn test_decision_threshold() {
        assert_eq!(Decision::classify(65.0, 65.0), Decision::LikelyApproved);
        assert_eq!(Decision::classify(64.999, 65.0), Decision::NeedsReview);
        assert_eq!(Decision::classify(100.0, 65.0), Decision::LikelyApproved);
        assert_eq!(Decision::classify(0.0, 65.0), Decision::NeedsReview);
    }

    #[test]
    fn test_recommendations_are_canned() {
        assert_eq!(
            Decision::LikelyApproved.recommendation(),
            "Loan likely to be approved."
        );
        assert_eq!(
            Decision::NeedsReview.recommendation(),
            "Consider reducing loan amount or improving credit score."
        );
    }
}
