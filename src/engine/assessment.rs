//! Assessment composition: EMI, scoring, schedule, and derived totals

use serde::Serialize;

use super::emi::compute_emi;
use super::schedule::{build_schedule, AmortizationRow};
use super::scoring::{Decision, FactorScores};
use crate::applicant::ApplicantProfile;
use crate::assumptions::Assumptions;

/// Complete result of assessing one applicant.
///
/// Produced fresh per assessment and passed around by value: the caller
/// hands it explicitly to report and export operations, so there is no
/// stale shared "last result" anywhere.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResult {
    pub emi: f64,
    /// Weighted approval probability on [0, 100]
    pub probability: f64,
    pub decision: Decision,
    pub factors: FactorScores,
    pub schedule: Vec<AmortizationRow>,
    /// Always `emi * tenure_months`
    pub total_repayment: f64,
    /// Always `total_repayment - loan_amount`
    pub total_interest: f64,
}

/// Assess a single applicant.
///
/// The loan is priced at the employment category's annual rate; the same
/// rate drives the employment stability factor. Repayment totals are
/// derived from the EMI rather than recomputed independently, so they
/// cannot drift from the schedule.
pub fn assess(profile: &ApplicantProfile, assumptions: &Assumptions) -> AssessmentResult {
    let annual_rate = assumptions.employment_rates.rate(profile.employment);
    let emi = compute_emi(profile.loan_amount, annual_rate, profile.tenure_months);

    let factors = FactorScores::from_profile(profile, &assumptions.employment_rates);
    let probability = factors.probability(&assumptions.weights);
    let decision = Decision::classify(probability, assumptions.approval_threshold);

    let schedule = build_schedule(profile.loan_amount, annual_rate, profile.tenure_months);

    let total_repayment = emi * profile.tenure_months as f64;
    let total_interest = total_repayment - profile.loan_amount;

    AssessmentResult {
        emi,
        probability,
        decision,
        factors,
        schedule,
        total_repayment,
        total_interest,
    }
}
