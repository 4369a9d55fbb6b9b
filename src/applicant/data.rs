//! Applicant data structures

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AssessmentError;

/// Employment category of the primary applicant.
///
/// `Other` absorbs unrecognized labels at the boundary so employment can
/// never reject a submission; it carries the fallback rate from
/// `EmploymentRates`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentType {
    Government,
    Salaried,
    SelfEmployed,
    Student,
    Other,
}

impl EmploymentType {
    /// Map a raw label onto a category. Unrecognized labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "government" | "govt" => Self::Government,
            "salaried" => Self::Salaried,
            "self-employed" | "self" => Self::SelfEmployed,
            "student" => Self::Student,
            _ => Self::Other,
        }
    }

    /// Canonical label, as written to export rows.
    pub fn label(self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::Salaried => "salaried",
            Self::SelfEmployed => "self-employed",
            Self::Student => "student",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for EmploymentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for EmploymentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

/// One applicant as submitted for assessment. Immutable once constructed;
/// every assessment reads a profile and returns a fresh result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub name: String,

    pub employment: EmploymentType,

    /// Primary applicant gross monthly income
    pub income: f64,

    /// Co-applicant monthly income (0 when there is no co-applicant)
    #[serde(default)]
    pub co_income: f64,

    /// Existing monthly debt obligations
    #[serde(default)]
    pub debts: f64,

    /// Requested loan amount
    pub loan_amount: f64,

    /// Loan tenure in months
    pub tenure_months: u32,

    /// Raw credit score; the scorer clamps onto [300, 900]
    pub credit_score: f64,

    /// Applicant age in years
    pub age: f64,

    /// Free-text loan purpose (may be empty)
    #[serde(default)]
    pub purpose: String,
}

impl ApplicantProfile {
    /// Presence checks for the required fields.
    ///
    /// This is the input-boundary validation: a profile that fails here is
    /// never handed to the engine. The engine itself only clamps numeric
    /// ranges and never re-validates.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        if self.name.trim().is_empty() {
            return Err(AssessmentError::MissingInput("name"));
        }
        if self.income <= 0.0 {
            return Err(AssessmentError::MissingInput("income"));
        }
        if self.loan_amount <= 0.0 {
            return Err(AssessmentError::MissingInput("loan amount"));
        }
        if self.tenure_months == 0 {
            return Err(AssessmentError::MissingInput("tenure"));
        }
        if self.credit_score <= 0.0 {
            return Err(AssessmentError::MissingInput("credit score"));
        }
        if self.age <= 0.0 {
            return Err(AssessmentError::MissingInput("age"));
        }
        Ok(())
    }

    /// Household monthly income: applicant plus co-applicant.
    pub fn total_monthly_income(&self) -> f64 {
        self.income + self.co_income
    }

    /// Annualized primary income.
    pub fn annual_income(&self) -> f64 {
        self.income * 12.0
    }

    /// The canned demo applicant used by `assess --sample` and tests.
    pub fn sample() -> Self {
        Self {
            name: "Rahul Sharma".to_string(),
            employment: EmploymentType::Salaried,
            income: 50_000.0,
            co_income: 20_000.0,
            debts: 5_000.0,
            loan_amount: 300_000.0,
            tenure_months: 36,
            credit_score: 720.0,
            age: 32.0,
            purpose: "Home repair".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employment_labels() {
        assert_eq!(EmploymentType::from_label("salaried"), EmploymentType::Salaried);
        assert_eq!(EmploymentType::from_label("govt"), EmploymentType::Government);
        assert_eq!(EmploymentType::from_label("Government"), EmploymentType::Government);
        assert_eq!(EmploymentType::from_label("self"), EmploymentType::SelfEmployed);
        assert_eq!(EmploymentType::from_label("self-employed"), EmploymentType::SelfEmployed);
        assert_eq!(EmploymentType::from_label("freelancer"), EmploymentType::Other);
        assert_eq!(EmploymentType::from_label(""), EmploymentType::Other);

        assert_eq!(EmploymentType::SelfEmployed.label(), "self-employed");
        assert_eq!(EmploymentType::Student.to_string(), "student");
    }

    #[test]
    fn test_validate_sample() {
        assert!(ApplicantProfile::sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let mut profile = ApplicantProfile::sample();
        profile.name = "  ".to_string();
        assert!(profile.validate().is_err());

        let mut profile = ApplicantProfile::sample();
        profile.income = 0.0;
        assert!(profile.validate().is_err());

        let mut profile = ApplicantProfile::sample();
        profile.tenure_months = 0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_income_helpers() {
        let profile = ApplicantProfile::sample();
        assert_eq!(profile.total_monthly_income(), 70_000.0);
        assert_eq!(profile.annual_income(), 600_000.0);
    }
}
