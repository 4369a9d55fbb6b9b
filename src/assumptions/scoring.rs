//! Scoring assumptions: factor weights and the employment rate table

use serde::{Deserialize, Serialize};

use crate::applicant::EmploymentType;

/// Weights applied to the five factor scores, in percentage points.
///
/// The defaults total 100 so the weighted sum lands on the same 0-100
/// scale as the factor scores themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    #[serde(default = "default_credit_weight")]
    pub credit: f64,

    #[serde(default = "default_affordability_weight")]
    pub affordability: f64,

    #[serde(default = "default_loan_size_weight")]
    pub loan_size: f64,

    #[serde(default = "default_employment_weight")]
    pub employment: f64,

    #[serde(default = "default_age_weight")]
    pub age: f64,
}

fn default_credit_weight() -> f64 { 40.0 }
fn default_affordability_weight() -> f64 { 35.0 }
fn default_loan_size_weight() -> f64 { 15.0 }
fn default_employment_weight() -> f64 { 7.0 }
fn default_age_weight() -> f64 { 3.0 }

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            credit: 40.0,
            affordability: 35.0,
            loan_size: 15.0,
            employment: 7.0,
            age: 3.0,
        }
    }
}

impl ScoreWeights {
    /// Sum of all weights. 100 keeps probabilities on the full scale.
    pub fn total(&self) -> f64 {
        self.credit + self.affordability + self.loan_size + self.employment + self.age
    }
}

/// Annual rate by employment category.
///
/// The same rate serves two purposes, exactly as the product defines it:
/// it is the annual interest rate the loan is priced at, and it drives the
/// employment stability factor (`100 - rate * 100`). Lower rate means a
/// steadier income source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmploymentRates {
    #[serde(default = "default_government_rate")]
    pub government: f64,

    #[serde(default = "default_salaried_rate")]
    pub salaried: f64,

    #[serde(default = "default_self_employed_rate")]
    pub self_employed: f64,

    #[serde(default = "default_student_rate")]
    pub student: f64,

    /// Fallback for unrecognized employment labels
    #[serde(default = "default_other_rate")]
    pub other: f64,
}

fn default_government_rate() -> f64 { 0.085 }
fn default_salaried_rate() -> f64 { 0.095 }
fn default_self_employed_rate() -> f64 { 0.11 }
fn default_student_rate() -> f64 { 0.14 }
fn default_other_rate() -> f64 { 0.10 }

impl Default for EmploymentRates {
    fn default() -> Self {
        Self {
            government: 0.085,      // 8.5%
            salaried: 0.095,        // 9.5%
            self_employed: 0.11,    // 11%
            student: 0.14,          // 14%
            other: 0.10,            // 10% fallback
        }
    }
}

impl EmploymentRates {
    /// Annual rate for an employment category.
    pub fn rate(&self, employment: EmploymentType) -> f64 {
        match employment {
            EmploymentType::Government => self.government,
            EmploymentType::Salaried => self.salaried,
            EmploymentType::SelfEmployed => self.self_employed,
            EmploymentType::Student => self.student,
            EmploymentType::Other => self.other,
        }
    }
}
