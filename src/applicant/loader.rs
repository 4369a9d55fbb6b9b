//! Applicant file loading
//!
//! Batch input is a CSV with one applicant per row and a header of:
//! `name,employment,income,co_income,debts,loan_amount,tenure_months,credit_score,age,purpose`
//!
//! Rows that fail the presence checks are rejected here, before the engine
//! ever sees them. Absent or blank co-income, debts, and purpose default to
//! empty values rather than rejecting the row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use super::{ApplicantProfile, EmploymentType};
use crate::error::AssessmentError;

/// Raw CSV row. Every numeric field is optional here so a blank cell maps
/// to a default instead of a parse failure; the presence checks then decide
/// whether the row survives. Co-income and debts are read as text so a
/// non-numeric value defaults to 0 instead of rejecting the row.
#[derive(Debug, Deserialize)]
struct ApplicantRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    employment: Option<EmploymentType>,
    #[serde(default)]
    income: Option<f64>,
    #[serde(default)]
    co_income: Option<String>,
    #[serde(default)]
    debts: Option<String>,
    #[serde(default)]
    loan_amount: Option<f64>,
    #[serde(default)]
    tenure_months: Option<u32>,
    #[serde(default)]
    credit_score: Option<f64>,
    #[serde(default)]
    age: Option<f64>,
    #[serde(default)]
    purpose: Option<String>,
}

fn parse_or_zero(field: Option<String>) -> f64 {
    field
        .as_deref()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0.0)
}

impl From<ApplicantRecord> for ApplicantProfile {
    fn from(record: ApplicantRecord) -> Self {
        Self {
            name: record.name,
            employment: record.employment.unwrap_or(EmploymentType::Other),
            income: record.income.unwrap_or(0.0),
            co_income: parse_or_zero(record.co_income),
            debts: parse_or_zero(record.debts),
            loan_amount: record.loan_amount.unwrap_or(0.0),
            tenure_months: record.tenure_months.unwrap_or(0),
            credit_score: record.credit_score.unwrap_or(0.0),
            age: record.age.unwrap_or(0.0),
            purpose: record.purpose.unwrap_or_default(),
        }
    }
}

/// Load applicants from a CSV file.
pub fn load_applicants(path: &Path) -> Result<Vec<ApplicantProfile>, AssessmentError> {
    let file = File::open(path).map_err(|e| AssessmentError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    load_applicants_from_reader(file, &path.display().to_string())
}

/// Load applicants from any reader. `origin` labels warnings for skipped
/// rows (typically the file path).
pub fn load_applicants_from_reader<R: Read>(
    reader: R,
    origin: &str,
) -> Result<Vec<ApplicantProfile>, AssessmentError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut applicants = Vec::new();
    for (idx, record) in csv_reader.deserialize::<ApplicantRecord>().enumerate() {
        // Header occupies line 1
        let line = idx + 2;
        match record {
            Ok(record) => {
                let profile = ApplicantProfile::from(record);
                match profile.validate() {
                    Ok(()) => applicants.push(profile),
                    Err(e) => warn!("{origin}:{line}: skipping applicant: {e}"),
                }
            }
            Err(e) => warn!("{origin}:{line}: skipping unparseable row: {e}"),
        }
    }

    Ok(applicants)
}
