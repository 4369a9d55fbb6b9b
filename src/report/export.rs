//! CSV export of assessment results
//!
//! The single-assessment export matches the intake sheet consumed
//! downstream: one header row, one data row, comma-joined without quoting.
//! Free-text fields containing commas will shift columns; the format is
//! kept as specified and the hazard is documented rather than fixed.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::applicant::ApplicantProfile;
use crate::engine::{AssessmentResult, Decision};
use crate::error::AssessmentError;

/// Header of the single-assessment export row, in contract order.
pub const EXPORT_HEADER: &str =
    "Name,Employment,Income,CoIncome,Debts,Loan Amount,Tenure,Credit Score,Age,Purpose,EMI,Probability";

/// Render the single export data row for one assessment.
pub fn export_row(profile: &ApplicantProfile, result: &AssessmentResult) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{},{},{:.2},{:.1}",
        profile.name,
        profile.employment,
        profile.income,
        profile.co_income,
        profile.debts,
        profile.loan_amount,
        profile.tenure_months,
        profile.credit_score,
        profile.age,
        profile.purpose,
        result.emi,
        result.probability,
    )
}

/// Write one assessment as header plus a single data row.
pub fn write_assessment_csv(
    path: &Path,
    profile: &ApplicantProfile,
    result: &AssessmentResult,
) -> Result<(), AssessmentError> {
    let mut file = File::create(path).map_err(|e| AssessmentError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    writeln!(file, "{EXPORT_HEADER}").map_err(|e| AssessmentError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    writeln!(file, "{}", export_row(profile, result)).map_err(|e| AssessmentError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Default export filename: `<name>_<YYYY-MM-DD>.csv`, falling back to
/// `applicant` when the name is empty.
pub fn default_export_path(profile: &ApplicantProfile, date: NaiveDate) -> PathBuf {
    let name = profile.name.trim();
    let stem = if name.is_empty() { "applicant" } else { name };
    PathBuf::from(format!("{stem}_{date}.csv"))
}

/// Write per-applicant batch results, one row per applicant.
pub fn write_batch_csv(
    path: &Path,
    applicants: &[ApplicantProfile],
    results: &[AssessmentResult],
) -> Result<(), AssessmentError> {
    let mut file = File::create(path).map_err(|e| AssessmentError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    writeln!(file, "Name,Employment,Loan Amount,Tenure,EMI,Probability,Decision").map_err(|e| {
        AssessmentError::Io {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    for (applicant, result) in applicants.iter().zip(results) {
        writeln!(
            file,
            "{},{},{},{},{:.2},{:.1},{}",
            applicant.name,
            applicant.employment,
            applicant.loan_amount,
            applicant.tenure_months,
            result.emi,
            result.probability,
            result.decision,
        )
        .map_err(|e| AssessmentError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    Ok(())
}

/// Count of likely-approved results, for batch summaries.
pub fn count_approved(results: &[AssessmentResult]) -> usize {
    results
        .iter()
        .filter(|r| r.decision == Decision::LikelyApproved)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Assumptions;
    use crate::engine::assess;

    #[test]
    fn test_export_header_contract() {
        assert_eq!(
            EXPORT_HEADER,
            "Name,Employment,Income,CoIncome,Debts,Loan Amount,Tenure,Credit Score,Age,Purpose,EMI,Probability"
        );
    }

    #[test]
    fn test_export_row_column_order() {
        let profile = ApplicantProfile::sample();
        let result = assess(&profile, &Assumptions::default_retail());
        let row = export_row(&profile, &result);

        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 12);
        assert_eq!(fields[0], "Rahul Sharma");
        assert_eq!(fields[1], "salaried");
        assert_eq!(fields[2], "50000");
        assert_eq!(fields[3], "20000");
        assert_eq!(fields[4], "5000");
        assert_eq!(fields[5], "300000");
        assert_eq!(fields[6], "36");
        assert_eq!(fields[7], "720");
        assert_eq!(fields[8], "32");
        assert_eq!(fields[9], "Home repair");
        assert_eq!(fields[10], format!("{:.2}", result.emi));
        assert_eq!(fields[11], format!("{:.1}", result.probability));
    }

    #[test]
    fn test_write_assessment_csv_roundtrip() {
        let profile = ApplicantProfile::sample();
        let result = assess(&profile, &Assumptions::default_retail());

        let path = std::env::temp_dir().join("loan_assessment_export_test.csv");
        write_assessment_csv(&path, &profile, &result).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], EXPORT_HEADER);
        assert_eq!(lines[1], export_row(&profile, &result));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_default_export_path() {
        let profile = ApplicantProfile::sample();
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(
            default_export_path(&profile, date),
            PathBuf::from("Rahul Sharma_2025-01-15.csv")
        );

        let mut anonymous = profile.clone();
        anonymous.name = String::new();
        assert_eq!(
            default_export_path(&anonymous, date),
            PathBuf::from("applicant_2025-01-15.csv")
        );
    }
}
