//! Report formatting: KPI summaries, factor breakdowns, and schedule tables
//!
//! Formatting lives in one place so the engine stays plain data in, plain
//! data out, and output changes remain localized. Everything here renders
//! an already-computed result; nothing recomputes.

pub mod export;

use crate::applicant::ApplicantProfile;
use crate::engine::{AmortizationRow, AssessmentResult};

/// Width of the score bars in the breakdown display
const BAR_WIDTH: usize = 20;

/// Format a rupee amount with Indian digit grouping, e.g. `₹12,34,567.89`.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let rupees = cents / 100;
    let paise = cents % 100;

    let sign = if negative { "-" } else { "" };
    format!("{sign}₹{}.{paise:02}", group_indian(&rupees.to_string()))
}

/// Indian grouping: the last three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut parts = Vec::new();
    let mut idx = head.len();
    while idx > 2 {
        parts.push(&head[idx - 2..idx]);
        idx -= 2;
    }
    parts.push(&head[..idx]);
    parts.reverse();

    format!("{},{}", parts.join(","), tail)
}

fn score_bar(score: f64, width: usize) -> String {
    let filled = ((score.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Format the KPI block, decision, and factor breakdown for one assessment.
pub fn format_summary(profile: &ApplicantProfile, result: &AssessmentResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Loan Assessment: {} ===\n", profile.name));
    out.push_str(&format!(
        "Employment: {} | Tenure: {} months | Credit score: {:.0}\n",
        profile.employment, profile.tenure_months, profile.credit_score
    ));
    if !profile.purpose.is_empty() {
        out.push_str(&format!("Purpose: {}\n", profile.purpose));
    }
    out.push('\n');

    let emi_to_income = if profile.income > 0.0 {
        100.0 * result.emi / profile.income
    } else {
        0.0
    };
    let loan_to_annual = if profile.income > 0.0 {
        100.0 * profile.loan_amount / profile.annual_income()
    } else {
        0.0
    };

    out.push_str(&format!("{:<22} {}\n", "EMI:", format_inr(result.emi)));
    out.push_str(&format!("{:<22} {emi_to_income:.1}%\n", "EMI / income:"));
    out.push_str(&format!("{:<22} {loan_to_annual:.1}%\n", "Loan / annual income:"));
    out.push_str(&format!(
        "{:<22} {}\n",
        "Total repayment:",
        format_inr(result.total_repayment)
    ));
    out.push_str(&format!(
        "{:<22} {}\n",
        "Total interest:",
        format_inr(result.total_interest)
    ));
    out.push('\n');

    out.push_str(&format!(
        "Approval probability: {:.1}% {}\n",
        result.probability,
        score_bar(result.probability, BAR_WIDTH)
    ));
    out.push_str(&format!("Decision: {}\n", result.decision));
    out.push_str(&format!("{}\n", result.decision.recommendation()));
    out.push('\n');

    out.push_str("Factor breakdown:\n");
    for (name, score) in result.factors.named() {
        out.push_str(&format!(
            "  {name:<14} {} {score:>5.1}\n",
            score_bar(score, BAR_WIDTH)
        ));
    }

    out
}

/// Format the amortization schedule as an aligned table.
pub fn format_schedule_table(rows: &[AmortizationRow]) -> String {
    let mut out = String::new();
    if rows.is_empty() {
        return out;
    }

    out.push_str(&format!(
        "{:>5} {:>14} {:>14} {:>14} {:>14} {:>14}\n",
        "Month", "Principal", "Interest", "Cum P", "Cum I", "Balance"
    ));

    for row in rows {
        out.push_str(&format!(
            "{:>5} {:>14} {:>14} {:>14} {:>14} {:>14}\n",
            row.period,
            format_inr(row.principal),
            format_inr(row.interest),
            format_inr(row.cumulative_principal),
            format_inr(row.cumulative_interest),
            format_inr(row.balance),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Assumptions;
    use crate::engine::assess;

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(999.0), "₹999.00");
        assert_eq!(format_inr(1_000.0), "₹1,000.00");
        assert_eq!(format_inr(100_000.0), "₹1,00,000.00");
        assert_eq!(format_inr(1_234_567.89), "₹12,34,567.89");
        assert_eq!(format_inr(-5_000.0), "-₹5,000.00");
    }

    #[test]
    fn test_score_bar_fill() {
        assert_eq!(score_bar(0.0, 20), "[--------------------]");
        assert_eq!(score_bar(50.0, 20), "[##########----------]");
        assert_eq!(score_bar(100.0, 20), "[####################]");
        // Out-of-range input saturates rather than overflowing the bar
        assert_eq!(score_bar(250.0, 20), "[####################]");
    }

    #[test]
    fn test_summary_contents() {
        let profile = ApplicantProfile::sample();
        let result = assess(&profile, &Assumptions::default_retail());
        let summary = format_summary(&profile, &result);

        assert!(summary.contains("Rahul Sharma"));
        assert!(summary.contains("Purpose: Home repair"));
        assert!(summary.contains("Approval probability:"));
        assert!(summary.contains("Decision: likely-approved"));
        assert!(summary.contains("Loan likely to be approved."));
        assert!(summary.contains("Affordability"));
    }

    #[test]
    fn test_schedule_table_shape() {
        let profile = ApplicantProfile::sample();
        let result = assess(&profile, &Assumptions::default_retail());
        let table = format_schedule_table(&result.schedule);

        // Header plus one line per period
        assert_eq!(table.lines().count(), 37);
        assert!(table.lines().next().unwrap().contains("Balance"));
    }

    #[test]
    fn test_empty_schedule_formats_empty() {
        assert_eq!(format_schedule_table(&[]), "");
    }
}
