//! Amortization schedule generation

use serde::Serialize;

use super::emi::compute_emi;

/// One period of an amortization schedule.
///
/// Money fields are rounded to two decimals at row construction; the
/// generator's internal accumulators are never rounded, so rounding error
/// cannot compound across periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmortizationRow {
    /// 1-based payment period
    pub period: u32,
    /// Principal portion of this period's payment
    pub principal: f64,
    /// Interest portion of this period's payment
    pub interest: f64,
    pub cumulative_principal: f64,
    pub cumulative_interest: f64,
    /// Remaining balance after this period
    pub balance: f64,
}

/// Round to two decimal places at the display boundary.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build the full schedule, one row per period from 1 to `months`.
///
/// The EMI is computed once and held constant across all periods. The
/// running balance floors at zero so floating-point drift on the final
/// period cannot leave a negative balance. Zero months yields an empty
/// schedule.
pub fn build_schedule(principal: f64, annual_rate: f64, months: u32) -> Vec<AmortizationRow> {
    let emi = compute_emi(principal, annual_rate, months);
    let monthly_rate = annual_rate / 12.0;

    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = principal.max(0.0);
    let mut cumulative_interest = 0.0;

    for period in 1..=months {
        let interest = balance * monthly_rate;
        let principal_portion = emi - interest;
        balance = (balance - principal_portion).max(0.0);
        cumulative_interest += interest;

        rows.push(AmortizationRow {
            period,
            principal: round2(principal_portion),
            interest: round2(interest),
            cumulative_principal: round2(principal.max(0.0) - balance),
            cumulative_interest: round2(cumulative_interest),
            balance: round2(balance),
        });
    }

    rows
}
