//! EMI (equated monthly installment) calculation

/// Monthly payment amortizing `principal` over `months` at `annual_rate`.
///
/// Degenerate inputs yield a defined default rather than an error: zero
/// principal or zero months returns 0, and a zero rate falls back to
/// straight-line division so the closed-form formula never divides by zero.
pub fn compute_emi(principal: f64, annual_rate: f64, months: u32) -> f64 {
    if principal <= 0.0 || months == 0 {
        return 0.0;
    }

    let r = annual_rate / 12.0;
    if r == 0.0 {
        principal / months as f64
    } else {
        principal * r / (1.0 - (1.0 + r).powi(-(months as i32)))
    }
}
