//! Loan assessment engine: EMI, amortization, scoring, and decisions
//!
//! Every operation here is a pure function of its inputs: no I/O, no shared
//! state, no error path. Degenerate numeric input produces clamped or zero
//! output instead of failing; rejection of bad submissions happens at the
//! input boundary, never here.

mod assessment;
mod emi;
mod schedule;
mod scoring;

pub use assessment::{assess, AssessmentResult};
pub use emi::compute_emi;
pub use schedule::{build_schedule, AmortizationRow};
pub use scoring::{Decision, FactorScores};

// ============================================================================
// Score Domain Bounds
// ============================================================================
// Raw credit scores are clamped onto [CREDIT_SCORE_MIN, CREDIT_SCORE_MAX]
// before the linear map onto the 0-100 factor scale. The age factor rises
// linearly and saturates at AGE_CAP_YEARS.

/// Lower bound of the credit score domain
pub const CREDIT_SCORE_MIN: f64 = 300.0;

/// Upper bound of the credit score domain
pub const CREDIT_SCORE_MAX: f64 = 900.0;

/// Age at which the earning-longevity factor saturates
pub const AGE_CAP_YEARS: f64 = 75.0;
