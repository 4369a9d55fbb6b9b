//! Loan Assessment System - EMI, amortization, and approval scoring engine
//!
//! This library provides:
//! - EMI and amortization schedule computation
//! - Weighted multi-factor approval probability scoring
//! - Single and batch applicant assessment
//! - Report formatting and CSV export

pub mod applicant;
pub mod assumptions;
pub mod engine;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use applicant::{ApplicantProfile, EmploymentType};
pub use assumptions::Assumptions;
pub use engine::{assess, AssessmentResult, Decision, FactorScores};
pub use error::AssessmentError;
