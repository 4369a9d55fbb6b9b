//! Applicant data structures and batch file loading

mod data;
pub mod loader;

pub use data::{ApplicantProfile, EmploymentType};
pub use loader::{load_applicants, load_applicants_from_reader};
