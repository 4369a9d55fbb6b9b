//! Boundary errors for applicant loading, configuration, and export
//!
//! The calculation engine itself never fails: out-of-range numeric input is
//! clamped and degenerate input yields degenerate-but-defined output. Errors
//! only arise at the edges where files and raw records come in or go out.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the input/output boundaries of the assessment system.
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// A required field was absent or empty at the input boundary.
    /// Detection here blocks engine invocation entirely.
    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse assumptions file '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
