//! Assessment assumptions: factor weights, employment rates, and the
//! approval threshold
//!
//! Every field is overridable from a JSON file; absent fields fall back to
//! the standard retail defaults.

mod scoring;

pub use scoring::{EmploymentRates, ScoreWeights};

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;

/// Probability at or above which a loan is classified as likely approved
pub const DEFAULT_APPROVAL_THRESHOLD: f64 = 65.0;

/// Full assumption set for an assessment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assumptions {
    #[serde(default)]
    pub weights: ScoreWeights,

    #[serde(default)]
    pub employment_rates: EmploymentRates,

    #[serde(default = "default_threshold")]
    pub approval_threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_APPROVAL_THRESHOLD
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            employment_rates: EmploymentRates::default(),
            approval_threshold: DEFAULT_APPROVAL_THRESHOLD,
        }
    }
}

impl Assumptions {
    /// Standard assumptions used when no override file is supplied.
    pub fn default_retail() -> Self {
        Self::default()
    }

    /// Load assumptions from a JSON file. Fields absent from the file keep
    /// their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, AssessmentError> {
        let text = fs::read_to_string(path).map_err(|e| AssessmentError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let assumptions: Self =
            serde_json::from_str(&text).map_err(|e| AssessmentError::Config {
                path: path.to_path_buf(),
                source: e,
            })?;

        let total = assumptions.weights.total();
        if (total - 100.0).abs() > 1e-9 {
            warn!("factor weights total {total}, probabilities will not span the full 0-100 scale");
        }
        debug!("loaded assumptions from {}", path.display());

        Ok(assumptions)
    }
}
