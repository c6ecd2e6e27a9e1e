//! Filter configuration

use serde::{Deserialize, Serialize};

use crate::similarity::CodeUnit;

/// Threshold applied when the caller does not supply one.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Configuration for [`SimilarityFilter`](crate::similarity::SimilarityFilter).
///
/// Every field has a default, so a partial JSON object such as
/// `{"threshold": 0.35}` deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Minimum similarity (inclusive). Not validated: values <= 0 match
    /// everything, values > 1 match nothing.
    pub threshold: f64,
    /// What counts as one character when measuring edit distance
    pub unit: CodeUnit,
    /// Candidate count at which scoring switches to rayon (native `parallel` only)
    pub parallel_threshold: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            unit: CodeUnit::default(),
            parallel_threshold: 1000,
        }
    }
}

impl FilterConfig {
    /// Default configuration with a caller-supplied threshold
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}
