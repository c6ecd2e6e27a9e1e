//! Title Similarity
//!
//! Normalized Levenshtein matching of a typed guess against known titles:
//!
//! 1. [`edit_distance`] - minimum single-unit insertions, deletions and
//!    substitutions between two sequences
//! 2. [`similarity_from_distance`] - `1 - distance / max_len`, with two empty
//!    strings scoring exactly 1.0
//! 3. [`similarity_filter`] / [`SimilarityFilter`] - keep every candidate whose
//!    similarity is `>=` the threshold, in input order
//!
//! Comparison is exact unit equality: no case folding, no Unicode
//! normalization. By default a unit is a UTF-16 code unit, which matches how
//! the browser host measures and indexes strings.
//!
//! # Example
//!
//! ```rust
//! use guessmoji_core::similarity::{similarity, str_distance, CodeUnit};
//!
//! assert_eq!(str_distance("apple", "apply", CodeUnit::Utf16), 1);
//! assert!((similarity("apple", "apply", CodeUnit::Utf16) - 0.8).abs() < 1e-12);
//! ```

mod distance;
mod filter;
mod score;

use serde::{Deserialize, Serialize};

pub use distance::{edit_distance, str_distance};
pub use filter::{ScoredMatch, SimilarityFilter};
pub use score::{similarity, similarity_from_distance};

use crate::config::FilterConfig;

/// The unit of comparison for string distances
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeUnit {
    /// UTF-16 code units (an astral-plane emoji counts as two)
    #[default]
    Utf16,
    /// Unicode scalar values
    Char,
}

impl CodeUnit {
    /// Length of `s` measured in this unit
    pub fn len(self, s: &str) -> usize {
        match self {
            Self::Utf16 => s.encode_utf16().count(),
            Self::Char => s.chars().count(),
        }
    }
}

impl std::fmt::Display for CodeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utf16 => write!(f, "utf16"),
            Self::Char => write!(f, "char"),
        }
    }
}

/// Return the candidates whose similarity to `query` is at least `threshold`.
///
/// Input order is preserved and duplicates are kept. Callers without a
/// threshold of their own should pass [`DEFAULT_THRESHOLD`](crate::DEFAULT_THRESHOLD).
pub fn similarity_filter<'a, S>(query: &str, candidates: &'a [S], threshold: f64) -> Vec<&'a str>
where
    S: AsRef<str> + Sync,
{
    SimilarityFilter::new(FilterConfig::with_threshold(threshold)).filter(query, candidates)
}
