//! SimilarityFilter - threshold filter over a candidate list

use serde::Serialize;

#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
use rayon::prelude::*;

use super::distance::{char_units, utf16_units};
use super::score::score_units;
use super::CodeUnit;
use crate::config::FilterConfig;

/// A candidate that passed the threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMatch<'a> {
    /// Position in the candidate list
    pub index: usize,
    pub value: &'a str,
    pub similarity: f64,
}

/// Stateless, configured similarity filter.
///
/// Output is always in candidate order; this is a filter, not a ranked
/// search. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct SimilarityFilter {
    config: FilterConfig,
}

impl SimilarityFilter {
    /// Create a filter with custom configuration
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Candidates whose similarity to `query` is `>=` the threshold
    pub fn filter<'a, S>(&self, query: &str, candidates: &'a [S]) -> Vec<&'a str>
    where
        S: AsRef<str> + Sync,
    {
        self.scored(query, candidates)
            .into_iter()
            .map(|m| m.value)
            .collect()
    }

    /// Like [`filter`](Self::filter) but returns owned strings
    pub fn filter_owned<S>(&self, query: &str, candidates: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        self.scored(query, candidates)
            .into_iter()
            .map(|m| m.value.to_string())
            .collect()
    }

    /// Matches with their index and similarity, in candidate order
    pub fn scored<'a, S>(&self, query: &str, candidates: &'a [S]) -> Vec<ScoredMatch<'a>>
    where
        S: AsRef<str> + Sync,
    {
        // The query is split once and reused for every candidate
        let matches = match self.config.unit {
            CodeUnit::Utf16 => self.match_candidates(&utf16_units(query), candidates, utf16_units),
            CodeUnit::Char => self.match_candidates(&char_units(query), candidates, char_units),
        };

        tracing::trace!(
            candidates = candidates.len(),
            matches = matches.len(),
            threshold = self.config.threshold,
            unit = %self.config.unit,
            "similarity filter"
        );

        matches
    }

    /// Match against candidates - parallel on native for large lists, sequential otherwise
    #[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
    fn match_candidates<'a, S, T, F>(
        &self,
        query: &[T],
        candidates: &'a [S],
        split: F,
    ) -> Vec<ScoredMatch<'a>>
    where
        S: AsRef<str> + Sync,
        T: PartialEq + Sync,
        F: Fn(&str) -> Vec<T> + Sync,
    {
        if candidates.len() >= self.config.parallel_threshold {
            // Indexed parallel iterators collect in input order
            candidates
                .par_iter()
                .enumerate()
                .filter_map(|(idx, c)| self.score_single(query, idx, c.as_ref(), &split))
                .collect()
        } else {
            self.match_sequential(query, candidates, split)
        }
    }

    /// Sequential matching (WASM or when parallel feature disabled)
    #[cfg(any(target_arch = "wasm32", not(feature = "parallel")))]
    fn match_candidates<'a, S, T, F>(
        &self,
        query: &[T],
        candidates: &'a [S],
        split: F,
    ) -> Vec<ScoredMatch<'a>>
    where
        S: AsRef<str> + Sync,
        T: PartialEq + Sync,
        F: Fn(&str) -> Vec<T> + Sync,
    {
        self.match_sequential(query, candidates, split)
    }

    fn match_sequential<'a, S, T, F>(
        &self,
        query: &[T],
        candidates: &'a [S],
        split: F,
    ) -> Vec<ScoredMatch<'a>>
    where
        S: AsRef<str>,
        T: PartialEq,
        F: Fn(&str) -> Vec<T>,
    {
        candidates
            .iter()
            .enumerate()
            .filter_map(|(idx, c)| self.score_single(query, idx, c.as_ref(), &split))
            .collect()
    }

    /// Score one candidate; `None` when below threshold
    #[inline]
    fn score_single<'a, T, F>(
        &self,
        query: &[T],
        index: usize,
        candidate: &'a str,
        split: &F,
    ) -> Option<ScoredMatch<'a>>
    where
        T: PartialEq,
        F: Fn(&str) -> Vec<T>,
    {
        let similarity = score_units(query, &split(candidate));
        // `>=` exactly; a NaN threshold therefore matches nothing
        (similarity >= self.config.threshold).then_some(ScoredMatch {
            index,
            value: candidate,
            similarity,
        })
    }
}
