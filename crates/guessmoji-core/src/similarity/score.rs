//! Similarity scoring

use super::distance::{char_units, edit_distance, utf16_units};
use super::CodeUnit;

/// Normalize an edit distance into a similarity in `[0, 1]`.
///
/// `max_len` is the longer input's length. Two empty strings are identical,
/// so `max_len == 0` scores exactly 1.0.
#[inline]
pub fn similarity_from_distance(distance: usize, max_len: usize) -> f64 {
    if max_len == 0 {
        return 1.0;
    }
    1.0 - distance as f64 / max_len as f64
}

/// Similarity between two strings measured in `unit`
pub fn similarity(a: &str, b: &str, unit: CodeUnit) -> f64 {
    match unit {
        CodeUnit::Utf16 => score_units(&utf16_units(a), &utf16_units(b)),
        CodeUnit::Char => score_units(&char_units(a), &char_units(b)),
    }
}

#[inline]
pub(crate) fn score_units<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    similarity_from_distance(edit_distance(a, b), a.len().max(b.len()))
}
