//! Levenshtein edit distance

use strsim::generic_levenshtein;

use super::CodeUnit;

/// Minimum number of single-unit insertions, deletions or substitutions that
/// turn `a` into `b`.
///
/// Total over all inputs; an empty side yields the length of the other.
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    generic_levenshtein(&Units(a), &Units(b))
}

/// Borrowed unit sequence; strsim iterates `&Iter`, which a bare slice can't offer
struct Units<'s, T>(&'s [T]);

impl<'u, 's, T> IntoIterator for &'u Units<'s, T> {
    type Item = &'s T;
    type IntoIter = std::slice::Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Edit distance between two strings measured in `unit`
pub fn str_distance(a: &str, b: &str, unit: CodeUnit) -> usize {
    match unit {
        CodeUnit::Utf16 => edit_distance(&utf16_units(a), &utf16_units(b)),
        CodeUnit::Char => edit_distance(&char_units(a), &char_units(b)),
    }
}

#[inline]
pub(crate) fn utf16_units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

#[inline]
pub(crate) fn char_units(s: &str) -> Vec<char> {
    s.chars().collect()
}
