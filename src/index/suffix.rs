//! Borrowed view of one suffix of the indexed text

use super::symbol::Symbol;
use super::types::Offset;
use std::cmp::Ordering;

/// The suffix of `text` starting at `offset`.
///
/// Never copies: comparisons walk the shared text directly.
#[derive(Debug, Clone, Copy)]
pub struct Suffix<'a, T> {
    text: &'a [T],
    offset: Offset,
}

impl<'a, T: Symbol> Suffix<'a, T> {
    /// `offset` must be at most `text.len()`
    #[inline]
    pub(crate) fn new(text: &'a [T], offset: Offset) -> Self {
        debug_assert!(offset <= text.len());
        Self { text, offset }
    }

    /// Start of this suffix in the text
    #[inline]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len() - self.offset
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The suffix content
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        &self.text[self.offset..]
    }

    /// Check if this suffix begins with `pattern`
    #[inline]
    pub fn starts_with(&self, pattern: &[T]) -> bool {
        self.as_slice().starts_with(pattern)
    }

    /// Lexicographic comparison against a pattern; a proper prefix sorts first
    #[inline]
    pub fn cmp_pattern(&self, pattern: &[T]) -> Ordering {
        self.as_slice().cmp(pattern)
    }
}

impl<T: Symbol> PartialEq for Suffix<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Symbol> Eq for Suffix<'_, T> {}

impl<T: Symbol> PartialOrd for Suffix<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Symbol> Ord for Suffix<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
