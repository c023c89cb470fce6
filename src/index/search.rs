//! Bound searches over the sorted offset table
//!
//! All suffixes that start with a pattern sit in one contiguous block of the
//! table. Two binary searches find its edges:
//!
//! - the lower bound is the first entry whose suffix is >= the pattern
//!   (every suffix starting with the pattern is >= it);
//! - the upper bound is one past the last entry whose suffix is <= the
//!   pattern or starts with it.
//!
//! Both run the same loop over an inclusive `[start, end]` window with
//! `mid = start + (end - start) / 2`, and differ only in which way a probe
//! moves the window and in how an exhausted window resolves.

use super::suffix::Suffix;
use super::symbol::Symbol;
use super::types::Offset;
use std::cmp::Ordering;
use tracing::trace;

/// Which edge of the matching block to look for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bound {
    Lower,
    Upper,
}

impl Bound {
    /// Whether a probe at `suffix` moves the window right of `mid`
    #[inline]
    fn moves_right<T: Symbol>(self, suffix: &Suffix<'_, T>, pattern: &[T]) -> bool {
        let cmp = suffix.cmp_pattern(pattern);
        match self {
            // Suffixes at or past the pattern (a prefix match is always
            // >= the pattern) are candidates; look further left
            Bound::Lower => cmp == Ordering::Less && !suffix.starts_with(pattern),
            // Still before or inside the matching block; keep advancing
            Bound::Upper => cmp != Ordering::Greater || suffix.starts_with(pattern),
        }
    }

    /// Resolve a window that ran out while moving right of `mid`
    #[inline]
    fn exhausted_right(self, mid: usize, table_len: usize) -> Option<usize> {
        match self {
            // Every suffix sorts before the pattern
            Bound::Lower if mid + 1 >= table_len => None,
            Bound::Lower => Some(mid + 1),
            Bound::Upper => {
                debug_assert!(mid < table_len);
                Some(mid + 1)
            }
        }
    }
}

/// Binary search `table` for one edge of the block of suffixes starting with
/// `pattern`.
///
/// Returns a table index in `0..=table.len()`, or `None` when the lower
/// bound would fall past the end of the table (the pattern sorts after every
/// suffix). An empty table always yields `None`.
///
/// `table` must hold offsets into `text` only; callers pass the table built
/// for that text.
pub(crate) fn bound_search<T: Symbol>(
    text: &[T],
    table: &[Offset],
    pattern: &[T],
    bound: Bound,
) -> Option<usize> {
    if table.is_empty() {
        return None;
    }

    let mut start = 0usize;
    let mut end = table.len() - 1;

    loop {
        let mid = start + (end - start) / 2;
        let suffix = Suffix::new(text, table[mid]);

        if bound.moves_right(&suffix, pattern) {
            start = mid + 1;
            if end < start {
                let resolved = bound.exhausted_right(mid, table.len());
                trace!(?bound, mid, ?resolved, "bound search exhausted right");
                return resolved;
            }
        } else {
            // The window only empties on this side once mid reaches start
            if mid == start {
                trace!(?bound, mid, "bound search exhausted left");
                return Some(mid);
            }
            end = mid - 1;
        }
    }
}

/// Table range `[lower, upper)` of suffixes starting with `pattern`, or
/// `None` if there are none
pub(crate) fn match_range<T: Symbol>(
    text: &[T],
    table: &[Offset],
    pattern: &[T],
) -> Option<std::ops::Range<usize>> {
    let lower = bound_search(text, table, pattern, Bound::Lower)?;
    let upper = bound_search(text, table, pattern, Bound::Upper)?;

    (lower < upper).then_some(lower..upper)
}
