//! Suffix index over an owned, immutable text
//!
//! Queries are read-only, so a built index can be shared across threads and
//! searched concurrently without locking.

use super::builder::SuffixIndexBuilder;
use super::search::{bound_search, match_range, Bound};
use super::suffix::Suffix;
use super::symbol::Symbol;
use super::types::*;
use crate::error::{Error, Result};
use rayon::prelude::*;
use std::borrow::Cow;
use std::ops::Range;

/// A text together with its suffix offsets in lexicographic order
#[derive(Debug, Clone)]
pub struct SuffixIndex<T = u8> {
    text: Vec<T>,
    /// Sorted offset table, a permutation of `0..text.len()`
    table: Vec<Offset>,
    config: IndexConfig,
}

impl<T: Symbol> SuffixIndex<T> {
    /// Build an index over `text` with default configuration
    pub fn build(text: impl Into<Vec<T>>) -> Self {
        let mut builder = SuffixIndexBuilder::with_defaults();
        builder.append_vec(text.into());
        builder.build()
    }

    /// Build an index over `text`
    ///
    /// Fails if `config` does not validate.
    pub fn with_config(text: impl Into<Vec<T>>, config: IndexConfig) -> Result<Self> {
        let mut builder = SuffixIndexBuilder::new(config)?;
        builder.append_vec(text.into());
        Ok(builder.build())
    }

    pub(crate) fn from_parts(text: Vec<T>, table: Vec<Offset>, config: IndexConfig) -> Self {
        debug_assert_eq!(text.len(), table.len());
        Self {
            text,
            table,
            config,
        }
    }

    /// Number of suffixes (equals the text length)
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The indexed text (case-folded if the index is case-insensitive)
    #[inline]
    pub fn text(&self) -> &[T] {
        &self.text
    }

    /// The sorted offset table
    #[inline]
    pub fn offsets(&self) -> &[Offset] {
        &self.table
    }

    /// View of the `rank`-th smallest suffix
    pub fn suffix(&self, rank: usize) -> Option<Suffix<'_, T>> {
        self.table
            .get(rank)
            .map(|&offset| Suffix::new(&self.text, offset))
    }

    /// Iterate over all suffixes in lexicographic order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Suffix<'_, T>> + '_ {
        self.table
            .iter()
            .map(move |&offset| Suffix::new(&self.text, offset))
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Get statistics about this index
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            text_len: self.text.len(),
            suffix_count: self.table.len(),
            case_insensitive: self.config.case_insensitive,
        }
    }

    /// Apply case folding if the index was built case-insensitive
    fn prepare<'p>(&self, pattern: &'p [T]) -> Cow<'p, [T]> {
        if self.config.case_insensitive {
            Cow::Owned(pattern.iter().map(|&s| s.fold_case()).collect())
        } else {
            Cow::Borrowed(pattern)
        }
    }

    /// First table index whose suffix is >= `pattern`, or `None` if the
    /// pattern sorts after every suffix
    pub fn lower_bound(&self, pattern: &[T]) -> Option<usize> {
        let pattern = self.prepare(pattern);
        bound_search(&self.text, &self.table, &pattern, Bound::Lower)
    }

    /// One past the last table index whose suffix is <= `pattern` or starts
    /// with it. `None` only for an empty index.
    pub fn upper_bound(&self, pattern: &[T]) -> Option<usize> {
        let pattern = self.prepare(pattern);
        bound_search(&self.text, &self.table, &pattern, Bound::Upper)
    }

    /// Table range of the suffixes starting with `pattern`
    ///
    /// Returns `None` when nothing matches.
    pub fn range(&self, pattern: &[T]) -> Option<Range<usize>> {
        let pattern = self.prepare(pattern);
        match_range(&self.text, &self.table, &pattern)
    }

    /// Search for a pattern
    ///
    /// Returns the offset of every suffix starting with `pattern`, in table
    /// (lexicographic suffix) order. The empty pattern matches every offset.
    ///
    /// Time: O(m log n) for the bounds plus the size of the result.
    pub fn search(&self, pattern: &[T]) -> Vec<Offset> {
        self.range(pattern)
            .map(|range| self.table[range].to_vec())
            .unwrap_or_default()
    }

    /// Search with a pattern that may be absent
    ///
    /// An absent pattern is rejected rather than treated as empty.
    pub fn try_search(&self, pattern: Option<&[T]>) -> Result<Vec<Offset>> {
        let pattern = pattern.ok_or(Error::InvalidArgument("pattern"))?;
        Ok(self.search(pattern))
    }

    /// Search and return matching offsets in ascending numeric order
    pub fn search_sorted(&self, pattern: &[T]) -> Vec<Offset> {
        let mut offsets = self.search(pattern);
        offsets.sort_unstable();
        offsets
    }

    /// Search and return at most `limit` matches, in table order
    pub fn search_limited(&self, pattern: &[T], limit: usize) -> Vec<Offset> {
        match self.range(pattern) {
            Some(range) => {
                let end = range.end.min(range.start.saturating_add(limit));
                self.table[range.start..end].to_vec()
            }
            None => Vec::new(),
        }
    }

    /// Run independent searches in parallel
    ///
    /// Results are returned in the order of `patterns`.
    pub fn search_many<P>(&self, patterns: &[P]) -> Vec<Vec<Offset>>
    where
        P: AsRef<[T]> + Sync,
    {
        patterns
            .par_iter()
            .map(|pattern| self.search(pattern.as_ref()))
            .collect()
    }

    /// Get the number of matches for a pattern (without collecting offsets)
    pub fn count(&self, pattern: &[T]) -> usize {
        self.range(pattern).map_or(0, |range| range.len())
    }

    /// Check if pattern occurs in the text
    pub fn contains(&self, pattern: &[T]) -> bool {
        self.range(pattern).is_some()
    }
}

impl SuffixIndex<u8> {
    /// Build a byte index over `text`
    pub fn from_bytes(text: &[u8]) -> Self {
        Self::build(text)
    }
}

impl SuffixIndex<char> {
    /// Build an index over the characters of `text`
    ///
    /// Offsets are character positions, not byte positions.
    pub fn from_text(text: &str) -> Self {
        Self::build(text.chars().collect::<Vec<_>>())
    }

    /// Search for a string pattern
    pub fn search_str(&self, pattern: &str) -> Vec<Offset> {
        let pattern: Vec<char> = pattern.chars().collect();
        self.search(&pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_set(mut offsets: Vec<Offset>) -> Vec<Offset> {
        offsets.sort_unstable();
        offsets
    }

    #[test]
    fn test_search_basic() {
        let index = SuffixIndex::from_bytes(b"abbracaddabbra");

        assert_eq!(index.search(b"abbra"), vec![9, 0]);
        // "ra" (12) sorts before "racaddabbra" (3)
        assert_eq!(index.search(b"ra"), vec![12, 3]);
        assert!(index.search(b"z").is_empty());
        assert_eq!(index.search(b"a"), vec![13, 9, 0, 4, 6]);
    }

    #[test]
    fn test_search_sorted() {
        let index = SuffixIndex::from_bytes(b"abbracaddabbra");
        assert_eq!(index.search_sorted(b"a"), vec![0, 4, 6, 9, 13]);
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let index = SuffixIndex::from_bytes(b"banana");
        assert_eq!(index.search(b""), index.offsets().to_vec());
        assert_eq!(index.count(b""), 6);
    }

    #[test]
    fn test_empty_text() {
        let index = SuffixIndex::from_bytes(b"");
        assert!(index.is_empty());
        assert!(index.search(b"").is_empty());
        assert!(index.search(b"a").is_empty());
        assert_eq!(index.lower_bound(b"a"), None);
        assert_eq!(index.upper_bound(b"a"), None);
        assert!(!index.contains(b""));
    }

    #[test]
    fn test_whole_text_pattern() {
        let index = SuffixIndex::from_bytes(b"abbracaddabbra");
        assert_eq!(index.search(b"abbracaddabbra"), vec![0]);
        assert!(index.search(b"abbracaddabbrax").is_empty());
    }

    #[test]
    fn test_try_search_rejects_absent_pattern() {
        let index = SuffixIndex::from_bytes(b"abc");
        let err = index.try_search(None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument("pattern")));

        assert_eq!(index.try_search(Some(&b"bc"[..])).unwrap(), vec![1]);
        assert!(index.try_search(Some(&b"x"[..])).unwrap().is_empty());
    }

    #[test]
    fn test_search_limited() {
        let index = SuffixIndex::from_bytes(b"aaaa");
        assert_eq!(index.search_limited(b"a", 2), vec![3, 2]);
        assert_eq!(index.search_limited(b"a", 100).len(), 4);
        assert!(index.search_limited(b"a", 0).is_empty());
        assert!(index.search_limited(b"b", 3).is_empty());
        assert_eq!(index.search_limited(b"a", usize::MAX).len(), 4);
    }

    #[test]
    fn test_count_and_contains() {
        let index = SuffixIndex::from_bytes(b"mississippi");
        assert_eq!(index.count(b"ss"), 2);
        assert_eq!(index.count(b"i"), 4);
        assert_eq!(index.count(b"xyz"), 0);
        assert!(index.contains(b"sip"));
        assert!(!index.contains(b"spi"));
    }

    #[test]
    fn test_search_many_preserves_order() {
        let index = SuffixIndex::from_bytes(b"abbracaddabbra");
        let patterns: Vec<&[u8]> = vec![&b"ra"[..], &b"z"[..], &b"abbra"[..]];
        let results = index.search_many(&patterns);
        assert_eq!(results, vec![vec![12, 3], vec![], vec![9, 0]]);
    }

    #[test]
    fn test_case_insensitive_search() {
        let config = IndexConfig {
            case_insensitive: true,
            ..Default::default()
        };
        let index = SuffixIndex::with_config(b"Hello World".to_vec(), config).unwrap();

        assert_eq!(index.search(b"WORLD"), vec![6]);
        assert_eq!(index.search(b"hello"), vec![0]);
        assert!(index.stats().case_insensitive);
    }

    #[test]
    fn test_with_config_rejects_zero_threshold() {
        let config = IndexConfig {
            parallel_threshold: 0,
            ..Default::default()
        };
        let err = SuffixIndex::with_config(b"abc".to_vec(), config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_with_config_takes_text_without_copying() {
        let text = b"mississippi".to_vec();
        let ptr = text.as_ptr();
        let index = SuffixIndex::with_config(text, IndexConfig::default()).unwrap();
        assert_eq!(index.text().as_ptr(), ptr);
    }

    #[test]
    fn test_case_sensitive_by_default() {
        let index = SuffixIndex::from_bytes(b"Hello World");
        assert!(index.search(b"hello").is_empty());
        assert_eq!(index.search(b"Hello"), vec![0]);
    }

    #[test]
    fn test_char_index() {
        let index = SuffixIndex::from_text("naïve naïf");
        assert_eq!(as_set(index.search_str("naï")), vec![0, 6]);
        assert_eq!(index.search_str("ïf"), vec![8]);
        assert_eq!(index.len(), 10);
    }

    #[test]
    fn test_suffix_views_in_order() {
        let index = SuffixIndex::from_bytes(b"banana");
        let suffixes: Vec<&[u8]> = index.iter().map(|s| s.as_slice()).collect();
        assert_eq!(
            suffixes,
            vec![
                &b"a"[..],
                &b"ana"[..],
                &b"anana"[..],
                &b"banana"[..],
                &b"na"[..],
                &b"nana"[..],
            ]
        );
        assert_eq!(index.suffix(3).map(|s| s.offset()), Some(0));
        assert!(index.suffix(6).is_none());
    }

    #[test]
    fn test_stats() {
        let index = SuffixIndex::from_bytes(b"hello");
        let stats = index.stats();
        assert_eq!(stats.text_len, 5);
        assert_eq!(stats.suffix_count, 5);
        assert!(!stats.case_insensitive);
    }
}
