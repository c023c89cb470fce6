//! Suffix index builder
//!
//! Builds the sorted offset table for a text by:
//! 1. Accumulating the text (case-folded if configured)
//! 2. Sorting all suffix offsets by the suffix they point to, in parallel
//!    for large texts
//!
//! The resulting table enables O(m log n) substring search.

use super::suffix::Suffix;
use super::suffix_index::SuffixIndex;
use super::symbol::Symbol;
use super::types::*;
use crate::error::Result;
use rayon::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Builder for constructing a suffix index from text supplied in chunks
pub struct SuffixIndexBuilder<T = u8> {
    config: IndexConfig,
    /// Accumulated text (case-folded if configured)
    text: Vec<T>,
}

impl<T: Symbol> SuffixIndexBuilder<T> {
    /// Create a new builder with the given configuration
    ///
    /// Fails with [`Error::InvalidConfig`](crate::Error::InvalidConfig) if
    /// the configuration does not validate.
    pub fn new(config: IndexConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            text: Vec::new(),
        })
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self {
            config: IndexConfig::default(),
            text: Vec::new(),
        }
    }

    /// Append a chunk of text
    pub fn append(&mut self, chunk: &[T]) -> &mut Self {
        if self.config.case_insensitive {
            self.text.extend(chunk.iter().map(|&s| s.fold_case()));
        } else {
            self.text.extend_from_slice(chunk);
        }
        self
    }

    /// Append an owned chunk of text
    ///
    /// The first chunk is moved in without copying; case folding, when
    /// configured, happens in place.
    pub fn append_vec(&mut self, mut chunk: Vec<T>) -> &mut Self {
        if self.config.case_insensitive {
            for symbol in chunk.iter_mut() {
                *symbol = symbol.fold_case();
            }
        }
        if self.text.is_empty() {
            self.text = chunk;
        } else {
            self.text.append(&mut chunk);
        }
        self
    }

    /// Append a single symbol
    pub fn push(&mut self, symbol: T) -> &mut Self {
        let symbol = if self.config.case_insensitive {
            symbol.fold_case()
        } else {
            symbol
        };
        self.text.push(symbol);
        self
    }

    /// Get the current size of accumulated text
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Build the index, moving the accumulated text into it
    ///
    /// This is the main computation - sorts all suffixes
    pub fn build(self) -> SuffixIndex<T> {
        let started = Instant::now();
        let threshold = self.config.parallel_threshold;
        let table = build_suffix_table(&self.text, threshold);

        debug!(
            text_len = self.text.len(),
            parallel = self.text.len() > threshold,
            elapsed_us = started.elapsed().as_micros() as u64,
            "built suffix table"
        );

        SuffixIndex::from_parts(self.text, table, self.config)
    }
}

impl<T: Symbol> Extend<T> for SuffixIndexBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for symbol in iter {
            self.push(symbol);
        }
    }
}

/// Build the sorted offset table for `text`
///
/// 1. Creates array of all suffix offsets [0, 1, 2, ..., n-1]
/// 2. Sorts offsets by comparing the full suffixes they point to
/// 3. Uses rayon when the text is longer than `parallel_threshold`
///
/// Time: O(n log n) comparisons of up to O(n) symbols each
/// Space: O(n) for the table
pub fn build_suffix_table<T: Symbol>(text: &[T], parallel_threshold: usize) -> Vec<Offset> {
    let n = text.len();
    let mut table: Vec<Offset> = (0..n).collect();

    // Distinct offsets never compare equal, so an unstable sort is
    // deterministic here.
    if n > parallel_threshold {
        table.par_sort_unstable_by(|&a, &b| compare_suffixes(text, a, b));
    } else {
        table.sort_unstable_by(|&a, &b| compare_suffixes(text, a, b));
    }

    table
}

/// Compare two suffixes lexicographically over their whole length
#[inline]
fn compare_suffixes<T: Symbol>(text: &[T], a: Offset, b: Offset) -> std::cmp::Ordering {
    Suffix::new(text, a).cmp(&Suffix::new(text, b))
}
