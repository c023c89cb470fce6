//! Suffix array indexing module
//!
//! This module provides O(m log n) exact substring search over a fixed text
//! using a suffix array.
//!
//! ## Architecture
//!
//! - `builder`: Constructs the sorted offset table from text
//! - `search`: Lower/upper bound binary searches over the table
//! - `suffix_index`: The index type that owns the text and table
//! - `suffix`: Borrowed suffix views used for comparison
//! - `symbol`: Alphabets the index can be built over
//! - `types`: Configuration and statistics

pub mod builder;
pub(crate) mod search;
pub mod suffix;
pub mod suffix_index;
pub mod symbol;
pub mod types;

// Re-exports for convenience
pub use builder::{build_suffix_table, SuffixIndexBuilder};
pub use suffix::Suffix;
pub use suffix_index::SuffixIndex;
pub use symbol::Symbol;
pub use types::*;
