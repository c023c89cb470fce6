//! # sufdex - Suffix Array Substring Index
//!
//! sufdex indexes a fixed text once so that any substring pattern can be
//! located repeatedly in O(m log n) time, without rescanning the text.
//!
//! ## Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`index`] - Suffix table construction and pattern search
//! - [`error`] - Error types
//!
//! ## Quick Start
//!
//! ```
//! use sufdex::SuffixIndex;
//!
//! let index = SuffixIndex::from_bytes(b"abbracaddabbra");
//!
//! // Offsets come back in lexicographic suffix order
//! assert_eq!(index.search(b"abbra"), vec![9, 0]);
//! assert_eq!(index.search_sorted(b"abbra"), vec![0, 9]);
//! assert!(index.search(b"z").is_empty());
//! ```
//!
//! ## Concurrency
//!
//! A built [`SuffixIndex`] is immutable. It is `Send + Sync` whenever its
//! symbol type is, so any number of threads may search it at once.
//!
//! ## Logging
//!
//! Construction and bound resolution emit `tracing` events at `debug` and
//! `trace` level. Installing a subscriber is left to the application.

pub mod error;
pub mod index;

pub use error::{Error, Result};
pub use index::{IndexConfig, IndexStats, Offset, Suffix, SuffixIndex, SuffixIndexBuilder, Symbol};
