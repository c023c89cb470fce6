//! Types for suffix index configuration and reporting

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Position of a suffix in the indexed text (in symbols, not bytes)
pub type Offset = usize;

/// Texts longer than this are sorted in parallel by default
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100_000;

/// Configuration for suffix index building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Sort suffixes with rayon once the text exceeds this many symbols
    /// (default: 100k). Must be non-zero.
    pub parallel_threshold: usize,
    /// Fold case of the text at build time and of every pattern at query
    /// time (default: false)
    pub case_insensitive: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            case_insensitive: false,
        }
    }
}

impl IndexConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(Error::InvalidConfig(
                "parallel_threshold must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Statistics about a built suffix index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of symbols in the indexed text
    pub text_len: usize,
    /// Number of entries in the sorted offset table (equals text_len)
    pub suffix_count: usize,
    /// Whether the index was built case-insensitive
    pub case_insensitive: bool,
}

impl IndexStats {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
