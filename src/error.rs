//! Error types for suffix index operations.
//!
//! A pattern that matches nothing is not an error: searches return an empty
//! result for it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was absent at the call boundary
    #[error("invalid argument: {0} is required")]
    InvalidArgument(&'static str),

    /// Configuration values that cannot be used
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration that could not be parsed or serialized
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
