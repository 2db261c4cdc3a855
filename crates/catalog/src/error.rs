//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while fetching or parsing the product feed.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The feed could not be reached or read.
    #[error("Failed to fetch product feed: {reason}")]
    FetchFailed { reason: String },

    /// I/O error while reading a feed file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The feed body was not a valid product array.
    #[error("Failed to parse product feed: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A product record carried an invalid value.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
