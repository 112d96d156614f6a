//! Error types for table cleaning.

use thiserror::Error;

/// Errors raised by the cleaning pipeline.
#[derive(Debug, Error)]
pub enum NormalizationError {
    /// Two raw column names standardize to the same name.
    #[error("columns '{first}' and '{second}' both standardize to '{name}'")]
    ColumnCollision {
        name: String,
        first: String,
        second: String,
    },

    /// The configured missing marker is empty or blank.
    #[error("missing marker must not be blank")]
    BlankMissingMarker,

    /// Polars operation failed.
    #[error("DataFrame operation failed: {0}")]
    PolarsError(#[from] polars::prelude::PolarsError),
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, NormalizationError>;
