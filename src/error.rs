//! Unified error types for the Quince library.
//!
//! Both pipelines fail on deterministic, input-only checks; there is no I/O
//! and no retry path. A single error enum covers parsing, transforms, and
//! serialization, presenting a consistent API to users.

use thiserror::Error;

/// Main error type for Quince operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Tokenized input is not rectangular
    #[error("malformed input: row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Serializer invoked with no records
    #[error("missing input: no records to serialize")]
    EmptyInput,

    /// Serializer input disagrees on its column sequence
    #[error("record {index} does not share the columns of the first record")]
    MismatchedRecord { index: usize },

    /// A column transform rejected a cell
    #[error("invalid cell {reference}: {message}")]
    InvalidCell { reference: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for Quince operations.
pub type Result<T> = std::result::Result<T, Error>;
