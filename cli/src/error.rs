//! Error types for the comparison front end.
//!
//! The engine itself cannot fail. Everything that can go wrong happens
//! around it: reading inputs, rejecting payloads the engine must never see,
//! enforcing the size budget, loading settings and writing the report.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing inputs for, or publishing output of, a
/// comparison.
#[derive(Error, Debug)]
pub enum CompareError {
    /// The input file could not be read.
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        /// Path of the unreadable input.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input is not plain text.
    #[error("'{}' is not a text document (binary or invalid UTF-8 content)", .path.display())]
    NotText {
        /// Path of the rejected input.
        path: PathBuf,
    },

    /// Extraction produced no text on any page.
    #[error("No text could be extracted from '{}'", .path.display())]
    NoText {
        /// Path of the empty input.
        path: PathBuf,
    },

    /// The input exceeds the configured size budget.
    #[error("'{}' has {chars} characters, above the limit of {limit}", .path.display())]
    InputTooLarge {
        /// Path of the oversized input.
        path: PathBuf,
        /// Number of characters in the extracted text.
        chars: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// Settings could not be built or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The report could not be written.
    #[error("Failed to write report to '{}': {source}", .path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// JSON rendering failed.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
