//! Error types for the diff engine.
//!
//! Alignment and rendering are total, so the only fallible surface is
//! parsing engine options from strings (CLI flags, configuration files).

use thiserror::Error;

/// Error returned when an engine option cannot be parsed from a string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseOptionError {
    /// The algorithm name is not one of the supported aligners.
    #[error("Unknown diff algorithm '{0}' (expected 'block' or 'myers')")]
    UnknownAlgorithm(String),

    /// The granularity name is not one of the supported tokenizations.
    #[error("Unknown granularity '{0}' (expected 'char', 'word' or 'line')")]
    UnknownGranularity(String),
}
