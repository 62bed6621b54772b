//! Docdiff - compare two versions of a document.
//!
//! Loads the extracted text of two documents, aligns them with
//! [`docdiff_engine`] and reports the additions, deletions and
//! modifications as terminal text, a standalone HTML page or JSON.
//!
//! Settings come from built-in defaults, an optional `docdiff.toml`,
//! `DOCDIFF_` environment variables and finally command-line flags.

/// Comparison workflow.
pub mod app;
/// Command-line arguments.
pub mod cli;
/// Error taxonomy.
pub mod error;
/// Document text loading.
pub mod extract;
/// Infrastructure components (config, telemetry).
pub mod infrastructure;
/// Report formats.
pub mod report;

pub use app::{compare_files, write_report};
pub use cli::Cli;
pub use error::CompareError;
pub use extract::{Document, load_document};
