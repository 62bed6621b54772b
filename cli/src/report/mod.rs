//! Presentation of a comparison.
//!
//! Every format shows the same two parts: a summary table of the three
//! change counters and the detailed, category-styled text.

pub mod html;
pub mod json;
pub mod summary;
pub mod terminal;

pub use html::render_html;
pub use json::render_json;
pub use summary::summary_table;
pub use terminal::render_terminal;

use crate::error::CompareError;
use crate::extract::Document;
use crate::infrastructure::config::{OutputFormat, OutputSettings};
use docdiff_engine::{Comparison, DiffOptions};

/// Styling switches shared by the text and HTML formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportOptions {
    /// Use ANSI colours in terminal output.
    pub color: bool,
    /// Show the old text of modified spans next to the new text.
    pub show_replaced: bool,
}

impl From<&OutputSettings> for ReportOptions {
    fn from(settings: &OutputSettings) -> Self {
        Self {
            color: settings.color,
            show_replaced: settings.show_replaced,
        }
    }
}

/// Renders a comparison in the requested format.
///
/// # Errors
///
/// Returns [`CompareError::Serialize`] if JSON rendering fails.
pub fn render_report(
    format: OutputFormat,
    old: &Document,
    new: &Document,
    diff_options: DiffOptions,
    comparison: &Comparison,
    options: ReportOptions,
) -> Result<String, CompareError> {
    match format {
        OutputFormat::Text => Ok(render_terminal(comparison, options)),
        OutputFormat::Html => Ok(render_html(old, new, comparison, options)),
        OutputFormat::Json => render_json(old, new, diff_options, comparison),
    }
}
