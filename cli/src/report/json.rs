//! Machine-readable report.

use crate::error::CompareError;
use crate::extract::Document;
use docdiff_engine::{Comparison, Counters, DiffOptions, Opcode, Segment};
use serde::Serialize;

/// Input metadata included in the JSON report.
#[derive(Debug, Serialize)]
pub struct JsonInput {
    /// Source path.
    pub path: String,
    /// Page count.
    pub pages: usize,
    /// Character count.
    pub chars: usize,
}

impl From<&Document> for JsonInput {
    fn from(doc: &Document) -> Self {
        Self {
            path: doc.path.display().to_string(),
            pages: doc.pages,
            chars: doc.char_count(),
        }
    }
}

/// JSON report layout.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Old input.
    pub old: JsonInput,
    /// New input.
    pub new: JsonInput,
    /// Options the engine ran with.
    pub options: DiffOptions,
    /// Change counts.
    pub summary: Counters,
    /// Edit script.
    pub opcodes: &'a [Opcode],
    /// Segments in document order.
    pub segments: &'a [Segment],
}

/// Renders the comparison as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`CompareError::Serialize`] if serialization fails.
pub fn render_json(
    old: &Document,
    new: &Document,
    options: DiffOptions,
    comparison: &Comparison,
) -> Result<String, CompareError> {
    let report = JsonReport {
        old: old.into(),
        new: new.into(),
        options,
        summary: comparison.counters(),
        opcodes: comparison.opcodes(),
        segments: &comparison.segments,
    };
    let mut out = serde_json::to_string_pretty(&report)?;
    out.push('\n');
    Ok(out)
}
