//! Loading already extracted document text.
//!
//! Inputs are UTF-8 text files as produced by an upstream extraction step,
//! with a form feed between pages. Page texts are concatenated in order
//! with nothing in between. A page with no text contributes an empty string;
//! a document with no text on any page is rejected.

use crate::error::CompareError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Page separator in extracted text.
pub const PAGE_BREAK: char = '\u{000C}';

/// Text of one input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Where the text came from.
    pub path: PathBuf,
    /// Number of pages in the source.
    pub pages: usize,
    /// Number of pages that carried no text.
    pub empty_pages: usize,
    /// Concatenated page text.
    pub text: String,
}

impl Document {
    /// Builds a document from raw extracted bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::NotText`] for binary payloads and
    /// [`CompareError::NoText`] when no page carries any text.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: &[u8]) -> Result<Self, CompareError> {
        let path = path.into();
        if bytes.contains(&0) {
            return Err(CompareError::NotText { path });
        }
        let Ok(raw) = std::str::from_utf8(bytes) else {
            return Err(CompareError::NotText { path });
        };

        let (text, pages, empty_pages) = join_pages(raw);
        if text.chars().all(char::is_whitespace) {
            return Err(CompareError::NoText { path });
        }
        if empty_pages > 0 {
            warn!(
                path = %path.display(),
                empty_pages,
                "Some pages yielded no text"
            );
        }

        Ok(Self {
            path,
            pages,
            empty_pages,
            text,
        })
    }

    /// Number of characters of text.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Rejects the document if it is longer than `limit` characters.
    ///
    /// A limit of zero disables the check.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InputTooLarge`] when the limit is exceeded.
    pub fn ensure_within(&self, limit: usize) -> Result<(), CompareError> {
        if limit == 0 {
            return Ok(());
        }
        let chars = self.char_count();
        if chars > limit {
            return Err(CompareError::InputTooLarge {
                path: self.path.clone(),
                chars,
                limit,
            });
        }
        Ok(())
    }
}

/// Splits on page breaks and concatenates the pages.
///
/// Returns the text, the page count and how many pages were empty.
fn join_pages(raw: &str) -> (String, usize, usize) {
    let mut text = String::with_capacity(raw.len());
    let (mut pages, mut empty_pages) = (0, 0);
    for page in raw.split(PAGE_BREAK) {
        pages += 1;
        if page.trim().is_empty() {
            empty_pages += 1;
        }
        text.push_str(page);
    }
    (text, pages, empty_pages)
}

/// Reads and validates a document from disk.
///
/// # Errors
///
/// Returns [`CompareError::Read`] if the file cannot be read, plus every
/// error of [`Document::from_bytes`].
pub fn load_document(path: &Path) -> Result<Document, CompareError> {
    let bytes = fs::read(path).map_err(|source| CompareError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = Document::from_bytes(path, &bytes)?;
    debug!(
        path = %path.display(),
        pages = document.pages,
        bytes = document.text.len(),
        "Loaded document"
    );
    Ok(document)
}
