//! Shared test utilities for integration tests.
//!
//! Provides a scratch directory holding an old and a new document, and
//! settings tuned for deterministic, uncoloured reports.

#![allow(dead_code)]

use anyhow::Result;
use docdiff::infrastructure::config::{OutputFormat, Settings};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A pair of documents on disk.
pub struct DocumentPair {
    /// Temporary directory holding both files
    pub temp_dir: TempDir,
    /// Path of the old version
    pub old: PathBuf,
    /// Path of the new version
    pub new: PathBuf,
}

impl DocumentPair {
    /// Writes both versions as text files.
    pub fn new(old: &str, new: &str) -> Result<Self> {
        Self::from_bytes(old.as_bytes(), new.as_bytes())
    }

    /// Writes both versions from raw bytes.
    pub fn from_bytes(old: &[u8], new: &[u8]) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let old_path = temp_dir.path().join("old.txt");
        let new_path = temp_dir.path().join("new.txt");
        fs::write(&old_path, old)?;
        fs::write(&new_path, new)?;
        Ok(Self {
            temp_dir,
            old: old_path,
            new: new_path,
        })
    }

    /// Writes an extracted document whose pages are joined by form feeds.
    pub fn from_pages(old: &[&str], new: &[&str]) -> Result<Self> {
        Self::new(&old.join("\x0c"), &new.join("\x0c"))
    }

    /// Path for an output file inside the scratch directory.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

/// Default settings with colours off.
pub fn plain_settings() -> Settings {
    let mut settings = Settings::default();
    settings.output.color = false;
    settings
}

/// Plain settings rendering the given format.
pub fn settings_for(format: OutputFormat) -> Settings {
    let mut settings = plain_settings();
    settings.output.format = format;
    settings
}
