//! Comparison workflow: load, guard, diff, render, publish.

use crate::error::CompareError;
use crate::extract::load_document;
use crate::infrastructure::config::Settings;
use crate::report::{ReportOptions, render_report};
use docdiff_engine::TextDiff;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Compares two documents on disk and returns the rendered report.
///
/// Both inputs are loaded and checked against the size budget before the
/// engine runs.
///
/// # Errors
///
/// Returns an error if an input cannot be read, is not text, has no text,
/// exceeds the size budget, or if the report cannot be rendered.
pub fn compare_files(old: &Path, new: &Path, settings: &Settings) -> Result<String, CompareError> {
    let old_doc = load_document(old)?;
    let new_doc = load_document(new)?;

    let limit = settings.limits.max_input_chars;
    old_doc.ensure_within(limit)?;
    new_doc.ensure_within(limit)?;

    let options = settings.diff.options();
    let comparison = TextDiff::new(options).compare(&old_doc.text, &new_doc.text);

    let counters = comparison.counters();
    info!(
        old = %old.display(),
        new = %new.display(),
        additions = counters.additions,
        deletions = counters.deletions,
        modifications = counters.modifications,
        "Compared documents"
    );

    render_report(
        settings.output.format,
        &old_doc,
        &new_doc,
        options,
        &comparison,
        ReportOptions::from(&settings.output),
    )
}

/// Writes the report to `destination`, or to stdout when `None`.
///
/// # Errors
///
/// Returns [`CompareError::Write`] if writing fails.
pub fn write_report(report: &str, destination: Option<&Path>) -> Result<(), CompareError> {
    match destination {
        Some(path) => fs::write(path, report).map_err(|source| CompareError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(report.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| CompareError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::OutputFormat;

    fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    fn plain_settings() -> Settings {
        let mut settings = Settings::default();
        settings.output.color = false;
        settings
    }

    #[test]
    fn test_compare_files_text_report() {
        let dir = tempfile::tempdir().unwrap();
        let old = write(dir.path(), "old.txt", "The cat sat.");
        let new = write(dir.path(), "new.txt", "The dog sat.");

        let report = compare_files(&old, &new, &plain_settings()).unwrap();
        assert!(report.contains("| Modifications |     1 |"));
        assert!(report.contains("The {~dog~} sat."));
    }

    #[test]
    fn test_size_guard_runs_before_engine() {
        let dir = tempfile::tempdir().unwrap();
        let old = write(dir.path(), "old.txt", "short");
        let new = write(dir.path(), "new.txt", "much longer text");

        let mut settings = plain_settings();
        settings.limits.max_input_chars = 8;
        let err = compare_files(&old, &new, &settings).unwrap_err();
        assert!(matches!(err, CompareError::InputTooLarge { chars: 16, limit: 8, .. }));
    }

    #[test]
    fn test_json_format() {
        let dir = tempfile::tempdir().unwrap();
        let old = write(dir.path(), "old.txt", "Hello world");
        let new = write(dir.path(), "new.txt", "Hello, world!");

        let mut settings = plain_settings();
        settings.output.format = OutputFormat::Json;
        let report = compare_files(&old, &new, &settings).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["summary"]["additions"], 2);
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");
        write_report("<html></html>", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_write_report_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        let err = write_report("x", Some(&path)).unwrap_err();
        assert!(matches!(err, CompareError::Write { .. }));
    }
}
