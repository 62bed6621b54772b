//! Command-line arguments.

use crate::infrastructure::config::{OutputFormat, Settings};
use clap::Parser;
use docdiff_engine::{Algorithm, Granularity};
use std::path::PathBuf;

/// Compare two extracted document texts.
#[derive(Debug, Parser)]
#[command(name = "docdiff", version, about, long_about = None)]
pub struct Cli {
    /// Old version of the document (extracted UTF-8 text, form feeds between pages).
    pub old: PathBuf,

    /// New version of the document.
    pub new: PathBuf,

    /// Report format.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Unit of comparison: char, word or line.
    #[arg(short, long)]
    pub granularity: Option<Granularity>,

    /// Aligner: block or myers.
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Also show the old text of modified spans.
    #[arg(long)]
    pub show_replaced: bool,

    /// Maximum characters per input (0 disables the check).
    #[arg(long, value_name = "N")]
    pub max_input_chars: Option<usize>,

    /// Disable ANSI colours.
    #[arg(long)]
    pub no_color: bool,

    /// Write the report to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Settings file (defaults to `docdiff.toml` when present).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Applies command-line overrides on top of loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(format) = self.format {
            settings.output.format = format;
        }
        if let Some(granularity) = self.granularity {
            settings.diff.granularity = granularity;
        }
        if let Some(algorithm) = self.algorithm {
            settings.diff.algorithm = algorithm;
        }
        if self.show_replaced {
            settings.output.show_replaced = true;
        }
        if let Some(limit) = self.max_input_chars {
            settings.limits.max_input_chars = limit;
        }
        if self.no_color || self.output.is_some() {
            settings.output.color = false;
        }
        if self.verbose {
            settings.telemetry.log_level = "debug".to_string();
        }
    }
}
