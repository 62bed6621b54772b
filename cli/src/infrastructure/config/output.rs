//! Report configuration.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary table and inline markup for a terminal.
    #[default]
    Text,
    /// Standalone HTML page with highlighted spans and a colour legend.
    Html,
    /// Machine-readable summary, opcodes and segments.
    Json,
}

/// Report settings.
#[derive(Debug, Deserialize, Clone)]
pub struct OutputSettings {
    /// Report format.
    #[serde(default)]
    pub format: OutputFormat,
    /// Whether terminal output uses ANSI colours.
    #[serde(default = "default_color")]
    pub color: bool,
    /// Whether modified spans also show the text they replaced.
    #[serde(default)]
    pub show_replaced: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: default_color(),
            show_replaced: false,
        }
    }
}

pub(super) const fn default_color() -> bool {
    true
}
