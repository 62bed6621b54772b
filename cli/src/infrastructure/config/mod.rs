//! Configuration management for docdiff.
//!
//! Settings are layered: built-in defaults, then an optional `docdiff.toml`
//! (or the file named on the command line), then environment variables
//! prefixed with `DOCDIFF_`, using `__` between nested keys. For example:
//! `DOCDIFF_DIFF__ALGORITHM=myers` or `DOCDIFF_LIMITS__MAX_INPUT_CHARS=50000`.
//!
//! # Example
//!
//! ```
//! use docdiff::infrastructure::config::Settings;
//!
//! let settings = Settings::new().expect("Failed to load configuration");
//! assert_eq!(settings.limits.max_input_chars, 200_000);
//! ```

pub mod diff;
pub mod limits;
pub mod output;
pub mod telemetry;

pub use diff::DiffSettings;
pub use limits::LimitSettings;
pub use output::{OutputFormat, OutputSettings};
pub use telemetry::TelemetrySettings;

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Report settings.
    #[serde(default)]
    pub output: OutputSettings,
    /// Engine settings.
    #[serde(default)]
    pub diff: DiffSettings,
    /// Input size budget.
    #[serde(default)]
    pub limits: LimitSettings,
    /// Logging settings.
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Creates settings from defaults, an optional `docdiff.toml` in the
    /// working directory and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Creates settings, reading `path` instead of the default file.
    ///
    /// An explicit file must exist; the default `docdiff.toml` is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, or if the
    /// merged configuration cannot be deserialized.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("docdiff").required(false),
        };

        let s = Self::defaults()?
            .add_source(file)
            // Merge in Environment variables
            .add_source(
                Environment::with_prefix("DOCDIFF")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }

    /// Builder holding only the built-in defaults.
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("output.format", "text")?
            .set_default("output.color", true)?
            .set_default("output.show_replaced", false)?
            .set_default("diff.algorithm", "block")?
            .set_default("diff.granularity", "char")?
            .set_default("limits.max_input_chars", 200_000)?
            .set_default("telemetry.log_level", "warn")?
            .set_default("telemetry.json", false)
    }
}
