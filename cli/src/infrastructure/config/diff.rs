//! Engine configuration.

use docdiff_engine::{Algorithm, DiffOptions, Granularity};
use serde::Deserialize;

/// Engine settings.
#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct DiffSettings {
    /// Aligner.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Unit of comparison.
    #[serde(default)]
    pub granularity: Granularity,
}

impl DiffSettings {
    /// Engine options described by these settings.
    #[must_use]
    pub const fn options(&self) -> DiffOptions {
        DiffOptions {
            algorithm: self.algorithm,
            granularity: self.granularity,
        }
    }
}
