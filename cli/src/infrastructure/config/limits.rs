//! Input size budget.
//!
//! Alignment time grows superlinearly for dissimilar texts, so oversized
//! inputs are rejected before the engine runs.

use serde::Deserialize;

/// Size limits applied to each input.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct LimitSettings {
    /// Maximum number of characters per extracted text; `0` disables the check.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
        }
    }
}

pub(super) const fn default_max_input_chars() -> usize {
    200_000
}
