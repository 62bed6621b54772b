//! Diff algorithm trait and runtime selection.
//!
//! Aligners implement [`DiffAlgorithm`] and share the opcode contract of
//! [`crate::opcode`], so callers can swap implementations freely.

use crate::block::BlockMatcher;
use crate::error::ParseOptionError;
use crate::myers::MyersDiff;
use crate::opcode::Opcode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Trait for diff algorithms.
///
/// Implementations can use different strategies (block matching, Myers, ...)
/// while producing the same kind of edit script.
///
/// The trait uses `Send + Sync` bounds to allow safe sharing across threads.
pub trait DiffAlgorithm: Send + Sync {
    /// Computes the edit script that transforms `old` into `new`.
    ///
    /// The returned opcodes are contiguous over both sequences. Empty inputs
    /// are valid: two empty sequences yield no opcodes, one empty side yields
    /// a single insert or delete.
    fn opcodes<T: Eq + Hash>(&self, old: &[T], new: &[T]) -> Vec<Opcode>;
}

/// Aligner selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Greedy longest-block matching (the default).
    #[default]
    Block,
    /// Myers shortest edit script.
    Myers,
}

impl Algorithm {
    /// Lowercase name of the algorithm.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Myers => "myers",
        }
    }
}

impl DiffAlgorithm for Algorithm {
    fn opcodes<T: Eq + Hash>(&self, old: &[T], new: &[T]) -> Vec<Opcode> {
        match self {
            Self::Block => BlockMatcher::new().opcodes(old, new),
            Self::Myers => MyersDiff::new().opcodes(old, new),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" | "blocks" | "sequence" => Ok(Self::Block),
            "myers" => Ok(Self::Myers),
            _ => Err(ParseOptionError::UnknownAlgorithm(s.to_string())),
        }
    }
}
