//! Entry points tying tokenization, alignment and rendering together.

use crate::algorithm::{Algorithm, DiffAlgorithm};
use crate::block::BlockMatcher;
use crate::opcode::Opcode;
use crate::render::{Category, Counters, Segment, Symbol, render};
use crate::tokenize::{Granularity, tokenize};
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use tracing::debug;

/// Aligns two sequences with the default block matcher.
///
/// Total over all finite inputs: two empty sequences give no opcodes, one
/// empty side gives a single insert or delete, identical sequences give a
/// single equal opcode.
#[must_use]
pub fn align<T: Eq + Hash>(old: &[T], new: &[T]) -> Vec<Opcode> {
    BlockMatcher::new().opcodes(old, new)
}

/// Compares two texts character by character with the block matcher.
#[must_use]
pub fn diff(old: &str, new: &str) -> Comparison {
    TextDiff::default().compare(old, new)
}

/// Options controlling a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffOptions {
    /// Aligner to use.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Unit of comparison.
    #[serde(default)]
    pub granularity: Granularity,
}

impl DiffOptions {
    /// Sets the aligner.
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the granularity.
    #[must_use]
    pub const fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }
}

/// Edit script of one comparison and its change counts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffResult {
    /// Opcodes in document order. Indices refer to tokens of the chosen
    /// granularity (characters by default), not bytes.
    pub opcodes: Vec<Opcode>,
    /// Change counts, one per non-equal opcode.
    pub counters: Counters,
}

/// Full outcome of comparing two texts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Comparison {
    /// Edit script and counters.
    pub result: DiffResult,
    /// Segments in document order, one per opcode.
    pub segments: Vec<Segment>,
}

impl Comparison {
    /// Change counts.
    #[must_use]
    pub const fn counters(&self) -> Counters {
        self.result.counters
    }

    /// Edit script.
    #[must_use]
    pub fn opcodes(&self) -> &[Opcode] {
        &self.result.opcodes
    }

    /// Returns true if both texts are identical.
    #[must_use]
    pub const fn is_identical(&self) -> bool {
        self.result.counters.is_empty()
    }

    /// Rebuilds the old text from the segments.
    ///
    /// Unchanged and removed text is kept, added text is skipped, and a
    /// modified segment contributes the text it replaced.
    #[must_use]
    pub fn reconstruct_old(&self) -> String {
        self.segments
            .iter()
            .filter_map(|segment| match segment.category {
                Category::Unchanged | Category::Removed => Some(segment.text.as_str()),
                Category::Modified => segment.replaced.as_deref(),
                Category::Added => None,
            })
            .collect()
    }

    /// Rebuilds the new text from the segments.
    #[must_use]
    pub fn reconstruct_new(&self) -> String {
        self.segments
            .iter()
            .filter(|segment| segment.category != Category::Removed)
            .map(|segment| segment.text.as_str())
            .collect()
    }
}

/// Configurable text comparison.
///
/// Holds no state between calls; one instance can serve any number of
/// comparisons, from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDiff {
    options: DiffOptions,
}

impl TextDiff {
    /// Creates a comparison with the given options.
    #[must_use]
    pub const fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    #[must_use]
    pub const fn options(&self) -> DiffOptions {
        self.options
    }

    /// Compares `old` against `new`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            algorithm = %self.options.algorithm,
            granularity = %self.options.granularity,
            old_bytes = old.len(),
            new_bytes = new.len(),
        )
    )]
    #[must_use]
    pub fn compare(&self, old: &str, new: &str) -> Comparison {
        let old_tokens = tokenize(old, self.options.granularity);
        let new_tokens = tokenize(new, self.options.granularity);
        let comparison = self.compare_sequences(&old_tokens, &new_tokens);

        let counters = comparison.counters();
        debug!(
            opcodes = comparison.result.opcodes.len(),
            additions = counters.additions,
            deletions = counters.deletions,
            modifications = counters.modifications,
            "Comparison complete"
        );
        comparison
    }

    /// Compares two already tokenized sequences.
    #[must_use]
    pub fn compare_sequences<T: Symbol>(&self, old: &[T], new: &[T]) -> Comparison {
        let opcodes = self.options.algorithm.opcodes(old, new);
        let (segments, counters) = render(old, new, &opcodes);
        Comparison {
            result: DiffResult { opcodes, counters },
            segments,
        }
    }
}
