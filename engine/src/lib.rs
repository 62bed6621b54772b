//! Docdiff Engine - text difference engine.
//!
//! Compares two bodies of extracted document text and describes their
//! differences as a categorized, displayable sequence of segments:
//!
//! 1. **Tokenize** the texts at the requested [`Granularity`].
//! 2. **Align** the token sequences into an edit script of [`Opcode`]s
//!    (greedy block matching by default, Myers on request).
//! 3. **Render** the script into [`Segment`]s tagged unchanged, added,
//!    removed or modified, and tally the changes in [`Counters`].
//!
//! The engine performs no I/O and keeps no state between calls; every
//! operation is a total function of its inputs.
//!
//! # Example
//!
//! ```
//! use docdiff_engine::{Category, Counters, diff};
//!
//! let comparison = diff("The cat sat.", "The dog sat.");
//! assert_eq!(comparison.counters(), Counters::new(0, 0, 1));
//!
//! let modified = &comparison.segments[1];
//! assert_eq!(modified.category, Category::Modified);
//! assert_eq!(modified.text, "dog");
//! assert_eq!(modified.replaced.as_deref(), Some("cat"));
//! ```

/// Diff algorithm trait and runtime selection.
pub mod algorithm;
/// Greedy block-matching aligner.
pub mod block;
/// Combined entry points.
pub mod compare;
/// Option parsing errors.
pub mod error;
/// Myers shortest-edit-script aligner.
pub mod myers;
/// Edit script primitives.
pub mod opcode;
/// Segment classification and change counters.
pub mod render;
/// Text tokenization.
pub mod tokenize;

pub use algorithm::{Algorithm, DiffAlgorithm};
pub use block::{BlockMatcher, MatchBlock, matching_blocks, similarity_ratio};
pub use compare::{Comparison, DiffOptions, DiffResult, TextDiff, align, diff};
pub use error::ParseOptionError;
pub use myers::MyersDiff;
pub use opcode::{Opcode, Tag, is_contiguous};
pub use render::{Category, Counters, Segment, Symbol, render};
pub use tokenize::{Granularity, tokenize};
