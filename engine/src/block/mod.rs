//! Greedy block-matching aligner.
//!
//! The aligner repeatedly extracts the longest contiguous run shared by the
//! two sequences, then recurses on the unmatched regions to the left and to
//! the right of it. The resulting matching blocks are turned into opcodes:
//! gaps become inserts, deletes or replaces and blocks become equal runs.
//!
//! This is a heuristic. It tends to produce readable diffs because long
//! shared runs anchor the alignment, but it is **not** a minimum edit
//! distance solver: a single greedy choice can force more edits elsewhere.
//! Use [`crate::myers::MyersDiff`] when a shortest edit script is required.
//!
//! No junk heuristic is applied: every symbol takes part in matching, and
//! frequent symbols are never discarded.

pub mod algorithm;
pub mod blocks;

pub use algorithm::{BlockMatcher, matching_blocks};
pub use blocks::{MatchBlock, opcodes_from_blocks, similarity_ratio};
