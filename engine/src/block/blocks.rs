//! Matching blocks and their conversion into opcodes.

use crate::opcode::{Opcode, Tag};
use serde::{Deserialize, Serialize};

/// A run of `size` equal symbols: `a[a..a + size] == b[b..b + size]`.
///
/// Blocks order by position in `a`, then in `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchBlock {
    /// Start of the run in the old sequence.
    pub a: usize,
    /// Start of the run in the new sequence.
    pub b: usize,
    /// Length of the run.
    pub size: usize,
}

impl MatchBlock {
    /// Creates a block.
    #[must_use]
    pub const fn new(a: usize, b: usize, size: usize) -> Self {
        Self { a, b, size }
    }

    /// End of the run in the old sequence (exclusive).
    #[must_use]
    pub const fn a_end(&self) -> usize {
        self.a + self.size
    }

    /// End of the run in the new sequence (exclusive).
    #[must_use]
    pub const fn b_end(&self) -> usize {
        self.b + self.size
    }
}

/// Converts sorted, non-overlapping matching blocks ending with the
/// zero-length sentinel `(a.len(), b.len(), 0)` into an edit script.
///
/// The gap in front of each block becomes a replace when it is nonempty on
/// both sides, a delete when only the old side is nonempty and an insert
/// when only the new side is; the block itself becomes an equal opcode.
#[must_use]
pub fn opcodes_from_blocks(blocks: &[MatchBlock]) -> Vec<Opcode> {
    let mut opcodes = Vec::with_capacity(blocks.len() * 2);
    let (mut i, mut j) = (0, 0);

    for block in blocks {
        let tag = match (i < block.a, j < block.b) {
            (true, true) => Some(Tag::Replace),
            (true, false) => Some(Tag::Delete),
            (false, true) => Some(Tag::Insert),
            (false, false) => None,
        };
        if let Some(tag) = tag {
            opcodes.push(Opcode::new(tag, i, block.a, j, block.b));
        }

        i = block.a_end();
        j = block.b_end();
        if block.size > 0 {
            opcodes.push(Opcode::new(Tag::Equal, block.a, i, block.b, j));
        }
    }

    opcodes
}

/// Similarity of two sequences given their matching blocks, in `[0, 1]`.
///
/// Computed as `2 * M / (old_len + new_len)` where `M` is the number of
/// matched symbols. Two empty sequences are identical and score 1.0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn similarity_ratio(blocks: &[MatchBlock], old_len: usize, new_len: usize) -> f64 {
    let total = old_len + new_len;
    if total == 0 {
        return 1.0;
    }
    let matched: usize = blocks.iter().map(|block| block.size).sum();
    (2 * matched) as f64 / total as f64
}
