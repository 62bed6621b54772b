//! Edit script primitives.
//!
//! An [`Opcode`] describes one contiguous edit between an old sequence `a`
//! and a new sequence `b`. A full edit script covers `0..a.len()` and
//! `0..b.len()` exactly once each, in order: concatenating every
//! `a_start..a_end` rebuilds `a`, and every `b_start..b_end` rebuilds `b`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Kind of edit an [`Opcode`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Symbols that are unchanged between both sequences.
    Equal,
    /// Symbols present only in the old sequence.
    Delete,
    /// Symbols present only in the new sequence.
    Insert,
    /// Symbols of the old sequence replaced by different symbols of the new one.
    Replace,
}

impl Tag {
    /// Lowercase name of the tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Delete => "delete",
            Self::Insert => "insert",
            Self::Replace => "replace",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single edit operation over half-open ranges of both sequences.
///
/// For [`Tag::Insert`] the old range is empty (`a_start == a_end`) and marks
/// the insertion point; for [`Tag::Delete`] the new range is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Opcode {
    /// Kind of edit.
    pub tag: Tag,
    /// Start index in the old sequence (inclusive).
    pub a_start: usize,
    /// End index in the old sequence (exclusive).
    pub a_end: usize,
    /// Start index in the new sequence (inclusive).
    pub b_start: usize,
    /// End index in the new sequence (exclusive).
    pub b_end: usize,
}

impl Opcode {
    /// Creates an opcode from a tag and both ranges.
    #[must_use]
    pub const fn new(tag: Tag, a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> Self {
        Self {
            tag,
            a_start,
            a_end,
            b_start,
            b_end,
        }
    }

    /// Range covered in the old sequence.
    #[must_use]
    pub const fn old_range(&self) -> Range<usize> {
        self.a_start..self.a_end
    }

    /// Range covered in the new sequence.
    #[must_use]
    pub const fn new_range(&self) -> Range<usize> {
        self.b_start..self.b_end
    }

    /// Returns true if this operation represents a change (not equal).
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self.tag, Tag::Equal)
    }

    /// Number of old symbols covered.
    #[must_use]
    pub const fn old_len(&self) -> usize {
        self.a_end - self.a_start
    }

    /// Number of new symbols covered.
    #[must_use]
    pub const fn new_len(&self) -> usize {
        self.b_end - self.b_start
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} a[{}:{}] b[{}:{}]",
            self.tag, self.a_start, self.a_end, self.b_start, self.b_end
        )
    }
}

/// Checks that `opcodes` form a contiguous edit script over sequences of
/// length `old_len` and `new_len`.
///
/// Every opcode must start where the previous one ended on both sides, the
/// ranges must agree with the tag, and the script must end at the sequence
/// lengths.
#[must_use]
pub fn is_contiguous(opcodes: &[Opcode], old_len: usize, new_len: usize) -> bool {
    let (mut i, mut j) = (0, 0);
    for op in opcodes {
        if op.a_start != i || op.b_start != j || op.a_end < op.a_start || op.b_end < op.b_start {
            return false;
        }
        let shape_ok = match op.tag {
            Tag::Equal => op.old_len() == op.new_len() && op.old_len() > 0,
            Tag::Delete => op.old_len() > 0 && op.new_len() == 0,
            Tag::Insert => op.old_len() == 0 && op.new_len() > 0,
            Tag::Replace => op.old_len() > 0 && op.new_len() > 0,
        };
        if !shape_ok {
            return false;
        }
        i = op.a_end;
        j = op.b_end;
    }
    i == old_len && j == new_len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_is_change() {
        assert!(!Opcode::new(Tag::Equal, 0, 1, 0, 1).is_change());
        assert!(Opcode::new(Tag::Insert, 0, 0, 0, 1).is_change());
        assert!(Opcode::new(Tag::Delete, 0, 1, 0, 0).is_change());
        assert!(Opcode::new(Tag::Replace, 0, 1, 0, 1).is_change());
    }

    #[test]
    fn test_opcode_ranges() {
        let equal = Opcode::new(Tag::Equal, 0, 5, 2, 7);
        assert_eq!(equal.old_range(), 0..5);
        assert_eq!(equal.new_range(), 2..7);

        let insert = Opcode::new(Tag::Insert, 3, 3, 1, 4);
        assert!(insert.old_range().is_empty());
        assert_eq!(insert.new_len(), 3);
    }

    #[test]
    fn test_opcode_len() {
        let replace = Opcode::new(Tag::Replace, 0, 2, 0, 3);
        assert_eq!(replace.old_len(), 2);
        assert_eq!(replace.new_len(), 3);

        let delete = Opcode::new(Tag::Delete, 4, 7, 2, 2);
        assert_eq!(delete.old_len(), 3);
        assert_eq!(delete.new_len(), 0);
    }

    #[test]
    fn test_display() {
        let op = Opcode::new(Tag::Replace, 4, 7, 4, 7);
        assert_eq!(op.to_string(), "replace a[4:7] b[4:7]");
    }

    #[test]
    fn test_is_contiguous() {
        let ops = [
            Opcode::new(Tag::Equal, 0, 4, 0, 4),
            Opcode::new(Tag::Replace, 4, 7, 4, 7),
            Opcode::new(Tag::Equal, 7, 12, 7, 12),
        ];
        assert!(is_contiguous(&ops, 12, 12));
        assert!(!is_contiguous(&ops, 12, 13));
        assert!(is_contiguous(&[], 0, 0));
    }

    #[test]
    fn test_is_contiguous_rejects_gaps_and_bad_shapes() {
        let gap = [
            Opcode::new(Tag::Equal, 0, 2, 0, 2),
            Opcode::new(Tag::Equal, 3, 4, 3, 4),
        ];
        assert!(!is_contiguous(&gap, 4, 4));

        let insert_with_old_side = [Opcode::new(Tag::Insert, 0, 1, 0, 1)];
        assert!(!is_contiguous(&insert_with_old_side, 1, 1));
    }

    #[test]
    fn test_tag_serializes_lowercase() {
        let json = serde_json::to_string(&Tag::Replace).unwrap();
        assert_eq!(json, "\"replace\"");
    }
}
