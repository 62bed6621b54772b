//! Classification of opcodes into displayable segments.
//!
//! Each opcode yields exactly one [`Segment`], in opcode order. A replace
//! is shown as its new text only; the old text it replaced travels with the
//! segment in [`Segment::replaced`] so a presentation layer can offer a
//! before/after view.

use crate::opcode::{Opcode, Tag};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::ops::Range;

/// A symbol that can be written back as text.
pub trait Symbol: Eq + Hash {
    /// Appends the symbol's text to `out`.
    fn write_to(&self, out: &mut String);
}

impl Symbol for char {
    fn write_to(&self, out: &mut String) {
        out.push(*self);
    }
}

impl Symbol for &str {
    fn write_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Symbol for String {
    fn write_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

/// Display category of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Text present in both versions.
    Unchanged,
    /// Text present only in the new version.
    Added,
    /// Text present only in the old version.
    Removed,
    /// New text that replaced different old text.
    Modified,
}

impl Category {
    /// Lowercase name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Modified => "modified",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged span of text derived from one opcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Display category.
    pub category: Category,
    /// Text to display.
    pub text: String,
    /// Old text replaced by `text`; only set for [`Category::Modified`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaced: Option<String>,
}

impl Segment {
    /// Creates a segment without replaced text.
    #[must_use]
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
            replaced: None,
        }
    }

    /// Creates a modified segment showing `text` in place of `replaced`.
    #[must_use]
    pub fn modified(text: impl Into<String>, replaced: impl Into<String>) -> Self {
        Self {
            category: Category::Modified,
            text: text.into(),
            replaced: Some(replaced.into()),
        }
    }
}

/// Per-opcode tally of changes.
///
/// Each counter counts opcodes, never symbols: a replace spanning a whole
/// paragraph counts as one modification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Counters {
    /// Number of insert opcodes.
    pub additions: usize,
    /// Number of delete opcodes.
    pub deletions: usize,
    /// Number of replace opcodes.
    pub modifications: usize,
}

impl Counters {
    /// Creates counters from explicit values.
    #[must_use]
    pub const fn new(additions: usize, deletions: usize, modifications: usize) -> Self {
        Self {
            additions,
            deletions,
            modifications,
        }
    }

    /// Tallies the changes of an edit script.
    #[must_use]
    pub fn from_opcodes(opcodes: &[Opcode]) -> Self {
        opcodes.iter().fold(Self::default(), |mut counters, op| {
            counters.record(op.tag);
            counters
        })
    }

    fn record(&mut self, tag: Tag) {
        match tag {
            Tag::Equal => {}
            Tag::Insert => self.additions += 1,
            Tag::Delete => self.deletions += 1,
            Tag::Replace => self.modifications += 1,
        }
    }

    /// Total number of changes.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.additions + self.deletions + self.modifications
    }

    /// Returns true if no change was recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

fn text_of<T: Symbol>(symbols: &[T], range: Range<usize>) -> String {
    let mut out = String::new();
    for symbol in symbols.get(range).unwrap_or_default() {
        symbol.write_to(&mut out);
    }
    out
}

/// Maps an edit script to segments and counts its changes.
///
/// `equal` → unchanged old text, `delete` → removed old text, `insert` →
/// added new text, `replace` → modified new text carrying the old text.
/// Ranges outside the sequences render as empty text.
#[must_use]
pub fn render<T: Symbol>(old: &[T], new: &[T], opcodes: &[Opcode]) -> (Vec<Segment>, Counters) {
    let mut segments = Vec::with_capacity(opcodes.len());
    let mut counters = Counters::default();

    for op in opcodes {
        let segment = match op.tag {
            Tag::Equal => Segment::new(Category::Unchanged, text_of(old, op.old_range())),
            Tag::Delete => Segment::new(Category::Removed, text_of(old, op.old_range())),
            Tag::Insert => Segment::new(Category::Added, text_of(new, op.new_range())),
            Tag::Replace => Segment::modified(
                text_of(new, op.new_range()),
                text_of(old, op.old_range()),
            ),
        };
        counters.record(op.tag);
        segments.push(segment);
    }

    (segments, counters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_render_each_tag() {
        let (a, b) = (chars("abcdef"), chars("abXYef!"));
        let ops = [
            Opcode::new(Tag::Equal, 0, 2, 0, 2),
            Opcode::new(Tag::Replace, 2, 4, 2, 4),
            Opcode::new(Tag::Equal, 4, 6, 4, 6),
            Opcode::new(Tag::Insert, 6, 6, 6, 7),
        ];
        let (segments, counters) = render(&a, &b, &ops);
        assert_eq!(
            segments,
            vec![
                Segment::new(Category::Unchanged, "ab"),
                Segment::modified("XY", "cd"),
                Segment::new(Category::Unchanged, "ef"),
                Segment::new(Category::Added, "!"),
            ]
        );
        assert_eq!(counters, Counters::new(1, 0, 1));
    }

    #[test]
    fn test_delete_renders_old_text() {
        let (a, b) = (chars("abc"), chars("a"));
        let ops = [
            Opcode::new(Tag::Equal, 0, 1, 0, 1),
            Opcode::new(Tag::Delete, 1, 3, 1, 1),
        ];
        let (segments, counters) = render(&a, &b, &ops);
        assert_eq!(segments[1], Segment::new(Category::Removed, "bc"));
        assert_eq!(counters, Counters::new(0, 1, 0));
    }

    #[test]
    fn test_counts_opcodes_not_symbols() {
        let ops = [
            Opcode::new(Tag::Replace, 0, 100, 0, 3),
            Opcode::new(Tag::Insert, 100, 100, 3, 50),
        ];
        let counters = Counters::from_opcodes(&ops);
        assert_eq!(counters, Counters::new(1, 0, 1));
        assert_eq!(counters.total(), 2);
    }

    #[test]
    fn test_out_of_range_opcode_renders_empty() {
        let (a, b) = (chars("ab"), chars("ab"));
        let (segments, _) = render(&a, &b, &[Opcode::new(Tag::Delete, 5, 9, 2, 2)]);
        assert_eq!(segments, vec![Segment::new(Category::Removed, "")]);
    }

    #[test]
    fn test_render_token_symbols() {
        let a = ["the", " ", "quick"];
        let b = ["the", " ", "slow"];
        let ops = [
            Opcode::new(Tag::Equal, 0, 2, 0, 2),
            Opcode::new(Tag::Replace, 2, 3, 2, 3),
        ];
        let (segments, _) = render(&a, &b, &ops);
        assert_eq!(segments[0].text, "the ");
        assert_eq!(segments[1], Segment::modified("slow", "quick"));
    }

    #[test]
    fn test_segment_json_omits_missing_replaced() {
        let json = serde_json::to_string(&Segment::new(Category::Added, "x")).unwrap();
        assert_eq!(json, r#"{"category":"added","text":"x"}"#);
        let json = serde_json::to_string(&Segment::modified("dog", "cat")).unwrap();
        assert_eq!(json, r#"{"category":"modified","text":"dog","replaced":"cat"}"#);
    }
}
