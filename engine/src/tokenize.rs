//! Splitting text into the symbol sequence the aligners consume.
//!
//! Tokens are borrowed slices of the input, and concatenating them in order
//! rebuilds the input exactly. No token is ever empty.

use crate::error::ParseOptionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One token per character.
    #[default]
    Char,
    /// Maximal runs of whitespace and of non-whitespace.
    Word,
    /// One token per line, terminator included.
    Line,
}

impl Granularity {
    /// Lowercase name of the granularity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Word => "word",
            Self::Line => "line",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "char" | "chars" | "character" => Ok(Self::Char),
            "word" | "words" => Ok(Self::Word),
            "line" | "lines" => Ok(Self::Line),
            _ => Err(ParseOptionError::UnknownGranularity(s.to_string())),
        }
    }
}

/// Splits `text` into tokens of the given granularity.
#[must_use]
pub fn tokenize(text: &str, granularity: Granularity) -> Vec<&str> {
    match granularity {
        Granularity::Char => split_chars(text),
        Granularity::Word => split_words(text),
        Granularity::Line => text.split_inclusive('\n').collect(),
    }
}

fn split_chars(text: &str) -> Vec<&str> {
    text.char_indices()
        .map(|(start, c)| &text[start..start + c.len_utf8()])
        .collect()
}

fn split_words(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (idx, c) in text.char_indices() {
        let space = c.is_whitespace();
        if in_space.is_some_and(|prev| prev != space) {
            tokens.push(&text[start..idx]);
            start = idx;
        }
        in_space = Some(space);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }

    tokens
}
