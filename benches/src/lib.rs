//! Shared input generators for the docdiff benchmarks.

const WORDS: [&str; 16] = [
    "contract", "party", "shall", "the", "of", "notice", "within", "days", "payment", "terms",
    "agreement", "and", "to", "be", "delivered", "section",
];

/// Builds prose of roughly `chars` characters, deterministic for a given size.
#[must_use]
pub fn prose(chars: usize) -> String {
    let mut out = String::with_capacity(chars + 16);
    let mut state: u32 = 0x2545_f491;
    let mut words = 0usize;
    while out.len() < chars {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        out.push_str(WORDS[(state >> 16) as usize % WORDS.len()]);
        words += 1;
        out.push(if words % 12 == 0 { '\n' } else { ' ' });
    }
    out
}

/// Returns a copy of `text` with every `stride`-th word rewritten.
#[must_use]
pub fn revise(text: &str, stride: usize) -> String {
    let stride = stride.max(1);
    let mut out = String::with_capacity(text.len());
    for (i, word) in text.split_inclusive([' ', '\n']).enumerate() {
        if i % stride == 0 {
            out.push_str("amended");
            out.push_str(&word[word.trim_end().len()..]);
        } else {
            out.push_str(word);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prose_is_deterministic() {
        assert_eq!(prose(500), prose(500));
        assert!(prose(500).len() >= 500);
    }

    #[test]
    fn test_revise_changes_text() {
        let text = prose(200);
        let revised = revise(&text, 5);
        assert_ne!(text, revised);
        assert!(revised.starts_with("amended"));
    }
}
