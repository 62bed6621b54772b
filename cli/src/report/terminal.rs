//! Terminal report: summary table plus inline, colour-coded text.
//!
//! Without colours, changes are marked inline: `{+added+}`, `[-removed-]`
//! and `{~modified~}`. Document text that itself contains one of these
//! delimiters, or a backslash, is escaped with a backslash so the markup
//! stays unambiguous.

use super::ReportOptions;
use super::summary::summary_table;
use colored::Colorize;
use docdiff_engine::{Category, Comparison, Segment};

/// Two-character delimiters of the plain markup.
const DELIMITERS: [&str; 6] = ["{+", "+}", "[-", "-]", "{~", "~}"];

/// Escapes backslashes and markup delimiters in plain output.
fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        let rest = &text[i..];
        if c == '\\' || DELIMITERS.iter().any(|d| rest.starts_with(d)) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Renders one segment for the terminal.
fn styled(segment: &Segment, options: ReportOptions) -> String {
    let text = segment.text.as_str();
    let replaced = segment
        .replaced
        .as_deref()
        .filter(|_| options.show_replaced);

    if options.color {
        match segment.category {
            Category::Unchanged => text.to_string(),
            Category::Added => text.black().on_green().to_string(),
            Category::Removed => text.black().on_red().to_string(),
            Category::Modified => match replaced {
                Some(old) => format!(
                    "{}{}",
                    old.black().on_red().strikethrough(),
                    text.black().on_yellow()
                ),
                None => text.black().on_yellow().to_string(),
            },
        }
    } else {
        let text = escape_markup(text);
        let replaced = replaced.map(escape_markup);
        match segment.category {
            Category::Unchanged => text,
            Category::Added => format!("{{+{text}+}}"),
            Category::Removed => format!("[-{text}-]"),
            Category::Modified => match replaced {
                Some(old) => format!("[-{old}-]{{~{text}~}}"),
                None => format!("{{~{text}~}}"),
            },
        }
    }
}

/// Renders the full terminal report.
#[must_use]
pub fn render_terminal(comparison: &Comparison, options: ReportOptions) -> String {
    let mut out = String::from("Summary of Changes\n");
    out.push_str(&summary_table(comparison.counters()));
    out.push_str("\nDetailed Comparison\n");
    for segment in &comparison.segments {
        out.push_str(&styled(segment, options));
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }

    out.push_str("\nLegend: ");
    if options.color {
        out.push_str(&format!(
            "{} {} {}\n",
            "Added".black().on_green(),
            "Removed".black().on_red(),
            "Modified".black().on_yellow()
        ));
    } else {
        out.push_str("{+added+} [-removed-] {~modified~}\n");
    }
    out
}
