//! Standalone HTML report with highlighted spans and a colour legend.

use super::ReportOptions;
use super::summary::summary_rows;
use crate::extract::Document;
use docdiff_engine::{Category, Comparison};

/// Background colour for added text.
pub const ADDED_COLOR: &str = "#c8e6c9";
/// Background colour for removed text.
pub const REMOVED_COLOR: &str = "#ffcdd2";
/// Background colour for modified text.
pub const MODIFIED_COLOR: &str = "#fff9c4";

/// Escapes text for use in HTML element content and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn span(color: &str, class: &str, text: &str) -> String {
    format!(
        "<span class=\"{class}\" style=\"background-color: {color}\">{}</span>",
        escape_html(text)
    )
}

/// Renders the highlighted body of the comparison.
#[must_use]
pub fn render_segments(comparison: &Comparison, options: ReportOptions) -> String {
    let mut out = String::new();
    for segment in &comparison.segments {
        match segment.category {
            Category::Unchanged => out.push_str(&escape_html(&segment.text)),
            Category::Added => out.push_str(&span(ADDED_COLOR, "added", &segment.text)),
            Category::Removed => out.push_str(&span(REMOVED_COLOR, "removed", &segment.text)),
            Category::Modified => {
                if let Some(old) = segment.replaced.as_deref().filter(|_| options.show_replaced) {
                    out.push_str(&format!(
                        "<del class=\"replaced\" style=\"background-color: {REMOVED_COLOR}\">{}</del>",
                        escape_html(old)
                    ));
                }
                out.push_str(&span(MODIFIED_COLOR, "modified", &segment.text));
            }
        }
    }
    out
}

/// Renders the full HTML page.
#[must_use]
pub fn render_html(
    old: &Document,
    new: &Document,
    comparison: &Comparison,
    options: ReportOptions,
) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Document Difference Report</title>\n\
         </head>\n\
         <body>\n\
         <h1>Document Difference Report</h1>\n",
    );
    out.push_str(&format!(
        "<p>Comparing <code>{}</code> with <code>{}</code></p>\n",
        escape_html(&old.path.display().to_string()),
        escape_html(&new.path.display().to_string())
    ));

    out.push_str("<h2>Summary of Changes</h2>\n<table class=\"summary\">\n");
    out.push_str("<tr><th>Type</th><th>Count</th></tr>\n");
    for (name, count) in summary_rows(comparison.counters()) {
        out.push_str(&format!("<tr><td>{name}</td><td>{count}</td></tr>\n"));
    }
    out.push_str("</table>\n");

    out.push_str("<h2>Detailed Comparison</h2>\n");
    out.push_str(&format!(
        "<div class=\"comparison\" style=\"white-space: pre-wrap\">{}</div>\n",
        render_segments(comparison, options)
    ));

    out.push_str("<h3>Color Legend</h3>\n<ul class=\"legend\">\n");
    for (color, name, meaning) in [
        (ADDED_COLOR, "Green", "Added content"),
        (REMOVED_COLOR, "Red", "Removed content"),
        (MODIFIED_COLOR, "Yellow", "Modified content"),
    ] {
        out.push_str(&format!(
            "<li><span style=\"background-color: {color}\">{name}</span>: {meaning}</li>\n"
        ));
    }
    out.push_str("</ul>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdiff_engine::diff;

    const OPTIONS: ReportOptions = ReportOptions {
        color: false,
        show_replaced: false,
    };

    fn document(path: &str, text: &str) -> Document {
        Document::from_bytes(path, text.as_bytes()).unwrap()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_segments_use_palette() {
        let body = render_segments(&diff("Hello world", "Hello, world!"), OPTIONS);
        assert_eq!(
            body,
            "Hello<span class=\"added\" style=\"background-color: #c8e6c9\">,</span> world\
             <span class=\"added\" style=\"background-color: #c8e6c9\">!</span>"
        );
    }

    #[test]
    fn test_changed_text_is_escaped() {
        let body = render_segments(&diff("x < y", "x > y"), OPTIONS);
        assert!(body.contains("\">&gt;</span>"));
        assert!(!body.contains("\">></span>"));
    }

    #[test]
    fn test_show_replaced_adds_del() {
        let options = ReportOptions {
            show_replaced: true,
            ..OPTIONS
        };
        let body = render_segments(&diff("The cat sat.", "The dog sat."), options);
        assert!(body.contains("<del class=\"replaced\" style=\"background-color: #ffcdd2\">cat</del>"));
        assert!(body.contains("#fff9c4\">dog</span>"));
    }

    #[test]
    fn test_page_has_summary_and_legend() {
        let (old, new) = (document("old.txt", "The cat sat."), document("new.txt", "The dog sat."));
        let comparison = diff(&old.text, &new.text);
        let page = render_html(&old, &new, &comparison, OPTIONS);
        assert!(page.contains("<tr><td>Modifications</td><td>1</td></tr>"));
        assert!(page.contains("<tr><td>Additions</td><td>0</td></tr>"));
        assert!(page.contains("Green</span>: Added content"));
        assert!(page.contains("<code>old.txt</code>"));
        assert!(page.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n"));
        assert!(page.ends_with("</ul>\n</body>\n</html>\n"));
    }
}
