//! Summary table of change counts.

use docdiff_engine::Counters;

/// Rows of the summary table, in display order.
#[must_use]
pub fn summary_rows(counters: Counters) -> [(&'static str, usize); 3] {
    [
        ("Additions", counters.additions),
        ("Deletions", counters.deletions),
        ("Modifications", counters.modifications),
    ]
}

/// Renders the summary as a plain-text table.
#[must_use]
pub fn summary_table(counters: Counters) -> String {
    let rows = summary_rows(counters);
    let name_width = rows
        .iter()
        .map(|(name, _)| name.len())
        .chain(std::iter::once("Type".len()))
        .max()
        .unwrap_or(0);
    let count_width = rows
        .iter()
        .map(|(_, count)| count.to_string().len())
        .chain(std::iter::once("Count".len()))
        .max()
        .unwrap_or(0);
    let border = format!("+-{}-+-{}-+\n", "-".repeat(name_width), "-".repeat(count_width));

    let mut out = border.clone();
    out.push_str(&format!(
        "| {:<name_width$} | {:>count_width$} |\n",
        "Type", "Count"
    ));
    out.push_str(&border);
    for (name, count) in rows {
        out.push_str(&format!("| {name:<name_width$} | {count:>count_width$} |\n"));
    }
    out.push_str(&border);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_table_layout() {
        let table = summary_table(Counters::new(2, 0, 1));
        let expected = "\
+---------------+-------+
| Type          | Count |
+---------------+-------+
| Additions     |     2 |
| Deletions     |     0 |
| Modifications |     1 |
+---------------+-------+
";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_wide_counts_widen_column() {
        let table = summary_table(Counters::new(1_234_567, 0, 0));
        assert!(table.contains("| Additions     | 1234567 |"));
    }
}
