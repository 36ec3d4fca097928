//! Plain-text rendering of results for the terminal

use crate::analysis::FrequencyComparison;
use crate::extract::{StructuredTable, ValueFrequency};

/// Maximum number of characters shown per table cell
const CELL_WIDTH: usize = 24;

/// Renders a table with aligned columns, index first
pub fn format_table(table: &StructuredTable) -> String {
    let mut lines: Vec<Vec<String>> = Vec::with_capacity(table.len() + 1);

    let header = std::iter::once(table.index_name().unwrap_or(""))
        .chain(table.columns().iter().map(String::as_str))
        .map(clip)
        .collect();
    lines.push(header);

    for (key, row) in table.index().iter().zip(table.rows()) {
        lines.push(
            std::iter::once(key.as_str())
                .chain(row.iter().map(String::as_str))
                .map(clip)
                .collect(),
        );
    }

    render_columns(&lines)
}

/// Renders value counts as `value  count` lines
pub fn format_value_counts(values: &ValueFrequency) -> String {
    if values.is_empty() {
        return "No values to count.\n".to_string();
    }

    let lines: Vec<Vec<String>> = values
        .entries()
        .iter()
        .map(|(value, count)| {
            let label = if value.is_empty() { "(empty)" } else { value };
            vec![clip(label), count.to_string()]
        })
        .collect();

    render_columns(&lines)
}

/// Renders the rows of a relative-frequency comparison
pub fn format_comparison(rows: &[FrequencyComparison]) -> String {
    if rows.is_empty() {
        return "No data to compare.\n".to_string();
    }

    let mut lines = vec![vec![
        "word".to_string(),
        "wiki".to_string(),
        "language".to_string(),
        "wiki count".to_string(),
        "language freq".to_string(),
    ]];

    for row in rows {
        lines.push(vec![
            clip(&row.word),
            format!("{:.1}%", row.wiki_norm * 100.0),
            format!("{:.1}%", row.lang_norm * 100.0),
            row.wiki_raw.to_string(),
            format!("{:.6}", row.lang_freq),
        ]);
    }

    render_columns(&lines)
}

fn clip(text: &str) -> String {
    if text.chars().count() <= CELL_WIDTH {
        text.to_string()
    } else {
        let mut clipped: String = text.chars().take(CELL_WIDTH - 3).collect();
        clipped.push_str("...");
        clipped
    }
}

fn render_columns(lines: &[Vec<String>]) -> String {
    let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            lines
                .iter()
                .filter_map(|line| line.get(i))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in lines {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}
