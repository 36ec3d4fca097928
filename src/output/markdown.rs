//! Markdown report of a relative word-frequency comparison
//!
//! The report holds the comparison table and a text bar chart with one bar
//! per source for every word.

use crate::analysis::{AnalysisMode, FrequencyComparison};
use crate::output::OutputResult;
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Width of a full-length bar in characters
const BAR_WIDTH: usize = 40;

/// Writes a comparison report to `output_path`
///
/// # Arguments
///
/// * `rows` - The compared words
/// * `mode` - Which word list drove the comparison
/// * `output_path` - Path where the markdown file should be written
pub fn generate_markdown_report(
    rows: &[FrequencyComparison],
    mode: AnalysisMode,
    output_path: &Path,
) -> OutputResult<()> {
    let markdown = format_markdown_report(rows, mode, Utc::now());

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a comparison report as markdown
pub fn format_markdown_report(
    rows: &[FrequencyComparison],
    mode: AnalysisMode,
    generated_at: DateTime<Utc>,
) -> String {
    let mut md = String::new();

    md.push_str("# Relative Word Frequency Comparison\n\n");
    md.push_str(&format!("- **Mode**: {}\n", mode));
    md.push_str(&format!("- **Words**: {}\n", rows.len()));
    md.push_str(&format!(
        "- **Generated**: {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    if rows.is_empty() {
        md.push_str("No data to plot.\n");
        return md;
    }

    md.push_str("## Frequencies\n\n");
    md.push_str("| Word | Wiki Article | General Language | Wiki Count | Language Frequency |\n");
    md.push_str("|------|--------------|------------------|------------|--------------------|\n");
    for row in rows {
        md.push_str(&format!(
            "| {} | {:.1}% | {:.1}% | {} | {:.6} |\n",
            row.word,
            row.wiki_norm * 100.0,
            row.lang_norm * 100.0,
            row.wiki_raw,
            row.lang_freq
        ));
    }
    md.push('\n');

    md.push_str("## Chart\n\n");
    md.push_str("```text\n");
    let label_width = rows.iter().map(|r| r.word.chars().count()).max().unwrap_or(0);
    for row in rows {
        md.push_str(&format!(
            "{:<width$}  wiki {} {:.1}%\n",
            row.word,
            bar(row.wiki_norm),
            row.wiki_norm * 100.0,
            width = label_width
        ));
        md.push_str(&format!(
            "{:<width$}  lang {} {:.1}%\n",
            "",
            bar(row.lang_norm),
            row.lang_norm * 100.0,
            width = label_width
        ));
    }
    md.push_str("```\n");

    md
}

fn bar(value: f64) -> String {
    let filled = (value.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
