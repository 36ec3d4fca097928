//! HTML table extraction
//!
//! Turns one `<table>` element of the content region into a
//! [`StructuredTable`]:
//!
//! - rows are the `<tr>` elements owned by the table (rows of nested tables
//!   belong to the nested table)
//! - cells are the `<th>`/`<td>` children of a row, with whitespace collapsed
//! - `colspan` and `rowspan` are expanded by repeating the cell value
//! - short rows are padded with empty cells
//! - column 0 becomes the row index; optionally row 0 becomes the header

use crate::extract::ExtractError;
use crate::output::{OutputResult, TableExporter};
use crate::page::{Phrase, Region};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Largest `colspan` browsers honor
pub const MAX_COLSPAN: usize = 1000;

/// Largest `rowspan` browsers honor
pub const MAX_ROWSPAN: usize = 65534;

/// Row/column/index model of one HTML table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredTable {
    index_name: Option<String>,
    columns: Vec<String>,
    index: Vec<String>,
    rows: Vec<Vec<String>>,
    has_header: bool,
}

impl StructuredTable {
    /// Builds a table from a grid of cell texts
    ///
    /// Rows shorter than the widest row are padded with empty cells. Row keys
    /// may repeat.
    pub fn from_grid(
        mut grid: Vec<Vec<String>>,
        first_row_is_header: bool,
    ) -> Result<Self, ExtractError> {
        if grid.is_empty() {
            return Err(ExtractError::MalformedTable(
                "table has no rows".to_string(),
            ));
        }

        let width = grid.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(ExtractError::MalformedTable(
                "table has no cells".to_string(),
            ));
        }

        for row in &mut grid {
            row.resize(width, String::new());
        }

        let (index_name, columns) = if first_row_is_header {
            let mut header = grid.remove(0).into_iter();
            let index_name = header.next();
            (index_name, header.collect())
        } else {
            (None, (1..width).map(|i| i.to_string()).collect())
        };

        let mut index = Vec::with_capacity(grid.len());
        let mut rows = Vec::with_capacity(grid.len());
        for mut row in grid {
            let cells = row.split_off(1);
            index.extend(row);
            rows.push(cells);
        }

        let table = Self {
            index_name,
            columns,
            index,
            rows,
            has_header: first_row_is_header,
        };

        let duplicates = table.duplicate_keys();
        if duplicates > 0 {
            tracing::debug!("Table index has {} repeated row keys", duplicates);
        }

        Ok(table)
    }

    /// Header text of the index column, when a header row was used
    pub fn index_name(&self) -> Option<&str> {
        self.index_name.as_deref()
    }

    /// Names of the data columns (the index column excluded)
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row keys, one per data row
    pub fn index(&self) -> &[String] {
        &self.index
    }

    /// Data rows without the index column
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Data cell at `(row, column)`, both 0-based and excluding the index
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Number of row keys that already appeared on an earlier row
    pub fn duplicate_keys(&self) -> usize {
        let mut seen = HashSet::new();
        self.index
            .iter()
            .filter(|key| !seen.insert(key.as_str()))
            .count()
    }

    /// Tallies the data cells (index and header excluded)
    ///
    /// Empty cells are counted under the value `""`.
    pub fn value_counts(&self) -> ValueFrequency {
        ValueFrequency::tally(self.rows.iter().flatten().map(String::as_str))
    }
}

/// Occurrence counts of distinct cell values, most frequent first
///
/// Ties keep the order in which values first appeared in the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueFrequency {
    entries: Vec<(String, u64)>,
}

impl ValueFrequency {
    fn tally<'a>(values: impl Iterator<Item = &'a str>) -> Self {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<(String, u64)> = Vec::new();

        for value in values {
            match positions.get(value) {
                Some(&pos) => entries[pos].1 += 1,
                None => {
                    positions.insert(value, entries.len());
                    entries.push((value.to_string(), 1));
                }
            }
        }

        // stable sort keeps first-appearance order among equal counts
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn get(&self, value: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extracts the `table_index`-th table (1-based) of a content region
///
/// # Errors
///
/// * `IndexOutOfRange` - `table_index` is 0 or larger than the number of tables
/// * `MalformedTable` - the table has no rows, no cells, or an oversized span
pub fn extract_table(
    region: &Region<'_>,
    table_index: usize,
    first_row_is_header: bool,
) -> Result<StructuredTable, ExtractError> {
    let tables = region.find_all("table");

    if table_index < 1 || table_index > tables.len() {
        return Err(ExtractError::IndexOutOfRange {
            requested: table_index,
            available: tables.len(),
        });
    }

    let grid = read_grid(&tables[table_index - 1])?;
    StructuredTable::from_grid(grid, first_row_is_header)
}

/// Reads the cell texts of a `<table>` element, expanding spans
fn read_grid(table: &Region<'_>) -> Result<Vec<Vec<String>>, ExtractError> {
    let rows: Vec<Region<'_>> = table
        .find_all("tr")
        .into_iter()
        .filter(|row| row.closest("table").as_ref() == Some(table))
        .collect();

    if rows.is_empty() {
        return Err(ExtractError::MalformedTable(
            "table has no rows".to_string(),
        ));
    }

    // per column: rows still covered by a rowspan, and the value to repeat
    let mut carried: Vec<Option<(usize, String)>> = Vec::new();
    let mut grid = Vec::with_capacity(rows.len());

    for row in rows {
        let mut cells = row.children(&["th", "td"]).into_iter();
        let mut values: Vec<String> = Vec::new();

        loop {
            let column = values.len();

            if let Some(slot) = carried.get_mut(column) {
                if let Some((remaining, value)) = slot.take() {
                    values.push(value.clone());
                    if remaining > 1 {
                        *slot = Some((remaining - 1, value));
                    }
                    continue;
                }
            }

            let Some(cell) = cells.next() else {
                if column < carried.len() {
                    values.push(String::new());
                    continue;
                }
                break;
            };

            let text = collapse_whitespace(&cell.text());
            let colspan = parse_span(cell.attr("colspan"), MAX_COLSPAN, "colspan")?;
            let rowspan = parse_span(cell.attr("rowspan"), MAX_ROWSPAN, "rowspan")?;

            for _ in 0..colspan {
                if rowspan > 1 {
                    let column = values.len();
                    if carried.len() <= column {
                        carried.resize(column + 1, None);
                    }
                    carried[column] = Some((rowspan - 1, text.clone()));
                }
                values.push(text.clone());
            }
        }

        // trailing padding from expired rowspans carries no information
        while values.last().is_some_and(String::is_empty) {
            values.pop();
        }

        // blank rows keep their position; from_grid pads them to full width
        grid.push(values);
    }

    if grid.iter().all(Vec::is_empty) {
        return Err(ExtractError::MalformedTable(
            "table has no cells".to_string(),
        ));
    }

    Ok(grid)
}

/// Parses a span attribute; missing or unparsable values count as 1
fn parse_span(value: Option<&str>, max: usize, name: &str) -> Result<usize, ExtractError> {
    let span = value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n >= 1)
        .unwrap_or(1);

    if span > max {
        return Err(ExtractError::MalformedTable(format!(
            "{} of {} exceeds the limit of {}",
            name, span, max
        )));
    }

    Ok(span)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A table together with its value tally and export outcome
#[derive(Debug)]
pub struct TableExtraction {
    pub table: StructuredTable,
    pub values: ValueFrequency,
    /// Where the CSV export landed, or why it failed
    pub export: OutputResult<PathBuf>,
}

/// Extracts tables and exports each one to `<phrase>.csv`
#[derive(Debug, Clone)]
pub struct TableExtractor {
    exporter: TableExporter,
}

impl TableExtractor {
    pub fn new(exporter: TableExporter) -> Self {
        Self { exporter }
    }

    /// Extracts a table, tallies its values and exports it
    ///
    /// The export is best effort: a failed write is logged and reported in
    /// [`TableExtraction::export`] while the table itself is still returned.
    pub fn extract(
        &self,
        region: &Region<'_>,
        phrase: &Phrase,
        table_index: usize,
        first_row_is_header: bool,
    ) -> Result<TableExtraction, ExtractError> {
        let table = extract_table(region, table_index, first_row_is_header)?;

        let export = self.exporter.export(&table, phrase);
        match &export {
            Ok(path) => tracing::info!(path = %path.display(), "Table exported"),
            Err(e) => tracing::warn!(%phrase, "Failed to export table: {}", e),
        }

        let values = table.value_counts();

        Ok(TableExtraction {
            table,
            values,
            export,
        })
    }
}
