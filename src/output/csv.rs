//! CSV export of extracted tables

use crate::extract::StructuredTable;
use crate::output::OutputResult;
use crate::page::Phrase;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes tables as `<dir>/<phrase>.csv`
#[derive(Debug, Clone)]
pub struct TableExporter {
    dir: PathBuf,
}

impl TableExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Target file for a phrase
    pub fn path_for(&self, phrase: &Phrase) -> PathBuf {
        self.dir.join(format!("{}.csv", phrase.file_stem()))
    }

    /// Writes `table` to the phrase's CSV file, replacing any previous export
    pub fn export(&self, table: &StructuredTable, phrase: &Phrase) -> OutputResult<PathBuf> {
        if !self.dir.as_os_str().is_empty() {
            std::fs::create_dir_all(&self.dir)?;
        }

        let path = self.path_for(phrase);
        let mut writer = BufWriter::new(File::create(&path)?);
        write_csv(&mut writer, table)?;
        writer.flush()?;

        Ok(path)
    }
}

/// Writes a table as CSV: the index is always the first column and the
/// header line is only written for tables that had a header row
pub fn write_csv<W: Write>(out: &mut W, table: &StructuredTable) -> std::io::Result<()> {
    if table.has_header() {
        let header = std::iter::once(table.index_name().unwrap_or(""))
            .chain(table.columns().iter().map(String::as_str));
        write_record(out, header)?;
    }

    for (key, row) in table.index().iter().zip(table.rows()) {
        let record = std::iter::once(key.as_str()).chain(row.iter().map(String::as_str));
        write_record(out, record)?;
    }

    Ok(())
}

fn write_record<'a, W: Write>(
    out: &mut W,
    fields: impl Iterator<Item = &'a str>,
) -> std::io::Result<()> {
    let line = fields.map(quote).collect::<Vec<_>>().join(",");
    writeln!(out, "{}", line)
}

/// Quotes a field when it contains a delimiter, a quote or a line break
fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
