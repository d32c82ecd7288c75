use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

/// An in-memory delimited table. Rows are padded or truncated to the header
/// width at read time, so every row indexes safely by column.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Append a column. `values` must hold one entry per row.
    pub fn add_column(&mut self, header: impl Into<String>, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            bail!(
                "column has {} values for {} rows",
                values.len(),
                self.rows.len()
            );
        }
        self.headers.push(header.into());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }

    /// Values of the column at `index`, one per row.
    pub fn column_values(&self, index: usize) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
            .collect()
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a delimited file with a header row.
///
/// Fully-empty rows are skipped; ragged rows are padded to the header width.
pub fn read_csv_table(path: &Path, delimiter: u8) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read header: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    debug!(path = %path.display(), columns = headers.len(), rows = rows.len(), "csv loaded");
    Ok(CsvTable { headers, rows })
}

/// Write the table back out with the given delimiter.
pub fn write_csv_table(path: &Path, table: &CsvTable, delimiter: u8) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("create output: {}", path.display()))?;
    writer
        .write_record(&table.headers)
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .with_context(|| format!("write row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush output: {}", path.display()))?;
    Ok(())
}
