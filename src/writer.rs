//! CSV output with an explicit column order.
//!
//! Records expose their values by column name through [`CsvRecord`]; the
//! caller decides which columns are written and in which order. A single
//! record and a list of records go through the same [`write_csv`] entry
//! point.

use crate::error::{GeneratorError, Result};
use csv::Writer;
use log::debug;
use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A record that can render any of its columns as text.
pub trait CsvRecord {
    /// Returns the value for `column`, or `None` if the record has no such column.
    fn field(&self, column: &str) -> Option<Cow<'_, str>>;
}

/// Writes `records` to `path`, overwriting any existing file.
///
/// The first row is `columns`; each following row holds one record's
/// values in that order. Values are quoted as needed by the `csv` crate.
pub fn write_csv<'r, T, I>(path: impl AsRef<Path>, records: I, columns: &[&str]) -> Result<()>
where
    T: CsvRecord + 'r,
    I: IntoIterator<Item = &'r T>,
{
    let path = path.as_ref();
    let file = File::create(path)?;
    let rows = write_records(file, records, columns)?;
    debug!("Wrote {} rows to {}", rows, path.display());
    Ok(())
}

/// Writes a single record to `path` with a header row.
pub fn write_csv_record<T: CsvRecord>(
    path: impl AsRef<Path>,
    record: &T,
    columns: &[&str],
) -> Result<()> {
    write_csv(path, std::slice::from_ref(record), columns)
}

/// Writes the header and records to any writer, returning the number of data rows.
pub fn write_records<'r, W, T, I>(writer: W, records: I, columns: &[&str]) -> Result<usize>
where
    W: Write,
    T: CsvRecord + 'r,
    I: IntoIterator<Item = &'r T>,
{
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(columns)?;

    let mut rows = 0;
    for record in records {
        let mut row = Vec::with_capacity(columns.len());
        for &column in columns {
            let value = record
                .field(column)
                .ok_or_else(|| GeneratorError::UnknownColumn {
                    column: column.to_string(),
                })?;
            row.push(value);
        }
        csv_writer.write_record(row.iter().map(|v| v.as_bytes()))?;
        rows += 1;
    }

    csv_writer.flush()?;
    Ok(rows)
}
