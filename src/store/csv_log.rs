// src/store/csv_log.rs

use crate::errors::AppResult;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Written once at the head of a new log so spreadsheet tools pick UTF-8.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Append `records` to the CSV log at `path`.
///
/// - empty `records` → no-op, the file is not even created
/// - new (or zero-length) file → BOM + header from the field names + rows
/// - existing file → rows only
///
/// The file is opened in append mode, so earlier content is never rewritten.
/// Returns the number of rows written.
pub fn append_records<T: Serialize>(records: &[T], path: &Path) -> AppResult<usize> {
    if records.is_empty() {
        return Ok(0);
    }

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let needs_header = file.metadata()?.len() == 0;
    if needs_header {
        file.write_all(UTF8_BOM)?;
    }

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(needs_header)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);

    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    Ok(records.len())
}

/// The last rows of a log, for display.
#[derive(Debug)]
pub struct LogTail {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}

/// Read the header and the last `n` rows of the log at `path`.
/// Returns `Ok(None)` when the log does not exist yet.
pub fn read_tail(path: &Path, n: usize) -> AppResult<Option<LogTail>> {
    if !path.exists() {
        return Ok(None);
    }

    let bytes = fs::read(path)?;
    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content);

    let headers = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        rows.push(record?.iter().map(str::to_string).collect::<Vec<_>>());
    }

    let total_rows = rows.len();
    let rows = rows.split_off(total_rows.saturating_sub(n));

    Ok(Some(LogTail {
        headers,
        rows,
        total_rows,
    }))
}
