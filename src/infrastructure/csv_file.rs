//! CSV adapter
//!
//! Reads import files into `RawRow`s and writes the flat export. Header
//! mapping lives in the domain (`Column::from_header`); this module only
//! deals with the file format.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::domain::entities::Application;
use crate::domain::services::{ExportRecord, RawRow, EXPORT_COLUMNS};
use crate::error::NexusResult;

/// Parse CSV with a header row. Rows that are entirely blank are skipped;
/// short rows leave the missing columns absent. Cells that are not valid
/// UTF-8 (Latin-1 spreadsheet exports) are decoded lossily so one bad cell
/// never costs the rest of the file.
pub fn read_rows<R: Read>(reader: R) -> NexusResult<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader.byte_headers()?.iter().map(decode).collect();
    let mut rows = Vec::new();

    for (index, record) in reader.byte_records().enumerate() {
        let record = record?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        // Header is line 1
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 2);
        let cells: Vec<String> = record.iter().map(decode).collect();
        if cells.iter().any(|cell| cell.contains(char::REPLACEMENT_CHARACTER)) {
            tracing::warn!(line, "replaced invalid UTF-8 in csv row");
        }
        let pairs = headers
            .iter()
            .map(String::as_str)
            .zip(cells.iter().map(String::as_str));
        rows.push(RawRow::from_pairs(line, pairs));
    }

    tracing::debug!(rows = rows.len(), "read csv rows");
    Ok(rows)
}

fn decode(cell: &[u8]) -> String {
    String::from_utf8_lossy(cell).into_owned()
}

pub fn read_rows_from_path(path: &Path) -> NexusResult<Vec<RawRow>> {
    let file = File::open(path)?;
    read_rows(file)
}

/// Write the header followed by one row per application. The header is
/// written even when there are no applications.
pub fn write_export<W: Write>(writer: W, apps: &[Application]) -> NexusResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(EXPORT_COLUMNS)?;
    for app in apps {
        writer.serialize(ExportRecord::from(app))?;
    }
    writer.flush()?;
    Ok(())
}
