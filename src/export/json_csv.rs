// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{TimesheetExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Pretty-printed JSON array, one object per saved result.
pub(crate) fn export_json(rows: &[TimesheetExport], path: &Path) -> AppResult<()> {
    info(format!("Writing {} row(s) as JSON: {}", rows.len(), path.display()));

    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    out.write_all(b"\n")?;
    out.flush()?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with a header row taken from the field names.
pub(crate) fn export_csv(rows: &[TimesheetExport], path: &Path) -> AppResult<()> {
    info(format!("Writing {} row(s) as CSV: {}", rows.len(), path.display()));

    let csv_err = |e: csv::Error| AppError::Export(format!("CSV error: {e}"));

    let mut wtr = csv::Writer::from_path(path).map_err(csv_err)?;
    for row in rows {
        wtr.serialize(row).map_err(csv_err)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
