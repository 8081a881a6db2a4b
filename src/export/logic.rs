// src/export/logic.rs

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::load_timesheets;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TimesheetExport;
use crate::export::xlsx::export_xlsx;
use crate::models::filter::{PeriodFilter, ResultFilter, SortField};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of saved results.
pub struct ExportLogic;

impl ExportLogic {
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path
    /// - `period`: `None`, `MM`, `YYYY` or `MM/YYYY`
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        period: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let filter = ResultFilter {
            period: period.as_deref().map(PeriodFilter::parse).transpose()?,
            sort: SortField::Period,
            ..Default::default()
        };

        let rows: Vec<TimesheetExport> = load_timesheets(pool, &filter)?
            .iter()
            .map(TimesheetExport::from)
            .collect();

        if rows.is_empty() {
            warning("No saved results for the selected period.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            file,
            &format!("{} row(s) exported as {}", rows.len(), format.as_str()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(rows.len())
    }
}
