use crate::core::timesheet::TimesheetResult;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Audit line for a document saved by `process --save`.
pub fn log_saved(conn: &Connection, source_file: &str, r: &TimesheetResult) -> AppResult<()> {
    ttlog(
        conn,
        "save",
        source_file,
        &format!(
            "{} {} balance={} signed={}",
            r.employee_name, r.period, r.balance_formatted, r.signed
        ),
    )
}

/// Audit line for a document whose text could not be extracted.
pub fn log_failed(conn: &Connection, source_file: &str, error: &str) -> AppResult<()> {
    ttlog(conn, "extract_failed", source_file, error)
}
