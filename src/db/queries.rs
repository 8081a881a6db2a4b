use crate::core::timesheet::TimesheetResult;
use crate::db::models::TimesheetRow;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::filter::ResultFilter;
use chrono::Local;
use rusqlite::{Connection, Result, Row, params};

/// Insert (or replace) a reconciled document.
/// A row is identified by employee name, period and source file.
pub fn upsert_timesheet(
    conn: &Connection,
    result: &TimesheetResult,
    source_file: &str,
) -> AppResult<i64> {
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO timesheets (employee_name, period, expected, worked, balance,
                                 balance_minutes, signed, source_file, processed_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(employee_name, period, source_file) DO UPDATE SET
            expected        = excluded.expected,
            worked          = excluded.worked,
            balance         = excluded.balance,
            balance_minutes = excluded.balance_minutes,
            signed          = excluded.signed,
            processed_at    = excluded.processed_at",
        params![
            result.employee_name,
            result.period,
            result.expected_formatted,
            result.worked_formatted,
            result.balance_formatted,
            result.balance_minutes,
            if result.signed { 1 } else { 0 },
            source_file,
            now,
        ],
    )?;

    let id = conn.query_row(
        "SELECT id FROM timesheets
         WHERE employee_name = ?1 AND period = ?2 AND source_file = ?3",
        params![result.employee_name, result.period, source_file],
        |row| row.get(0),
    )?;
    Ok(id)
}

pub fn map_row(row: &Row) -> Result<TimesheetRow> {
    Ok(TimesheetRow {
        id: row.get("id")?,
        result: TimesheetResult {
            employee_name: row.get("employee_name")?,
            period: row.get("period")?,
            expected_formatted: row.get("expected")?,
            worked_formatted: row.get("worked")?,
            balance_formatted: row.get("balance")?,
            balance_minutes: row.get("balance_minutes")?,
            signed: row.get::<_, i32>("signed")? == 1,
        },
        source_file: row.get("source_file")?,
        processed_at: row.get("processed_at")?,
    })
}

pub fn load_all_timesheets(pool: &mut DbPool) -> AppResult<Vec<TimesheetRow>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM timesheets
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Saved rows selected and ordered by `filter`.
pub fn load_timesheets(pool: &mut DbPool, filter: &ResultFilter) -> AppResult<Vec<TimesheetRow>> {
    let rows = load_all_timesheets(pool)?;
    Ok(filter.apply(rows))
}

pub fn count_timesheets(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM timesheets", [], |row| row.get(0))
}
