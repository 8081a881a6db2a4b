use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ordered list of schema migrations: (version, description, SQL).
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250601_0001_create_timesheets",
        "Created timesheets table",
        r#"
        CREATE TABLE IF NOT EXISTS timesheets (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_name    TEXT NOT NULL,
            period           TEXT NOT NULL,
            expected         TEXT NOT NULL,
            worked           TEXT NOT NULL,
            balance          TEXT NOT NULL,
            balance_minutes  INTEGER NOT NULL,
            signed           INTEGER NOT NULL DEFAULT 0 CHECK(signed IN (0, 1)),
            source_file      TEXT NOT NULL DEFAULT '',
            processed_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_timesheets_period ON timesheets(period);
        CREATE INDEX IF NOT EXISTS idx_timesheets_name ON timesheets(employee_name);
        "#,
    ),
    (
        "20250715_0002_unique_timesheet_source",
        "Unique (employee_name, period, source_file) on timesheets",
        r#"
        DELETE FROM timesheets
         WHERE id NOT IN (
            SELECT MAX(id) FROM timesheets
             GROUP BY employee_name, period, source_file
         );

        CREATE UNIQUE INDEX IF NOT EXISTS uq_timesheets_name_period_source
            ON timesheets(employee_name, period, source_file);
        "#,
    ),
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, version: &str, description: &str, sql: &str) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, description],
    )?;

    tx.commit()?;

    success(format!("Migration applied: {} → {}", version, description));
    Ok(())
}

/// Versions already recorded in the `log` table, oldest first.
pub fn applied_migrations(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, description, sql) in MIGRATIONS {
        if !is_applied(conn, version)? {
            apply(conn, version, description, sql)?;
        }
    }

    Ok(())
}
