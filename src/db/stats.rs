use crate::db::migrate::applied_migrations;
use crate::db::pool::DbPool;
use crate::db::queries::count_timesheets;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL TIMESHEETS / EMPLOYEES
    //
    let count = count_timesheets(&pool.conn)?;
    println!(
        "{}• Saved timesheets:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    let employees: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT employee_name) FROM timesheets",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Employees:{} {}", CYAN, RESET, employees);

    //
    // 3) PERIOD RANGE (MM/YYYY → YYYYMM for ordering)
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT period FROM timesheets
             WHERE period LIKE '__/____'
             ORDER BY substr(period, 4, 4) || substr(period, 1, 2) ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT period FROM timesheets
             WHERE period LIKE '__/____'
             ORDER BY substr(period, 4, 4) || substr(period, 1, 2) DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Period range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) SCHEMA
    //
    let migrations = applied_migrations(&pool.conn)?;
    println!(
        "{}• Schema:{} {} migration(s), latest {}",
        CYAN,
        RESET,
        migrations.len(),
        migrations.last().map(String::as_str).unwrap_or("--")
    );

    println!();
    Ok(())
}
