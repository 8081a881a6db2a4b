use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const MAX_TARGET_WIDTH: usize = 48;

/// ANSI colour for a log operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "save" => Colour::Green,
        "extract_failed" | "save_failed" => Colour::Red,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

struct LogEntry {
    id: i64,
    date: String,
    operation: String,
    target: String,
    message: String,
}

/// Long targets (usually file paths) keep their tail, which is the part
/// that tells documents apart.
fn shorten_target(target: &str) -> String {
    if target.width() <= MAX_TARGET_WIDTH {
        return target.to_string();
    }
    let chars: Vec<char> = target.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(MAX_TARGET_WIDTH - 3)..]
        .iter()
        .collect();
    format!("...{tail}")
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.width()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| e.operation.width())
            .max()
            .unwrap_or(4);

        println!("📜 Internal log:\n");

        for e in entries {
            let color = color_for_operation(&e.operation);
            // pad before painting: escape codes would break the width
            let op = format!("{:<op_w$}", e.operation, op_w = op_w);
            let target = if e.target.is_empty() {
                String::new()
            } else {
                format!(" ({})", shorten_target(&e.target))
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                color.paint(op),
                target,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
