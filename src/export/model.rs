// src/export/model.rs

use crate::db::models::TimesheetRow;
use serde::Serialize;

/// Flat row shared by every export format.
#[derive(Serialize, Clone, Debug)]
pub struct TimesheetExport {
    pub id: i64,
    pub employee_name: String,
    pub period: String,
    pub expected: String,
    pub worked: String,
    pub balance: String,
    pub balance_minutes: i64,
    pub signed: bool,
    pub source_file: String,
    pub processed_at: String,
}

impl From<&TimesheetRow> for TimesheetExport {
    fn from(row: &TimesheetRow) -> Self {
        let r = &row.result;
        Self {
            id: row.id,
            employee_name: r.employee_name.clone(),
            period: r.period.clone(),
            expected: r.expected_formatted.clone(),
            worked: r.worked_formatted.clone(),
            balance: r.balance_formatted.clone(),
            balance_minutes: r.balance_minutes,
            signed: r.signed,
            source_file: row.source_file.clone(),
            processed_at: row.processed_at.clone(),
        }
    }
}

/// Header for the XLSX sheet, in field order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "employee_name",
        "period",
        "expected",
        "worked",
        "balance",
        "balance_minutes",
        "signed",
        "source_file",
        "processed_at",
    ]
}

/// Typed cell values, in header order.
pub(crate) enum Cell {
    Text(String),
    Number(f64),
    Flag(bool),
}

pub(crate) fn export_to_row(e: &TimesheetExport) -> Vec<Cell> {
    vec![
        Cell::Number(e.id as f64),
        Cell::Text(e.employee_name.clone()),
        Cell::Text(e.period.clone()),
        Cell::Text(e.expected.clone()),
        Cell::Text(e.worked.clone()),
        Cell::Text(e.balance.clone()),
        Cell::Number(e.balance_minutes as f64),
        Cell::Flag(e.signed),
        Cell::Text(e.source_file.clone()),
        Cell::Text(e.processed_at.clone()),
    ]
}
