//! Database row models.
//! These are thin wrappers around SQLite rows.

use crate::core::timesheet::TimesheetResult;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimesheetRow {
    pub id: i64,
    #[serde(flatten)]
    pub result: TimesheetResult,
    pub source_file: String,
    pub processed_at: String,
}
