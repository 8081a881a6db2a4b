//! Final per-document result.

use crate::core::timesheet::accumulator::Totals;
use crate::core::timesheet::header::Header;
use crate::utils::time::{format_signed, format_unsigned, secs_to_minutes};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetResult {
    pub employee_name: String,
    /// `MM/YYYY`, or "Não encontrado".
    pub period: String,
    pub expected_formatted: String,
    pub worked_formatted: String,
    pub balance_formatted: String,
    pub balance_minutes: i64,
    pub signed: bool,
}

impl TimesheetResult {
    pub fn build(header: &Header, signed: bool, totals: &Totals) -> Self {
        let expected = secs_to_minutes(totals.expected_seconds);
        let worked = secs_to_minutes(totals.worked_seconds);
        let balance = worked - expected;

        Self {
            employee_name: header.name_or_default(),
            period: header.period_or_default(),
            expected_formatted: format_unsigned(expected),
            worked_formatted: format_unsigned(worked),
            balance_formatted: format_signed(balance),
            balance_minutes: balance,
            signed,
        }
    }
}
