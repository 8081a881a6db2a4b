//! Aggregate figures over a set of reconciled documents.

use crate::core::timesheet::TimesheetResult;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchStats {
    pub total: usize,
    pub signed: usize,
    pub pending: usize,
    /// Balance >= 0.
    pub positive_balance: usize,
    pub negative_balance: usize,
    pub total_balance_minutes: i64,
    /// 0 for an empty set.
    pub average_balance_minutes: f64,
}

impl BatchStats {
    pub fn from_results(results: &[TimesheetResult]) -> Self {
        let total = results.len();
        if total == 0 {
            return Self::default();
        }

        let signed = results.iter().filter(|r| r.signed).count();
        let negative_balance = results.iter().filter(|r| r.balance_minutes < 0).count();
        let total_balance_minutes: i64 = results.iter().map(|r| r.balance_minutes).sum();

        Self {
            total,
            signed,
            pending: total - signed,
            positive_balance: total - negative_balance,
            negative_balance,
            total_balance_minutes,
            average_balance_minutes: total_balance_minutes as f64 / total as f64,
        }
    }
}
