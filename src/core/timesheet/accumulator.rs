//! Running totals over classified days.

use crate::core::timesheet::classifier::{DayKind, DayOutcome};
use serde::Serialize;

/// Days seen, by classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayCounts {
    pub special: usize,
    pub normal: usize,
    pub skipped: usize,
}

/// Totals in whole seconds; rounding to minutes happens once, in the
/// result builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub expected_seconds: i64,
    pub worked_seconds: i64,
    pub days: DayCounts,
}

impl Totals {
    pub fn add(&mut self, outcome: &DayOutcome) {
        self.expected_seconds += outcome.expected_seconds;

        match outcome.kind {
            DayKind::Special => {
                self.days.special += 1;
                self.worked_seconds += outcome.worked_seconds;
            }
            DayKind::Normal => {
                self.days.normal += 1;
                self.worked_seconds += outcome.worked_seconds;
            }
            DayKind::Skipped(_) => self.days.skipped += 1,
        }
    }

    pub fn expected_minutes(&self) -> f64 {
        self.expected_seconds as f64 / 60.0
    }

    pub fn worked_minutes(&self) -> f64 {
        self.worked_seconds as f64 / 60.0
    }

    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a DayOutcome>,
    {
        outcomes.into_iter().fold(Self::default(), |mut acc, o| {
            acc.add(o);
            acc
        })
    }
}
