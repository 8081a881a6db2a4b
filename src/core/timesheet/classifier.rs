//! Per-day classification: special (credited) / normal (worked) / skipped.

use crate::core::timesheet::day_line::RawDayRecord;
use crate::utils::time::try_parse_clock_secs;
use serde::Serialize;

/// Expected-hours tokens accepted on a day line.
pub const ALLOWED_EXPECTED: [&str; 2] = ["06:00:00", "08:00:00"];

/// Why a day contributed no worked time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// Expected-hours token outside the allow-list; the whole day is ignored.
    InvalidExpected { token: String },
    /// A clock field (0-based) was zero or unreadable. Expected time still
    /// counts for the day.
    InvalidClock { field: usize, token: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayKind {
    /// Holiday, leave, compensation...: fully credited.
    Special,
    Normal,
    Skipped(SkipReason),
}

/// Times are kept in whole seconds so totals add up exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayOutcome {
    #[serde(flatten)]
    pub kind: DayKind,
    pub worked_seconds: i64,
    /// What this day adds to the expected total.
    pub expected_seconds: i64,
}

impl DayOutcome {
    fn skipped(reason: SkipReason, expected_seconds: i64) -> Self {
        Self {
            kind: DayKind::Skipped(reason),
            worked_seconds: 0,
            expected_seconds,
        }
    }

    pub fn minutes_worked(&self) -> f64 {
        self.worked_seconds as f64 / 60.0
    }

    pub fn expected_minutes(&self) -> f64 {
        self.expected_seconds as f64 / 60.0
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.kind, DayKind::Skipped(_))
    }
}

/// Allowed value the token starts with, if any. Trailing characters after
/// the allowed value are ignored.
pub fn allowed_expected(token: &str) -> Option<&'static str> {
    ALLOWED_EXPECTED
        .iter()
        .copied()
        .find(|allowed| token.starts_with(allowed))
}

pub fn classify(record: &RawDayRecord<'_>) -> DayOutcome {
    let Some(allowed) = allowed_expected(record.expected_token) else {
        return DayOutcome::skipped(
            SkipReason::InvalidExpected {
                token: record.expected_token.to_string(),
            },
            0,
        );
    };
    let expected = try_parse_clock_secs(allowed).unwrap_or(0);

    if record
        .fields
        .iter()
        .any(|f| f.chars().any(char::is_alphabetic))
    {
        return DayOutcome {
            kind: DayKind::Special,
            worked_seconds: expected,
            expected_seconds: expected,
        };
    }

    let mut clocks = [0_i64; 4];
    for (i, token) in record.fields.iter().enumerate() {
        match try_parse_clock_secs(token) {
            Some(secs) if secs > 0 => clocks[i] = secs,
            _ => {
                return DayOutcome::skipped(
                    SkipReason::InvalidClock {
                        field: i,
                        token: token.to_string(),
                    },
                    expected,
                );
            }
        }
    }

    let [entry1, exit1, entry2, exit2] = clocks;
    DayOutcome {
        kind: DayKind::Normal,
        worked_seconds: (exit2 - entry2) + (exit1 - entry1),
        expected_seconds: expected,
    }
}
