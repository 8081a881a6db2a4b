//! Timesheet reconciliation engine.
//!
//! Pure and synchronous: one call per document text, no shared state.

pub mod accumulator;
pub mod classifier;
pub mod day_line;
pub mod header;
pub mod result;
pub mod signature;

pub use accumulator::{DayCounts, Totals};
pub use classifier::{DayKind, DayOutcome, SkipReason, classify};
pub use day_line::{DayLines, RawDayRecord, day_lines};
pub use header::{Header, ReportPeriod, extract_header};
pub use result::TimesheetResult;
pub use signature::is_signed;

use crate::utils::text::normalize_whitespace;
use chrono::NaiveDate;
use serde::Serialize;

/// One scanned day, kept for inspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub date: NaiveDate,
    pub weekday: String,
    pub fields: [String; 4],
    pub expected_token: String,
    pub outcome: DayOutcome,
}

impl DayReport {
    fn new(record: &RawDayRecord<'_>, outcome: DayOutcome) -> Self {
        Self {
            date: record.date,
            weekday: record.weekday.to_string(),
            fields: record.fields.map(str::to_string),
            expected_token: record.expected_token.to_string(),
            outcome,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reconciliation {
    pub result: TimesheetResult,
    pub totals: Totals,
    pub days: Vec<DayReport>,
}

/// Reconcile one document's extracted text.
pub fn reconcile(text: &str) -> TimesheetResult {
    let (header, signed) = scan_header(text);

    let totals = day_lines(text).fold(Totals::default(), |mut acc, record| {
        acc.add(&classify(&record));
        acc
    });

    TimesheetResult::build(&header, signed, &totals)
}

/// Same as [`reconcile`], keeping every scanned day and its outcome.
pub fn reconcile_detailed(text: &str) -> Reconciliation {
    let (header, signed) = scan_header(text);

    let mut totals = Totals::default();
    let mut days = Vec::new();
    for record in day_lines(text) {
        let outcome = classify(&record);
        totals.add(&outcome);
        days.push(DayReport::new(&record, outcome));
    }

    Reconciliation {
        result: TimesheetResult::build(&header, signed, &totals),
        totals,
        days,
    }
}

fn scan_header(text: &str) -> (Header, bool) {
    let normalized = normalize_whitespace(text);
    (extract_header(&normalized), is_signed(&normalized))
}
