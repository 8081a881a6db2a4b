//! Day-record scanner.
//!
//! A record looks like
//! `02/05/2025 - Sex 08:00:00 12:00:00 13:00:00 17:00:00 08:00:00`:
//! date, dash, weekday, four clock-or-text fields, expected hours.
//!
//! The scan works on the original text, one line at a time. A line may hold
//! several records (extractors that join a whole page into one line); after
//! a record, scanning resumes right after its last token.

use chrono::NaiveDate;

/// One matched record, borrowing its tokens from the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDayRecord<'a> {
    pub date: NaiveDate,
    pub weekday: &'a str,
    /// Entry1, Exit1, Entry2, Exit2 in document order.
    pub fields: [&'a str; 4],
    pub expected_token: &'a str,
}

/// Lazy, finite sequence of day records.
///
/// A clone continues from the same position; [`day_lines`] on the same text
/// always yields the same sequence from the start.
#[derive(Debug, Clone)]
pub struct DayLines<'a> {
    lines: std::str::Lines<'a>,
    current: &'a str,
}

pub fn day_lines(text: &str) -> DayLines<'_> {
    DayLines {
        lines: text.lines(),
        current: "",
    }
}

impl<'a> Iterator for DayLines<'a> {
    type Item = RawDayRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((record, rest)) = scan(self.current) {
                self.current = rest;
                return Some(record);
            }
            self.current = self.lines.next()?;
        }
    }
}

/// First record in `line`, with the unscanned remainder.
fn scan(line: &str) -> Option<(RawDayRecord<'_>, &str)> {
    line.char_indices()
        .filter(|(_, c)| c.is_ascii_digit())
        .find_map(|(i, _)| match_record(&line[i..]))
}

/// Full record anchored at the start of `s`.
pub fn match_record(s: &str) -> Option<(RawDayRecord<'_>, &str)> {
    let (date, s) = match_date(s)?;
    let s = match_dash(s)?;
    let (weekday, s) = match_weekday(s)?;

    let mut fields = [""; 4];
    let mut s = s;
    for slot in fields.iter_mut() {
        let (token, rest) = match_field(s)?;
        *slot = token;
        s = rest;
    }
    let (expected_token, rest) = match_field(s)?;

    Some((
        RawDayRecord {
            date,
            weekday,
            fields,
            expected_token,
        },
        rest,
    ))
}

/// `DD/MM/YYYY`, which must also be a real calendar date.
pub fn match_date(s: &str) -> Option<(NaiveDate, &str)> {
    let b = s.as_bytes();
    if b.len() < 10 {
        return None;
    }
    let shape_ok = b[..10].iter().enumerate().all(|(i, c)| match i {
        2 | 5 => *c == b'/',
        _ => c.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }

    let day: u32 = s[0..2].parse().ok()?;
    let month: u32 = s[3..5].parse().ok()?;
    let year: i32 = s[6..10].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    Some((date, &s[10..]))
}

/// `-` with optional whitespace on either side.
pub fn match_dash(s: &str) -> Option<&str> {
    let rest = s.trim_start().strip_prefix('-')?;
    Some(rest.trim_start())
}

/// Exactly three letters, followed by whitespace (left unconsumed).
pub fn match_weekday(s: &str) -> Option<(&str, &str)> {
    let mut chars = s.char_indices();
    for _ in 0..3 {
        let (_, c) = chars.next()?;
        if !c.is_alphabetic() {
            return None;
        }
    }
    let (end, next) = chars.next()?;
    if !next.is_whitespace() {
        return None;
    }
    Some((&s[..end], &s[end..]))
}

/// At least one whitespace, then a maximal run of non-whitespace.
pub fn match_field(s: &str) -> Option<(&str, &str)> {
    let trimmed = s.trim_start();
    if trimmed.len() == s.len() || trimmed.is_empty() {
        return None;
    }
    let end = trimmed
        .find(char::is_whitespace)
        .unwrap_or(trimmed.len());
    Some((&trimmed[..end], &trimmed[end..]))
}
