//! Employee name and reporting period from the report header.
//!
//! The header reads like `MARIA SILVA - Período: 01/05/2025 à 31/05/2025`.
//! Only the first occurrence in the document is considered.

use crate::utils::text::NOT_FOUND;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<name>[A-ZÇÁÉÍÓÚÀÂÊÔÃÕ\s\-]+)\s*-\s*Período:\s*(?P<d>\d{1,2})/(?P<m>\d{1,2})/(?P<y>\d{2,4})\s*à\s*(?P<end>\d{1,2}/\d{1,2}/\d{2,4})",
    )
    .unwrap()
});

/// Reporting period, taken from the header's start date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPeriod {
    pub month: u32,
    pub year: String,
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub employee_name: Option<String>,
    pub period: Option<ReportPeriod>,
}

impl Header {
    pub fn name_or_default(&self) -> String {
        self.employee_name
            .clone()
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }

    pub fn period_or_default(&self) -> String {
        self.period
            .as_ref()
            .map(|p| p.to_string())
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }
}

/// Scan whitespace-normalized text for the header line.
pub fn extract_header(normalized: &str) -> Header {
    let Some(caps) = HEADER_RE.captures(normalized) else {
        return Header::default();
    };

    let name = caps["name"].trim();
    let employee_name = if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    };

    // \d{1,2} always fits in u32
    let month: u32 = caps["m"].parse().unwrap_or(0);
    let raw_year = &caps["y"];
    let year = if raw_year.len() == 2 {
        format!("20{raw_year}")
    } else {
        raw_year.to_string()
    };

    Header {
        employee_name,
        period: Some(ReportPeriod { month, year }),
    }
}
