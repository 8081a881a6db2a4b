//! Selection of saved results: period filter, free-text search, ordering.

use crate::db::models::TimesheetRow;
use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodFilter {
    /// `MM`: that month of any year.
    Month(u32),
    /// `YYYY`: any month of that year.
    Year(i32),
    /// `MM/YYYY`
    Exact { month: u32, year: i32 },
}

impl PeriodFilter {
    pub fn parse(s: &str) -> AppResult<Self> {
        let s = s.trim();
        let invalid = || AppError::InvalidPeriod(s.to_string());

        // digits only: `str::parse` would also take a leading sign
        let digits = |v: &str| !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit());

        let month = |m: &str| -> AppResult<u32> {
            if !digits(m) || m.len() > 2 {
                return Err(invalid());
            }
            match m.parse::<u32>() {
                Ok(v) if (1..=12).contains(&v) => Ok(v),
                _ => Err(invalid()),
            }
        };
        let year = |y: &str| -> AppResult<i32> {
            if !digits(y) || y.len() != 4 {
                return Err(invalid());
            }
            y.parse::<i32>().map_err(|_| invalid())
        };

        if let Some((m, y)) = s.split_once('/') {
            return Ok(Self::Exact {
                month: month(m)?,
                year: year(y)?,
            });
        }

        if s.len() == 4 {
            return Ok(Self::Year(year(s)?));
        }

        Ok(Self::Month(month(s)?))
    }

    /// Match against a stored `MM/YYYY` string ("Não encontrado" never matches).
    pub fn matches(&self, period: &str) -> bool {
        let Some((m, y)) = period.split_once('/') else {
            return false;
        };
        let (Ok(m), Ok(y)) = (m.parse::<u32>(), y.parse::<i32>()) else {
            return false;
        };

        match self {
            Self::Month(month) => m == *month,
            Self::Year(year) => y == *year,
            Self::Exact { month, year } => m == *month && y == *year,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    #[default]
    Name,
    Period,
    Balance,
}

#[derive(Debug, Clone, Default)]
pub struct ResultFilter {
    pub period: Option<PeriodFilter>,
    pub search: Option<String>,
    pub sort: SortField,
    pub descending: bool,
}

impl ResultFilter {
    pub fn accepts(&self, row: &TimesheetRow) -> bool {
        let r = &row.result;

        if let Some(p) = &self.period
            && !p.matches(&r.period)
        {
            return false;
        }

        match &self.search {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                r.employee_name.to_lowercase().contains(&term)
                    || r.period.to_lowercase().contains(&term)
            }
            _ => true,
        }
    }

    /// Filter then sort in place.
    pub fn apply(&self, rows: Vec<TimesheetRow>) -> Vec<TimesheetRow> {
        let mut out: Vec<TimesheetRow> = rows.into_iter().filter(|r| self.accepts(r)).collect();

        out.sort_by(|a, b| {
            let ord = compare(self.sort, a, b);
            if self.descending { ord.reverse() } else { ord }
        });
        out
    }
}

fn compare(field: SortField, a: &TimesheetRow, b: &TimesheetRow) -> Ordering {
    match field {
        SortField::Name => a.result.employee_name.cmp(&b.result.employee_name),
        SortField::Period => period_key(&a.result.period).cmp(&period_key(&b.result.period)),
        SortField::Balance => a.result.balance_minutes.cmp(&b.result.balance_minutes),
    }
}

/// `MM/YYYY` sorts chronologically; unknown periods go last.
fn period_key(period: &str) -> (bool, i32, u32) {
    period
        .split_once('/')
        .and_then(|(m, y)| Some((false, y.parse().ok()?, m.parse().ok()?)))
        .unwrap_or((true, 0, 0))
}
