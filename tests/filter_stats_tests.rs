use rponto::core::stats::BatchStats;
use rponto::db::models::TimesheetRow;
use rponto::errors::AppError;
use rponto::models::filter::{PeriodFilter, ResultFilter, SortField};
use rponto::utils::time::format_signed;
use rponto::TimesheetResult;

fn result(name: &str, period: &str, balance: i64, signed: bool) -> TimesheetResult {
    TimesheetResult {
        employee_name: name.to_string(),
        period: period.to_string(),
        expected_formatted: "08:00".to_string(),
        worked_formatted: "08:00".to_string(),
        balance_formatted: format_signed(balance),
        balance_minutes: balance,
        signed,
    }
}

fn row(id: i64, name: &str, period: &str, balance: i64) -> TimesheetRow {
    TimesheetRow {
        id,
        result: result(name, period, balance, true),
        source_file: format!("/tmp/{id}.txt"),
        processed_at: "2025-07-01T10:00:00+00:00".to_string(),
    }
}

fn sample_rows() -> Vec<TimesheetRow> {
    vec![
        row(1, "MARIA SILVA", "05/2025", 0),
        row(2, "JOÃO PEREIRA", "06/2025", -60),
        row(3, "ANA LIMA", "12/2024", 125),
        row(4, "Não encontrado", "Não encontrado", 30),
    ]
}

fn names(rows: &[TimesheetRow]) -> Vec<&str> {
    rows.iter().map(|r| r.result.employee_name.as_str()).collect()
}

#[test]
fn test_period_filter_parse() {
    assert_eq!(PeriodFilter::parse("05").unwrap(), PeriodFilter::Month(5));
    assert_eq!(PeriodFilter::parse("5").unwrap(), PeriodFilter::Month(5));
    assert_eq!(PeriodFilter::parse("2025").unwrap(), PeriodFilter::Year(2025));
    assert_eq!(
        PeriodFilter::parse("06/2025").unwrap(),
        PeriodFilter::Exact {
            month: 6,
            year: 2025
        }
    );
    assert_eq!(PeriodFilter::parse(" 12 ").unwrap(), PeriodFilter::Month(12));
}

#[test]
fn test_period_filter_rejects_garbage() {
    for bad in [
        "", "13", "00", "maio", "2025/06", "06/25", "123", "06-2025", "+5", "+05/2025", "05/+025",
        "+2025",
    ] {
        match PeriodFilter::parse(bad) {
            Err(AppError::InvalidPeriod(_)) => {}
            other => panic!("{:?} should be rejected, got {:?}", bad, other),
        }
    }
}

#[test]
fn test_period_filter_matches() {
    let month = PeriodFilter::Month(5);
    assert!(month.matches("05/2025"));
    assert!(month.matches("05/2024"));
    assert!(!month.matches("06/2025"));

    let year = PeriodFilter::Year(2025);
    assert!(year.matches("01/2025"));
    assert!(!year.matches("12/2024"));

    let exact = PeriodFilter::Exact {
        month: 6,
        year: 2025,
    };
    assert!(exact.matches("06/2025"));
    assert!(!exact.matches("06/2024"));

    assert!(!month.matches("Não encontrado"));
    assert!(!year.matches(""));
}

#[test]
fn test_default_filter_sorts_by_name() {
    let out = ResultFilter::default().apply(sample_rows());
    assert_eq!(
        names(&out),
        vec!["ANA LIMA", "JOÃO PEREIRA", "MARIA SILVA", "Não encontrado"]
    );
}

#[test]
fn test_sort_by_period_is_chronological_with_unknown_last() {
    let filter = ResultFilter {
        sort: SortField::Period,
        ..Default::default()
    };
    let out = filter.apply(sample_rows());
    let periods: Vec<&str> = out.iter().map(|r| r.result.period.as_str()).collect();
    assert_eq!(periods, vec!["12/2024", "05/2025", "06/2025", "Não encontrado"]);
}

#[test]
fn test_sort_by_balance_descending() {
    let filter = ResultFilter {
        sort: SortField::Balance,
        descending: true,
        ..Default::default()
    };
    let out = filter.apply(sample_rows());
    let balances: Vec<i64> = out.iter().map(|r| r.result.balance_minutes).collect();
    assert_eq!(balances, vec![125, 30, 0, -60]);
}

#[test]
fn test_search_is_case_insensitive_on_name_and_period() {
    let by_name = ResultFilter {
        search: Some("silva".into()),
        ..Default::default()
    };
    assert_eq!(names(&by_name.apply(sample_rows())), vec!["MARIA SILVA"]);

    let by_period = ResultFilter {
        search: Some("2024".into()),
        ..Default::default()
    };
    assert_eq!(names(&by_period.apply(sample_rows())), vec!["ANA LIMA"]);

    let empty = ResultFilter {
        search: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(empty.apply(sample_rows()).len(), 4);
}

#[test]
fn test_period_and_search_combine() {
    let filter = ResultFilter {
        period: Some(PeriodFilter::Year(2025)),
        search: Some("a".into()),
        ..Default::default()
    };
    assert_eq!(
        names(&filter.apply(sample_rows())),
        vec!["JOÃO PEREIRA", "MARIA SILVA"]
    );
}

#[test]
fn test_stats_over_results() {
    let results = vec![
        result("A", "05/2025", 0, true),
        result("B", "05/2025", -60, false),
        result("C", "05/2025", 90, true),
    ];
    let s = BatchStats::from_results(&results);

    assert_eq!(s.total, 3);
    assert_eq!(s.signed, 2);
    assert_eq!(s.pending, 1);
    // zero balance counts on the non-negative side
    assert_eq!(s.positive_balance, 2);
    assert_eq!(s.negative_balance, 1);
    assert_eq!(s.total_balance_minutes, 30);
    assert_eq!(s.average_balance_minutes, 10.0);
}

#[test]
fn test_stats_empty_set() {
    let s = BatchStats::from_results(&[]);
    assert_eq!(s, BatchStats::default());
    assert_eq!(s.total, 0);
    assert_eq!(s.average_balance_minutes, 0.0);
}
