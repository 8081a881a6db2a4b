use chrono::NaiveDate;
use rponto::core::timesheet::day_line::{
    day_lines, match_dash, match_date, match_field, match_record, match_weekday,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_match_date() {
    let (date, rest) = match_date("02/05/2025 - Sex").unwrap();
    assert_eq!(date, d(2025, 5, 2));
    assert_eq!(rest, " - Sex");

    assert!(match_date("2/05/2025").is_none());
    assert!(match_date("02-05-2025").is_none());
    assert!(match_date("31/02/2025").is_none());
    assert!(match_date("02/05/20").is_none());
}

#[test]
fn test_match_dash_and_weekday() {
    assert_eq!(match_dash(" - Sex"), Some("Sex"));
    assert_eq!(match_dash("-Sex"), Some("Sex"));
    assert_eq!(match_dash(" à 31"), None);

    assert_eq!(match_weekday("Sex 08:00"), Some(("Sex", " 08:00")));
    assert_eq!(match_weekday("Sáb Folga"), Some(("Sáb", " Folga")));
    assert_eq!(match_weekday("Sexta 08:00"), None);
    assert_eq!(match_weekday("Sex"), None);
}

#[test]
fn test_match_field_needs_leading_whitespace() {
    assert_eq!(match_field("  08:00:00 x"), Some(("08:00:00", " x")));
    assert_eq!(match_field("\t-"), Some(("-", "")));
    assert_eq!(match_field("08:00"), None);
    assert_eq!(match_field("   "), None);
}

#[test]
fn test_match_record_fields_in_order() {
    let line = "02/05/2025 - Sex 08:00:00 12:00:00 13:00:00 17:00:00 08:00:00 trailing";
    let (rec, rest) = match_record(line).unwrap();

    assert_eq!(rec.date, d(2025, 5, 2));
    assert_eq!(rec.weekday, "Sex");
    assert_eq!(rec.fields, ["08:00:00", "12:00:00", "13:00:00", "17:00:00"]);
    assert_eq!(rec.expected_token, "08:00:00");
    assert_eq!(rest, " trailing");
}

#[test]
fn test_incomplete_lines_are_not_records() {
    let text = "03/05/2025 - Sáb\n\
                04/05/2025 - Dom 08:00:00 12:00:00\n\
                MARIA SILVA - Período: 01/05/2025 à 31/05/2025\n";
    assert_eq!(day_lines(text).count(), 0);
}

#[test]
fn test_impossible_date_is_not_a_record() {
    let text = "31/02/2025 - Seg 08:00:00 12:00:00 13:00:00 17:00:00 08:00:00\n";
    assert_eq!(day_lines(text).count(), 0);
}

#[test]
fn test_records_do_not_span_lines() {
    let text = "02/05/2025 - Sex 08:00:00 12:00:00\n13:00:00 17:00:00 08:00:00\n";
    assert_eq!(day_lines(text).count(), 0);
}

#[test]
fn test_several_records_on_one_line() {
    let text = "02/05/2025 - Sex 08:00:00 12:00:00 13:00:00 17:00:00 08:00:00 \
                05/05/2025 - Seg Férias Férias Férias Férias 08:00:00";
    let records: Vec<_> = day_lines(text).collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, d(2025, 5, 2));
    assert_eq!(records[1].date, d(2025, 5, 5));
    assert_eq!(records[1].fields[0], "Férias");
}

#[test]
fn test_scan_skips_noise_before_the_date() {
    let text = "linha 7: 02/05/2025 - Sex 08:00 12:00 13:00 17:00 08:00:00\r\n";
    let records: Vec<_> = day_lines(text).collect();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].fields[3], "17:00");
    assert_eq!(records[0].expected_token, "08:00:00");
}

#[test]
fn test_rescanning_yields_same_sequence() {
    let text = "01/05/2025 - Qui Feriado Feriado Feriado Feriado 06:00:00\n\
                texto qualquer\n\
                02/05/2025 - Sex 08:00:00 12:00:00 13:00:00 17:00:00 08:00:00\n";

    let first: Vec<_> = day_lines(text).collect();
    let second: Vec<_> = day_lines(text).collect();
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}
