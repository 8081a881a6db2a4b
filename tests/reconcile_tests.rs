mod common;
use common::{HOLIDAY_6H, NORMAL_DAY, joao_doc, maria_doc};

use rponto::core::timesheet::{
    DayKind, SkipReason, Totals, classify, day_lines, extract_header, is_signed, reconcile,
    reconcile_detailed,
};
use rponto::utils::text::normalize_whitespace;

fn classify_line(line: &str) -> rponto::core::timesheet::DayOutcome {
    let record = day_lines(line).next().expect("line should be a day record");
    classify(&record)
}

#[test]
fn test_end_to_end_maria_silva() {
    let r = reconcile(&maria_doc());

    assert_eq!(r.employee_name, "MARIA SILVA");
    assert_eq!(r.period, "05/2025");
    assert!(r.signed);
    assert_eq!(r.expected_formatted, "14:00");
    assert_eq!(r.worked_formatted, "14:00");
    assert_eq!(r.balance_formatted, "+00:00");
    assert_eq!(r.balance_minutes, 0);
}

#[test]
fn test_negative_balance_and_two_digit_year() {
    let r = reconcile(&joao_doc());

    assert_eq!(r.employee_name, "JOÃO PEREIRA");
    assert_eq!(r.period, "06/2025");
    assert!(!r.signed);
    assert_eq!(r.expected_formatted, "08:00");
    assert_eq!(r.worked_formatted, "07:00");
    assert_eq!(r.balance_formatted, "-01:00");
    assert_eq!(r.balance_minutes, -60);
}

#[test]
fn test_pipeline_is_idempotent() {
    let text = maria_doc();
    assert_eq!(reconcile(&text), reconcile(&text));
    assert_eq!(reconcile_detailed(&text), reconcile_detailed(&text));
}

#[test]
fn test_normal_day_arithmetic() {
    let o = classify_line(NORMAL_DAY);
    assert_eq!(o.kind, DayKind::Normal);
    assert_eq!(o.minutes_worked(), 480.0);
    assert_eq!(o.expected_minutes(), 480.0);
}

#[test]
fn test_special_day_full_credit() {
    let o = classify_line("01/05/2025 - Qui 08:00:00 Feriado 13:00:00 17:00:00 08:00:00");
    assert_eq!(o.kind, DayKind::Special);
    assert_eq!(o.minutes_worked(), 480.0);

    let o = classify_line(HOLIDAY_6H);
    assert_eq!(o.kind, DayKind::Special);
    assert_eq!(o.minutes_worked(), 360.0);
    assert_eq!(o.expected_minutes(), 360.0);
}

#[test]
fn test_expected_token_outside_allow_list_contributes_nothing() {
    let o = classify_line("05/05/2025 - Seg 08:00:00 12:00:00 13:00:00 17:00:00 07:00:00");
    assert_eq!(
        o.kind,
        DayKind::Skipped(SkipReason::InvalidExpected {
            token: "07:00:00".into()
        })
    );
    assert_eq!(o.minutes_worked(), 0.0);
    assert_eq!(o.expected_minutes(), 0.0);

    // text in clock positions does not rescue an invalid expected token
    let o = classify_line("05/05/2025 - Seg Feriado Feriado Feriado Feriado -");
    assert!(o.is_skipped());
    assert_eq!(o.expected_minutes(), 0.0);
}

#[test]
fn test_expected_token_trailing_characters_ignored() {
    let o = classify_line("05/05/2025 - Seg 08:00:00 12:00:00 13:00:00 17:00:00 08:00:00*");
    assert_eq!(o.kind, DayKind::Normal);
    assert_eq!(o.expected_minutes(), 480.0);

    // must start with the allowed value, not merely contain it
    let o = classify_line("05/05/2025 - Seg 08:00:00 12:00:00 13:00:00 17:00:00 x08:00:00");
    assert!(o.is_skipped());
}

/// A day with a valid expected token but unusable clocks keeps its expected
/// time and gets no worked time, so it shows up as a deficit.
#[test]
fn test_invalid_clock_keeps_expected_total() {
    let o = classify_line("06/05/2025 - Ter 08:00:00 00:00:00 13:00:00 17:00:00 08:00:00");
    assert_eq!(
        o.kind,
        DayKind::Skipped(SkipReason::InvalidClock {
            field: 1,
            token: "00:00:00".into()
        })
    );
    assert_eq!(o.minutes_worked(), 0.0);
    assert_eq!(o.expected_minutes(), 480.0);

    let text = format!(
        "ANA LIMA - Período: 01/05/2025 à 31/05/2025\n\
         {NORMAL_DAY}\n\
         07/05/2025 - Qua 08:00 - - 17:00 08:00:00\n"
    );
    let r = reconcile(&text);
    assert_eq!(r.expected_formatted, "16:00");
    assert_eq!(r.worked_formatted, "08:00");
    assert_eq!(r.balance_minutes, -480);
    assert_eq!(r.balance_formatted, "-08:00");
}

#[test]
fn test_seconds_accumulate_before_rounding() {
    // each day is 480.5 minutes worked: two days → 961, not 960
    let day = |d: &str| format!("{d}/05/2025 - Seg 08:00:00 12:00:30 13:00:00 17:00:00 08:00:00");
    let text = format!("{}\n{}\n", day("05"), day("06"));

    let r = reconcile(&text);
    assert_eq!(r.worked_formatted, "16:01");
    assert_eq!(r.expected_formatted, "16:00");
    assert_eq!(r.balance_minutes, 1);
    assert_eq!(r.balance_formatted, "+00:01");
}

#[test]
fn test_seconds_on_every_clock_cancel_out() {
    // 08:00:02 → 12:00:02 is exactly four hours; no drift below the minute
    let r = reconcile("02/05/2025 - Sex 08:00:02 12:00:02 13:00:02 17:00:02 08:00:00\n");
    assert_eq!(r.worked_formatted, "08:00");
    assert_eq!(r.balance_minutes, 0);
    assert_eq!(r.balance_formatted, "+00:00");

    let o = classify_line("02/05/2025 - Sex 07:59:59 12:00:01 13:00:17 17:00:15 08:00:00");
    assert_eq!(o.worked_seconds, 8 * 3600);
}

#[test]
fn test_totals_are_order_independent_sums() {
    let text = format!(
        "{NORMAL_DAY}\n{HOLIDAY_6H}\n\
         05/05/2025 - Seg 08:00:00 12:00:00 13:00:00 16:00:00 08:00:00\n\
         06/05/2025 - Ter 08:00:00 12:00:00 13:00:00 17:00:00 07:00:00\n"
    );

    let outcomes: Vec<_> = day_lines(&text).map(|r| classify(&r)).collect();
    let forward = Totals::from_outcomes(&outcomes);
    let backward = Totals::from_outcomes(outcomes.iter().rev());

    assert_eq!(forward, backward);
    assert_eq!(forward.expected_minutes(), 480.0 + 360.0 + 480.0);
    assert_eq!(forward.worked_minutes(), 480.0 + 360.0 + 420.0);
    assert_eq!(forward.days.normal, 2);
    assert_eq!(forward.days.special, 1);
    assert_eq!(forward.days.skipped, 1);

    let sum_expected: i64 = outcomes.iter().map(|o| o.expected_seconds).sum();
    assert_eq!(forward.expected_seconds, sum_expected);
}

#[test]
fn test_detailed_keeps_every_day_in_scan_order() {
    let rec = reconcile_detailed(&maria_doc());

    assert_eq!(rec.days.len(), 2);
    assert_eq!(rec.days[0].date.to_string(), "2025-05-01");
    assert_eq!(rec.days[0].outcome.kind, DayKind::Special);
    assert_eq!(rec.days[1].outcome.kind, DayKind::Normal);
    assert_eq!(rec.result, reconcile(&maria_doc()));
}

#[test]
fn test_missing_header_defaults() {
    let r = reconcile(NORMAL_DAY);
    assert_eq!(r.employee_name, "Não encontrado");
    assert_eq!(r.period, "Não encontrado");
    assert!(!r.signed);
    assert_eq!(r.balance_formatted, "+00:00");
}

#[test]
fn test_empty_document() {
    let r = reconcile("");
    assert_eq!(r.employee_name, "Não encontrado");
    assert_eq!(r.expected_formatted, "00:00");
    assert_eq!(r.worked_formatted, "00:00");
    assert_eq!(r.balance_formatted, "+00:00");
    assert_eq!(r.balance_minutes, 0);
}

#[test]
fn test_header_first_match_wins() {
    let text = normalize_whitespace(
        "Colaborador: MARIA SILVA - Período: 01/05/2025 à 31/05/2025\n\
         JOSÉ COSTA - Período: 01/06/2025 à 30/06/2025",
    );
    let h = extract_header(&text);
    assert_eq!(h.employee_name.as_deref(), Some("MARIA SILVA"));
    assert_eq!(h.period_or_default(), "05/2025");
}

#[test]
fn test_header_spans_extraction_line_breaks() {
    let text = normalize_whitespace("MARIA SILVA -\nPeríodo:\n1/5/2025 à 31/5/2025");
    let h = extract_header(&text);
    assert_eq!(h.name_or_default(), "MARIA SILVA");
    assert_eq!(h.period_or_default(), "05/2025");
}

#[test]
fn test_signature_markers() {
    for text in [
        "Documento assinado digitalmente por RH",
        "ASSINADO DE FORMA DIGITALMENTE",
        "Pré-assinalado pelo colaborador",
        "pre-assinalado",
        "Assinatura   Digital",
        "documento assinado",
    ] {
        assert!(is_signed(&normalize_whitespace(text)), "text {:?}", text);
    }

    assert!(!is_signed("assinatura do colaborador: ________"));
    assert!(!is_signed(""));
}
