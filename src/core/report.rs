//! Console rendering of reconciled documents.

use crate::core::stats::BatchStats;
use crate::core::timesheet::{DayKind, DayReport, SkipReason, TimesheetResult};
use crate::utils::colors::{GREEN, GREY, RED, YELLOW, color_for_balance, colorize_not_found, paint};
use crate::utils::formatting::{bold, mins2readable, yes_no};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_unsigned, secs_to_minutes};

const BALANCE_COL: usize = 5;
const SIGNED_COL: usize = 6;

/// One row per document: (source label, result).
pub fn results_table(rows: &[(String, &TimesheetResult)], separator: &str) -> String {
    let mut table = Table::new(vec![
        Column::left("Arquivo"),
        Column::left("Colaborador"),
        Column::left("Período"),
        Column::right("Previsto"),
        Column::right("Realizado"),
        Column::right("Saldo"),
        Column::left("Assinado"),
    ])
    .with_separator(separator);

    for (source, r) in rows {
        table.add_row(vec![
            source.clone(),
            r.employee_name.clone(),
            r.period.clone(),
            r.expected_formatted.clone(),
            r.worked_formatted.clone(),
            r.balance_formatted.clone(),
            yes_no(r.signed).to_string(),
        ]);
    }

    table.render_with(|row, col, cell| {
        let r = rows[row].1;
        match col {
            BALANCE_COL => paint(&cell, color_for_balance(r.balance_minutes)),
            SIGNED_COL if !r.signed => paint(&cell, YELLOW),
            1 | 2 => colorize_not_found(&cell),
            _ => cell,
        }
    })
}

fn describe_outcome(day: &DayReport) -> (String, &'static str) {
    let o = &day.outcome;
    let worked = format_unsigned(secs_to_minutes(o.worked_seconds));
    match &o.kind {
        DayKind::Normal => (format!("normal   {worked}"), GREEN),
        DayKind::Special => (format!("especial {worked}"), GREEN),
        DayKind::Skipped(SkipReason::InvalidExpected { token }) => {
            (format!("ignorado (C.PRE '{token}')"), GREY)
        }
        DayKind::Skipped(SkipReason::InvalidClock { field, token }) => (
            format!("ignorado (campo {} '{}', previsto mantido)", field + 1, token),
            RED,
        ),
    }
}

/// Per-day breakdown, in scan order.
pub fn days_table(days: &[DayReport], separator: &str) -> String {
    let mut table = Table::new(vec![
        Column::left("Data"),
        Column::left("Dia"),
        Column::left("Ent1"),
        Column::left("Sai1"),
        Column::left("Ent2"),
        Column::left("Sai2"),
        Column::left("C.PRE"),
        Column::left("Resultado"),
    ])
    .with_separator(separator);

    let mut colors = Vec::with_capacity(days.len());
    for d in days {
        let (text, color) = describe_outcome(d);
        colors.push(color);

        let mut row = vec![d.date.format("%d/%m/%Y").to_string(), d.weekday.clone()];
        row.extend(d.fields.iter().cloned());
        row.push(d.expected_token.clone());
        row.push(text);
        table.add_row(row);
    }

    table.render_with(|row, col, cell| if col == 7 { paint(&cell, colors[row]) } else { cell })
}

pub fn print_stats(stats: &BatchStats) {
    println!("{}", bold("Resumo"));
    println!("  Documentos : {}", stats.total);
    println!("  Assinados  : {}", stats.signed);
    println!("  Pendentes  : {}", stats.pending);
    println!("  Saldo ≥ 0  : {}", stats.positive_balance);
    println!("  Saldo < 0  : {}", stats.negative_balance);
    println!(
        "  Saldo total: {}",
        paint(
            &mins2readable(stats.total_balance_minutes, true, true),
            color_for_balance(stats.total_balance_minutes)
        )
    );
    let avg = stats.average_balance_minutes.round() as i64;
    println!(
        "  Saldo médio: {}",
        paint(&mins2readable(avg, true, false), color_for_balance(avg))
    );
}
