// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{Cell, export_to_row, get_headers};
use crate::export::{TimesheetExport, notify_export_success};
use crate::ui::messages::info;
use crate::utils::formatting::yes_no;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const NEGATIVE_FONT: u32 = 0xC00000;

/// Export XLSX with a styled header, banded rows and auto column widths.
pub(crate) fn export_xlsx(rows: &[TimesheetExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Pontos").map_err(to_export_error)?;

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (index, item) in rows.iter().enumerate() {
        let row = (index + 1) as u32;
        let band = if index % 2 == 0 { band1 } else { band2 };
        let negative = item.balance_minutes < 0;

        for (col, cell) in export_to_row(item).iter().enumerate() {
            let width = write_cell(worksheet, row, col as u16, cell, band, negative)?;
            col_widths[col] = col_widths[col].max(width);
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell and return its display width.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
    negative: bool,
) -> AppResult<usize> {
    let mut fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if negative {
        fmt = fmt.set_font_color(Color::RGB(NEGATIVE_FONT));
    }

    let width = match cell {
        Cell::Number(n) => {
            let fmt = fmt.set_align(FormatAlign::Right);
            worksheet
                .write_with_format(row, col, *n, &fmt)
                .map_err(to_export_error)?;
            n.to_string().len()
        }
        Cell::Flag(b) => {
            let s = yes_no(*b);
            worksheet
                .write_with_format(row, col, s, &fmt)
                .map_err(to_export_error)?;
            s.width()
        }
        Cell::Text(s) => {
            worksheet
                .write_with_format(row, col, s.as_str(), &fmt)
                .map_err(to_export_error)?;
            s.width()
        }
    };

    Ok(width)
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
