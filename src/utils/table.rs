//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured in terminal columns, so accented names line up.
//! Colors are applied per cell after padding via [`Table::render_with`].

use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    /// Character repeated under the header.
    pub separator: String,
}

fn pad(s: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(s.width()));
    match align {
        Align::Left => format!("{s}{fill}"),
        Align::Right => format!("{fill}{s}"),
    }
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: "-".to_string(),
        }
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        if !separator.is_empty() {
            self.separator = separator.to_string();
        }
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.width())
                    .chain(std::iter::once(col.header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        self.render_with(|_, _, cell| cell)
    }

    /// `style(row, col, padded_cell)` may wrap the padded cell (e.g. in ANSI
    /// colors) without disturbing the alignment.
    pub fn render_with<F>(&self, style: F) -> String
    where
        F: Fn(usize, usize, String) -> String,
    {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| pad(&col.header, *w, col.align))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        let rule: Vec<String> = widths
            .iter()
            .map(|w| self.separator.repeat(*w / self.separator.width().max(1)))
            .collect();
        out.push_str(&rule.join("  "));
        out.push('\n');

        // Rows
        for (r, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(c, (col, w))| {
                    let raw = row.get(c).map(String::as_str).unwrap_or("");
                    style(r, c, pad(raw, *w, col.align))
                })
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        out
    }
}
