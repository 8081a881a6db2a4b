/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Balance color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_balance(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

/// Wrap an already padded cell in a color.
pub fn paint(cell: &str, color: &str) -> String {
    format!("{color}{cell}{RESET}")
}

/// Fields that could not be recovered from the document are greyed out.
pub fn colorize_not_found(value: &str) -> String {
    if value.trim() == crate::utils::text::NOT_FOUND {
        paint(value, GREY)
    } else {
        value.to_string()
    }
}
