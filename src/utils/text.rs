//! Text helpers shared by the header and signature scans.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every run of whitespace (newlines included) into a single space.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Placeholder used wherever a header field could not be recovered.
pub const NOT_FOUND: &str = "Não encontrado";
