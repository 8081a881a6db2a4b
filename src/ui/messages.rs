//! User-facing console messages.
//!
//! Regular output goes to stdout, errors to stderr. Set `NO_COLOR` to get
//! plain text (icons are kept). While stdout carries machine-readable output
//! (`process --json`), [`route_to_stderr`] moves status lines off it.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static STATUS_ON_STDERR: AtomicBool = AtomicBool::new(false);

/// Send `info`/`success`/`warning`/`header` to stderr instead of stdout.
pub fn route_to_stderr(on: bool) {
    STATUS_ON_STDERR.store(on, Ordering::Relaxed);
}

fn emit(line: String) {
    if STATUS_ON_STDERR.load(Ordering::Relaxed) {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn styled(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    if use_color() {
        format!("{color}{BOLD}{icon}{RESET} {msg}")
    } else {
        format!("{icon} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(styled(FG_BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(styled(FG_GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(styled(FG_YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", styled(FG_RED, ICON_ERR, msg));
}

/// Section header, e.g. one per processed document.
pub fn header<T: fmt::Display>(msg: T) {
    if use_color() {
        emit(format!("{FG_BLUE}{BOLD}=== {msg}{RESET}"));
    } else {
        emit(format!("=== {msg}"));
    }
}
