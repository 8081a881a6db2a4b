//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `+02:25` (short) or `+02h 25m`. Zero never carries a sign.
pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let sign = match mins.signum() {
        1 if want_sign => "+",
        -1 if want_sign => "-",
        _ => "",
    };
    let (h, m) = (mins.unsigned_abs() / 60, mins.unsigned_abs() % 60);

    if short {
        format!("{sign}{h:02}:{m:02}")
    } else {
        format!("{sign}{h:02}h {m:02}m")
    }
}

/// "Sim"/"Não" for boolean report columns.
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Sim" } else { "Não" }
}
