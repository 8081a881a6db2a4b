//! Time codec: clock tokens (HH:MM / HH:MM:SS) to minutes and minutes back
//! to HH:MM / ±HH:MM strings.

/// Decode a clock token into (possibly fractional) minutes.
///
/// `HH:MM` → `H*60 + M`, `HH:MM:SS` → `H*60 + M + S/60`.
/// Returns `None` for anything else (empty input, text, wrong arity, ...).
pub fn try_parse_clock(token: &str) -> Option<f64> {
    try_parse_clock_secs(token).map(|s| s as f64 / 60.0)
}

/// Same shapes as [`try_parse_clock`], as whole seconds. Accumulation works
/// on this form so sums stay exact.
pub fn try_parse_clock_secs(token: &str) -> Option<i64> {
    let nums = token
        .split(':')
        .map(parse_component)
        .collect::<Option<Vec<i64>>>()?;

    match nums.as_slice() {
        [h, m] => Some(h * 3600 + m * 60),
        [h, m, s] => Some(h * 3600 + m * 60 + s),
        _ => None,
    }
}

/// Permissive variant: any malformed token decodes to `0.0`.
///
/// Day lines routinely carry words ("Feriado", "Folga") in clock positions,
/// so failure here is an ordinary value, not an error.
pub fn parse_clock(token: &str) -> f64 {
    try_parse_clock(token).unwrap_or(0.0)
}

fn parse_component(p: &str) -> Option<i64> {
    if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    p.parse::<u32>().ok().map(i64::from)
}

/// The one rounding point: whole minutes of a seconds total, rounded down.
pub fn secs_to_minutes(secs: i64) -> i64 {
    secs.div_euclid(60)
}

/// `HH:MM` of the absolute value. Hours are not capped at 24.
pub fn format_unsigned(mins: i64) -> String {
    let m = mins.unsigned_abs();
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// `+HH:MM` / `-HH:MM`; zero is rendered as `+00:00`.
pub fn format_signed(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "+" };
    format!("{}{}", sign, format_unsigned(mins))
}

/// Reverse of [`format_signed`]. A missing sign is read as positive.
pub fn parse_signed(s: &str) -> Option<i64> {
    let s = s.trim();
    let (sign, rest) = match s.as_bytes().first()? {
        b'-' => (-1, &s[1..]),
        b'+' => (1, &s[1..]),
        _ => (1, s),
    };

    let (h, m) = rest.split_once(':')?;
    let h: i64 = h.parse().ok()?;
    let m: i64 = m.parse().ok()?;
    if h < 0 || !(0..60).contains(&m) {
        return None;
    }

    Some(sign * (h * 60 + m))
}
