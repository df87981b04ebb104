//! Value coercers: raw cell → normalized scalar or null.
//!
//! These are total functions. Anything that cannot be interpreted becomes
//! `None`; no coercer returns an error or panics. Thousands-separator and
//! locale rules live only here so parsers never touch them.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::types::RawCell;

/// Parse a textual number, ignoring comma thousands separators.
///
/// Null-ish input (empty after trimming) and non-finite results both coerce
/// to `None`. Idempotent on its own canonical output:
/// `coerce_number(&n.to_string()) == Some(n)`.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Interpret a raw value as a calendar date and emit canonical `YYYY-MM-DD`
/// (UTC, truncated to day). Any parse failure yields `None`.
pub fn normalize_date(raw: &str) -> Option<String> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc().date().format("%Y-%m-%d").to_string());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date().format("%Y-%m-%d").to_string());
        }
    }
    // Two-digit years must be tried before the four-digit layouts: `%Y`
    // happily accepts a one/two-digit year, so `1/5/24` would otherwise
    // match `%Y/%m/%d` as year 1. Four-digit input fails `%y` cleanly on
    // the trailing digits, so this order is safe both ways.
    for fmt in [
        "%Y-%m-%d",
        "%m/%d/%y",
        "%m/%d/%Y",
        "%Y/%m/%d",
        "%d-%b-%Y",
        "%b %d, %Y",
        "%B %d, %Y",
    ] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.format("%Y-%m-%d").to_string());
        }
    }
    None
}

/// Coerce a raw cell for a numeric measurement column.
pub(crate) fn cell_to_number(cell: &RawCell) -> Option<f64> {
    match cell {
        RawCell::Text(s) => coerce_number(s),
        RawCell::Number(n) => Some(*n).filter(|n| n.is_finite()),
        RawCell::Timestamp(_) => None,
    }
}

/// Coerce a raw cell for a free-text column.
pub(crate) fn cell_to_text(cell: &RawCell) -> Option<String> {
    match cell {
        RawCell::Text(s) => {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_owned())
        }
        RawCell::Number(n) => Some(format_number(*n)),
        RawCell::Timestamp(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
    }
}

/// Coerce a raw cell for the date column.
pub(crate) fn cell_to_date(cell: &RawCell) -> Option<String> {
    match cell {
        RawCell::Text(s) => normalize_date(s),
        RawCell::Timestamp(dt) => Some(dt.date().format("%Y-%m-%d").to_string()),
        RawCell::Number(_) => None,
    }
}

/// Render a numeric cell as text without a spurious `.0` on whole numbers.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
