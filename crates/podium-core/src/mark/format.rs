//! Display formatting for mark values.

use super::parse::ParsedMark;

/// Formats seconds as `ss.ss` below one minute, `m:ss.ss` otherwise.
///
/// ```
/// use podium_core::format_time;
///
/// assert_eq!(format_time(7.243), "7.24");
/// assert_eq!(format_time(394.9), "6:34.90");
/// ```
pub fn format_time(seconds: f64) -> String {
    if seconds < 60.0 {
        return format!("{seconds:.2}");
    }
    let minutes = (seconds / 60.0).floor();
    let rest = seconds - minutes * 60.0;
    format!("{}:{:0>5}", minutes as u64, format!("{rest:.2}"))
}

/// Formats inches as `F' I.II"`.
///
/// ```
/// use podium_core::format_distance;
///
/// assert_eq!(format_distance(237.5), "19' 9.50\"");
/// ```
pub fn format_distance(inches: f64) -> String {
    let feet = (inches / 12.0).floor();
    let rest = inches - feet * 12.0;
    format!("{}' {:.2}\"", feet as i64, rest)
}

/// Formats the improvement of `new` over `old`.
///
/// Times read `-{old-new}s`, distances `+{new-old}"`, both to two
/// decimals. Returns `None` when either mark is invalid.
///
/// ```
/// use podium_core::{format_improvement, parse_mark};
///
/// let label = format_improvement(&parse_mark("7.10"), &parse_mark("7.24"));
/// assert_eq!(label.as_deref(), Some("-0.14s"));
/// ```
pub fn format_improvement(new: &ParsedMark, old: &ParsedMark) -> Option<String> {
    if !new.valid || !old.valid {
        return None;
    }
    if new.is_time {
        Some(format!("-{:.2}s", old.value - new.value))
    } else {
        Some(format!("+{:.2}\"", new.value - old.value))
    }
}
