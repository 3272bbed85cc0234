//! Heuristic mark parser.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Tokens that mark a performance as not having produced a result.
const INVALID_TOKENS: [&str; 8] = ["DNF", "DNS", "DQ", "NH", "ND", "SCR", "FOUL", "X"];

static FEET_LEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)['\-]").unwrap());
static FEET_ANYWHERE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)'").unwrap());
static INCHES_AFTER_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"['\-\s](\d+(?:\.\d+)?)").unwrap());
static INCHES_BEFORE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\d+(?:\.\d+)?)?""#).unwrap());
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+))").unwrap());

/// Whether a mark measures elapsed time or covered distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkKind {
    /// Seconds; lower is better.
    Time,
    /// Inches; higher is better.
    Distance,
}

/// Numeric reading of a textual mark.
///
/// `value` is only meaningful when `valid` is true.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParsedMark {
    /// Total seconds for times, total inches for distances.
    pub value: f64,
    /// True when lower values are better.
    pub is_time: bool,
    /// False for invalidity tokens and unparsable strings.
    pub valid: bool,
}

impl ParsedMark {
    /// A time mark of `seconds`.
    pub const fn time(seconds: f64) -> Self {
        Self {
            value: seconds,
            is_time: true,
            valid: true,
        }
    }

    /// A distance mark of `inches`.
    pub const fn distance(inches: f64) -> Self {
        Self {
            value: inches,
            is_time: false,
            valid: true,
        }
    }

    /// An invalid mark of the given kind.
    pub const fn invalid(is_time: bool) -> Self {
        Self {
            value: 0.0,
            is_time,
            valid: false,
        }
    }

    /// Returns the measurement kind.
    pub fn kind(&self) -> MarkKind {
        if self.is_time {
            MarkKind::Time
        } else {
            MarkKind::Distance
        }
    }
}

/// Parses a textual mark into a comparable value.
///
/// Distances (`19' 9.5"`, `19-09.5`) become total inches, clock times
/// (`7.24`, `6:34.9`, `1:02:03`) become total seconds. Invalidity tokens,
/// empty strings and unreadable times yield `valid == false`. Never panics.
///
/// # Examples
///
/// ```
/// use podium_core::parse_mark;
///
/// let jump = parse_mark("19' 9.5\"");
/// assert!(jump.valid && !jump.is_time);
/// assert_eq!(jump.value, 237.5);
///
/// let run = parse_mark("6:34.90");
/// assert!(run.valid && run.is_time);
/// assert!((run.value - 394.9).abs() < 1e-9);
///
/// assert!(!parse_mark("DNF").valid);
/// ```
pub fn parse_mark(mark: &str) -> ParsedMark {
    let s = mark.trim().to_uppercase();
    if s.is_empty() {
        return ParsedMark::invalid(true);
    }

    if INVALID_TOKENS.iter().any(|token| s.starts_with(token)) {
        return ParsedMark::invalid(true);
    }

    let has_digit = s.chars().any(|c| c.is_ascii_digit());
    if has_digit && s.contains(['\'', '"', '-']) {
        return parse_distance(&s);
    }

    parse_time(&s)
}

fn parse_distance(s: &str) -> ParsedMark {
    let feet = FEET_LEADING
        .captures(s)
        .or_else(|| FEET_ANYWHERE.captures(s))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().parse::<f64>());
    let inches = INCHES_AFTER_SEPARATOR
        .captures(s)
        .or_else(|| INCHES_BEFORE_QUOTE.captures(s))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().parse::<f64>());

    let mut total = 0.0;
    match feet {
        Some(Ok(f)) => total += f * 12.0,
        Some(Err(_)) => return ParsedMark::invalid(false),
        None => {}
    }
    match inches {
        Some(Ok(i)) => total += i,
        Some(Err(_)) => return ParsedMark::invalid(false),
        None => {}
    }

    if !total.is_finite() {
        return ParsedMark::invalid(false);
    }
    ParsedMark::distance(total)
}

fn parse_time(s: &str) -> ParsedMark {
    // seconds, minutes, hours
    const MULTIPLIERS: [f64; 3] = [1.0, 60.0, 3600.0];

    let mut total = 0.0;
    for (part, multiplier) in s.split(':').rev().zip(MULTIPLIERS) {
        if part.is_empty() {
            continue;
        }
        match leading_number(part) {
            Some(value) => total += value * multiplier,
            None => return ParsedMark::invalid(true),
        }
    }

    if !total.is_finite() || total == 0.0 {
        return ParsedMark::invalid(true);
    }
    ParsedMark::time(total)
}

/// Reads the numeric prefix of a token (`"12.3H"` → 12.3).
fn leading_number(token: &str) -> Option<f64> {
    LEADING_NUMBER
        .captures(token)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
