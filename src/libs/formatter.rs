//! Date and duration formatting for the challenge board.
//!
//! This module turns raw timestamps and millisecond spans into the Korean
//! display strings used on the board. Every function is pure; the display
//! time zone is always passed in, never read from global state.
//!
//! ## Instants
//!
//! Record timestamps arrive as raw JSON values. [`parse_instant`] accepts:
//!
//! - JSON numbers, read as milliseconds since the Unix epoch
//! - Date-time strings with an offset, down to minute precision
//!   (`2024-01-15T09:30:00Z`, `2024-01-15T09:30+09:00`, `2024-01-15T09:30:00.000+0900`)
//! - Date-time strings without an offset (`2024-01-15T09:30:00`, `2024-01-15 09:30`),
//!   read in the display time zone. A wall time skipped by a DST transition is
//!   moved forward by an hour.
//! - Date-only strings (`2024-01-15`, `2024-01`, `2024`), read as UTC midnight
//!   of the first day they name
//!
//! Anything else is not an instant.
//!
//! ## Format Specifications
//!
//! ### Date Format
//! `{year}년 {month}월 {day}일 ({weekday}) {오전|오후} {hh}:{mm}` using a
//! 12-hour clock, e.g. `2024년 1월 15일 (월) 오후 03:04`. An unparsable value
//! renders as `알 수 없음`.
//!
//! ### Duration Format
//! Non-zero units among days (`일`), hours (`시간`), minutes (`분`) and
//! seconds (`초`), most significant first, separated by spaces. Zero units are
//! skipped; a span shorter than one second renders as `0초`.
//!
//! - 0 ms → `0초`
//! - 90 000 ms → `1분 30초`
//! - 86 700 000 ms → `1일 5분`
//! - negative, NaN or infinite → `None`
//!
//! ## Examples
//!
//! ```rust
//! use challenge_board::libs::formatter::{format_duration, format_instant};
//! use chrono::FixedOffset;
//! use serde_json::json;
//!
//! let seoul = FixedOffset::east_opt(9 * 3600).unwrap();
//! assert_eq!(format_instant(&json!("2024-01-15T06:04:00Z"), &seoul), "2024년 1월 15일 (월) 오후 03:04");
//! assert_eq!(format_instant(&json!("not a date"), &seoul), "알 수 없음");
//!
//! assert_eq!(format_duration(3_661_000.0).as_deref(), Some("1시간 1분 1초"));
//! assert_eq!(format_duration(-5.0), None);
//! ```

use super::messages::Message;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use serde_json::Value;

/// Largest absolute epoch offset, in milliseconds, that still names a valid instant.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Short Korean weekday names, Monday first.
const WEEKDAYS: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

/// Date-time layouts carrying their own numeric offset.
const OFFSET_DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

/// Naive date-time layouts, read in the display time zone.
const LOCAL_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a raw JSON timestamp into an instant.
///
/// Returns `None` for every value that does not name a valid instant,
/// including booleans, objects and out-of-range epoch offsets.
pub fn parse_instant<Tz: TimeZone>(value: &Value, tz: &Tz) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(number) => {
            let millis = number.as_f64()?;
            if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS {
                return None;
            }
            DateTime::<Utc>::from_timestamp_millis(millis.trunc() as i64)
        }
        Value::String(text) => parse_instant_str(text, tz),
        _ => None,
    }
}

/// Parses a timestamp string. See the module docs for the accepted layouts.
pub fn parse_instant_str<Tz: TimeZone>(text: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }

    if let Some(instant) = OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(text, format).ok())
    {
        return Some(instant.with_timezone(&Utc));
    }

    if let Some(naive) = text.strip_suffix(|c: char| c == 'Z' || c == 'z').and_then(parse_naive_datetime) {
        return Some(naive.and_utc());
    }

    if let Some(date) = parse_date(text) {
        return date.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc());
    }

    let naive = parse_naive_datetime(text)?;
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .map(|instant| instant.with_timezone(&Utc))
}

fn parse_naive_datetime(text: &str) -> Option<NaiveDateTime> {
    LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`; missing parts default to the first.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let padded = match text.len() {
        4 if text.bytes().all(|b| b.is_ascii_digit()) => format!("{}-01-01", text),
        7 => format!("{}-01", text),
        _ => text.to_string(),
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d").ok()
}

/// Formats a valid instant in the display time zone.
pub fn format_datetime<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> String {
    let local = instant.with_timezone(tz);
    let weekday = WEEKDAYS[local.weekday().num_days_from_monday() as usize];
    let (is_pm, hour) = local.hour12();
    let meridiem = if is_pm { "오후" } else { "오전" };

    format!(
        "{}년 {}월 {}일 ({}) {} {:02}:{:02}",
        local.year(),
        local.month(),
        local.day(),
        weekday,
        meridiem,
        hour,
        local.minute()
    )
}

/// Formats a raw timestamp, falling back to the "unknown" placeholder.
pub fn format_instant<Tz: TimeZone>(value: &Value, tz: &Tz) -> String {
    match parse_instant(value, tz) {
        Some(instant) => format_datetime(&instant, tz),
        None => Message::UnknownDate.to_string(),
    }
}

/// Formats a span given in milliseconds.
///
/// `None` means the span cannot be shown at all (negative, NaN or infinite);
/// callers omit the duration in that case.
pub fn format_duration(milliseconds: f64) -> Option<String> {
    if !milliseconds.is_finite() || milliseconds < 0.0 {
        return None;
    }

    let total_seconds = (milliseconds / 1000.0).floor() as u64;
    let days = total_seconds / SECONDS_PER_DAY;
    let hours = (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        parts.push(format!("{}일", days));
    }
    if hours > 0 {
        parts.push(format!("{}시간", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}분", minutes));
    }
    // A zero span still shows "0초".
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}초", seconds));
    }

    Some(parts.join(" "))
}

/// Formats the span between two instants; `None` when `end` precedes `start`.
pub fn format_span(start: &DateTime<Utc>, end: &DateTime<Utc>) -> Option<String> {
    format_duration(end.signed_duration_since(*start).num_milliseconds() as f64)
}
