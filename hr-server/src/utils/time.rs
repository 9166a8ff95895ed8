//! Time helpers for calendar-day and month-range computation.
//!
//! All date to timestamp conversion happens here or in the API handler
//! layer; repositories only ever receive `i64` Unix millis.

use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Current time as Unix millis
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Calendar day key for a timestamp: local midnight in the business
/// timezone, rendered back as Unix millis.
///
/// This is the natural key of an attendance record together with the
/// employee reference.
pub fn day_key_millis(at_millis: i64, tz: Tz) -> i64 {
    let date = Utc
        .timestamp_millis_opt(at_millis)
        .single()
        .unwrap_or_else(Utc::now)
        .with_timezone(&tz)
        .date_naive();
    day_start_millis(date, tz)
}

/// Start of a date (00:00:00) as Unix millis in the business timezone.
///
/// DST gap fallback: if local midnight does not exist, fall back to UTC.
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    let naive = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Parse a strict `YYYY-MM` month filter into a half-open millis range
/// `[month start, next month start)` in the business timezone.
///
/// Invalid format or an out-of-range month is a validation error, never
/// silently ignored.
pub fn parse_month_range(month: &str, tz: Tz) -> AppResult<(i64, i64)> {
    let (year_part, month_part) = month
        .split_once('-')
        .ok_or_else(|| AppError::validation(format!("Invalid month format: {month}, use YYYY-MM")))?;

    // Length checks alone are not enough: integer parsing accepts a
    // leading sign, so "+025" or "-5" would slip through.
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if year_part.len() != 4 || month_part.len() != 2 || !all_digits(year_part) || !all_digits(month_part) {
        return Err(AppError::validation(format!(
            "Invalid month format: {month}, use YYYY-MM"
        )));
    }

    let year: i32 = year_part
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid month format: {month}, use YYYY-MM")))?;
    let m: u32 = month_part
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid month format: {month}, use YYYY-MM")))?;

    let start_date = NaiveDate::from_ymd_opt(year, m, 1)
        .ok_or_else(|| AppError::validation(format!("Invalid month: {month}")))?;
    let end_date = if m == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, m + 1, 1)
    }
    .ok_or_else(|| AppError::validation(format!("Invalid month: {month}")))?;

    Ok((day_start_millis(start_date, tz), day_start_millis(end_date, tz)))
}

/// Day of the date a timestamp falls on, for logging
pub fn date_of_millis(at_millis: i64, tz: Tz) -> NaiveDate {
    Utc.timestamp_millis_opt(at_millis)
        .single()
        .unwrap_or_else(Utc::now)
        .with_timezone(&tz)
        .date_naive()
}

/// Render a day-key back as `YYYY-MM-DD` for log output
pub fn format_day(day_millis: i64, tz: Tz) -> String {
    let date = date_of_millis(day_millis, tz);
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}
