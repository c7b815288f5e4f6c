//! Day-granularity time helpers.
//!
//! Holidays are all-day occurrences, so everything in this crate compares
//! calendar dates ([`NaiveDate`]) and never times of day. Feed values may
//! still carry a time and an offset (candle-lighting entries do), which
//! [`parse_day`] strips down to the calendar date as written.

use chrono::{DateTime, Local, Months, NaiveDate};

/// Returns the current calendar date in the local timezone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a feed date into a calendar date.
///
/// Accepts a plain ISO-8601 date (`2025-03-14`) or an RFC 3339 datetime
/// (`2025-03-14T19:05:00-04:00`). For datetimes the date in the value's own
/// offset is kept, no conversion to another zone happens.
///
/// Returns `None` for anything else.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    None
}

/// Signed number of calendar days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Advances `date` by `months` calendar months.
///
/// Days past the end of the resulting month are clamped to its last day
/// (Jan 31 + 1 month is Feb 28, or Feb 29 in a leap year). Returns `None`
/// when the result leaves chrono's supported range.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Difference between the year/month fields of two dates, ignoring days.
pub fn calendar_month_span(from: NaiveDate, to: NaiveDate) -> i64 {
    use chrono::Datelike;

    let years = i64::from(to.year()) - i64::from(from.year());
    let months = i64::from(to.month()) - i64::from(from.month());
    years * 12 + months
}
