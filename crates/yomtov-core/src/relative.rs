//! Calendar-aware "time until" labels.
//!
//! [`Distance::between`] classifies how far a holiday is from a reference
//! day, and its [`Display`](std::fmt::Display) impl renders the label shown
//! on a card:
//!
//! | distance                   | label                 |
//! |----------------------------|-----------------------|
//! | in the past                | `Passed`              |
//! | same day                   | `Today`               |
//! | next day                   | `Tomorrow`            |
//! | less than a calendar month | `In 12 days`          |
//! | a month or more            | `In 2 months, 3 days` |
//!
//! Months are calendar months, not 30-day buckets: the anchor is the
//! reference day advanced by whole months (clamped to the end of short
//! months), and the day clause counts from that anchor.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::{add_months, calendar_month_span, days_between};

/// Distance from a reference day to a target day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Distance {
    /// The target is before the reference day.
    Passed,
    /// Same calendar day.
    Today,
    /// The following calendar day.
    Tomorrow,
    /// Two or more days away but less than one whole calendar month.
    Days { days: u32 },
    /// One or more whole calendar months plus leftover days.
    Months { months: u32, days: u32 },
}

impl Distance {
    /// Computes the distance from `now` to `target`.
    pub fn between(now: NaiveDate, target: NaiveDate) -> Self {
        let day_delta = days_between(now, target);
        match day_delta {
            d if d < 0 => return Self::Passed,
            0 => return Self::Today,
            1 => return Self::Tomorrow,
            _ => {}
        }

        let days = clamp_u32(day_delta);
        match whole_months(now, target) {
            Some((months, remainder)) if months > 0 => Self::Months {
                months,
                days: clamp_u32(remainder),
            },
            _ => Self::Days { days },
        }
    }

    /// Returns true if the target day is the reference day.
    pub fn is_today(&self) -> bool {
        matches!(self, Self::Today)
    }

    /// Returns true if the target day is already behind the reference day.
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Passed => f.write_str("Passed"),
            Self::Today => f.write_str("Today"),
            Self::Tomorrow => f.write_str("Tomorrow"),
            Self::Days { days } => write!(f, "In {}", plural(days, "day")),
            Self::Months { months, days } => {
                write!(f, "In {}", plural(months, "month"))?;
                if days > 0 {
                    write!(f, ", {}", plural(days, "day"))?;
                }
                Ok(())
            }
        }
    }
}

/// Formats the distance label from `now` to `target`.
///
/// Both dates are compared as calendar days; see [`Distance`] for the rules.
pub fn format_distance(now: NaiveDate, target: NaiveDate) -> String {
    Distance::between(now, target).to_string()
}

/// Finds the largest month count whose anchor does not overshoot `target`.
///
/// Returns `(months, remaining_days)`. Starts from the year/month difference
/// and steps back while the clamped anchor lands after the target, which
/// happens when the reference day-of-month does not exist in the anchor month
/// or is later than the target's day.
fn whole_months(now: NaiveDate, target: NaiveDate) -> Option<(u32, i64)> {
    let mut months = calendar_month_span(now, target);
    while months > 0 {
        let anchor = add_months(now, u32::try_from(months).ok()?)?;
        let remainder = days_between(anchor, target);
        if remainder >= 0 {
            return Some((u32::try_from(months).ok()?, remainder));
        }
        months -= 1;
    }
    None
}

fn clamp_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
