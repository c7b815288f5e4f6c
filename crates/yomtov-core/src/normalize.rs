//! Holiday list normalization.
//!
//! Turns a raw holiday list into a display-ready sequence:
//! 1. Drops malformed events (blank titles)
//! 2. Keeps only the requested category, if any
//! 3. Removes duplicates (same title on the same day, first one wins)
//! 4. Sorts by date
//!
//! Sorting is stable: events on the same day keep their input order, there
//! is no secondary sort key.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::event::{HolidayEvent, NormalizedEvent};

/// Normalizes a holiday list.
///
/// With `category_filter` set, only events whose category equals it
/// (case-sensitive) are kept; events without a category are dropped. The
/// input is left untouched and a new list is returned.
pub fn normalize(events: &[HolidayEvent], category_filter: Option<&str>) -> Vec<HolidayEvent> {
    let mut kept: Vec<HolidayEvent> = events
        .iter()
        .filter(|e| is_well_formed(e))
        .filter(|e| category_filter.is_none_or(|c| e.is_in_category(c)))
        .cloned()
        .collect();

    kept = dedup_events(kept);
    sort_events(&mut kept);

    tracing::debug!(
        input = events.len(),
        output = kept.len(),
        category = category_filter,
        "normalized holiday list"
    );

    kept
}

/// Removes later occurrences of the same title on the same day.
///
/// Order of the retained events is unchanged.
pub fn dedup_events(events: Vec<HolidayEvent>) -> Vec<HolidayEvent> {
    let mut seen: HashSet<(String, NaiveDate)> = HashSet::new();
    events
        .into_iter()
        .filter(|e| {
            let (title, date) = e.occurrence_key();
            let fresh = seen.insert((title.to_owned(), date));
            if !fresh {
                tracing::trace!(title = %e.title, date = %e.date, "dropping duplicate holiday");
            }
            fresh
        })
        .collect()
}

/// Sorts events by date, keeping same-day events in their current order.
pub fn sort_events(events: &mut [HolidayEvent]) {
    events.sort_by_key(|e| e.date);
}

/// Annotates each event with its distance from `today`.
pub fn annotate(events: &[HolidayEvent], today: NaiveDate) -> Vec<NormalizedEvent> {
    events
        .iter()
        .map(|e| NormalizedEvent::from_event(e, today))
        .collect()
}

fn is_well_formed(event: &HolidayEvent) -> bool {
    if event.title.trim().is_empty() {
        tracing::debug!(date = %event.date, "dropping holiday without a title");
        return false;
    }
    true
}
