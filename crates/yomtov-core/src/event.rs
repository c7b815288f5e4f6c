//! Holiday event types.
//!
//! - [`HolidayEvent`]: one occurrence from the holiday feed, at day granularity
//! - [`NormalizedEvent`]: a display-ready event annotated with its distance
//!   from a reference day

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::relative::Distance;

/// A single holiday occurrence.
///
/// Only `title`, `date` and `category` carry meaning for normalization; the
/// remaining fields are passed through untouched for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEvent {
    /// Display name of the occasion (e.g., "Purim").
    pub title: String,
    /// The calendar day the occasion falls on.
    pub date: NaiveDate,
    /// Secondary label, usually the Hebrew rendering of the title.
    pub hebrew_label: Option<String>,
    /// Feed classification (e.g., "holiday", "roshchodesh", "candles").
    pub category: Option<String>,
    /// Free-text description.
    pub memo: Option<String>,
    /// Link to more information about the occasion.
    pub link: Option<String>,
}

impl HolidayEvent {
    /// Creates a new HolidayEvent with required fields.
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
            hebrew_label: None,
            category: None,
            memo: None,
            link: None,
        }
    }

    /// Builder method to set the Hebrew label.
    pub fn with_hebrew_label(mut self, label: impl Into<String>) -> Self {
        self.hebrew_label = Some(label.into());
        self
    }

    /// Builder method to set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder method to set the memo.
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Builder method to set the link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Returns true if the event belongs to the given category (exact match).
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }

    /// The identity used by [`crate::normalize::dedup_events`]: two events
    /// with equal keys are duplicates, whatever their other fields hold.
    pub fn occurrence_key(&self) -> (&str, NaiveDate) {
        (&self.title, self.date)
    }
}

/// A holiday annotated with its distance from a reference day.
///
/// The label is derived for one specific `today` and is meant to be
/// recomputed whenever that reference changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    /// The underlying holiday.
    #[serde(flatten)]
    pub event: HolidayEvent,
    /// Distance from the reference day.
    pub distance: Distance,
    /// Rendered distance, e.g. "In 1 month, 3 days".
    pub distance_label: String,
}

impl NormalizedEvent {
    /// Creates a NormalizedEvent from a HolidayEvent for the given reference day.
    pub fn from_event(event: &HolidayEvent, today: NaiveDate) -> Self {
        let distance = Distance::between(today, event.date);
        Self {
            event: event.clone(),
            distance,
            distance_label: distance.to_string(),
        }
    }

    /// Returns the holiday title.
    pub fn title(&self) -> &str {
        &self.event.title
    }

    /// Returns the holiday date.
    pub fn date(&self) -> NaiveDate {
        self.event.date
    }

    /// Returns true if the holiday falls on the reference day.
    pub fn is_today(&self) -> bool {
        self.distance.is_today()
    }

    /// Returns true if the holiday is before the reference day.
    pub fn is_passed(&self) -> bool {
        self.distance.is_passed()
    }
}
