//! Feed document decoding.
//!
//! The pipeline from a downloaded document to holidays:
//! 1. [`decode_feed`] parses the JSON envelope
//! 2. [`collect_holidays`] converts items, dropping malformed ones and
//!    candle-lighting noise
//! 3. the caller hands the result to [`yomtov_core::normalize`]

use serde::{Deserialize, Serialize};
use yomtov_core::HolidayEvent;

use crate::error::{FeedError, FeedResult};
use crate::raw_item::RawFeedItem;

/// Categories that mark Shabbat/holiday start and end times rather than
/// occasions.
const CANDLE_CATEGORIES: &[&str] = &["candles", "havdalah"];

/// A decoded feed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feed {
    /// Feed title (e.g., "Hebcal Diaspora 2025").
    pub title: Option<String>,
    /// Location the feed was generated for, when times are included.
    pub location: Option<FeedLocation>,
    /// The feed entries, in feed order.
    pub items: Vec<RawFeedItem>,
    /// Error message returned instead of items.
    pub error: Option<String>,
}

/// Location block of a feed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedLocation {
    /// Human-readable place name.
    pub title: Option<String>,
    /// IANA timezone identifier.
    pub tzid: Option<String>,
}

/// Options applied while turning feed items into holidays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedOptions {
    /// Drop candle-lighting and havdalah entries.
    pub skip_candle_lighting: bool,
    /// Drop items whose title contains any of these (case-insensitive).
    pub exclude_titles: Vec<String>,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            skip_candle_lighting: true,
            exclude_titles: Vec::new(),
        }
    }
}

impl FeedOptions {
    /// Builder method to toggle candle-lighting exclusion.
    pub fn with_skip_candle_lighting(mut self, skip: bool) -> Self {
        self.skip_candle_lighting = skip;
        self
    }

    /// Builder method to add an excluded title pattern.
    pub fn exclude_title(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_titles.push(pattern.into());
        self
    }

    fn excludes(&self, holiday: &HolidayEvent) -> bool {
        let title_lower = holiday.title.to_lowercase();

        if self.skip_candle_lighting
            && (title_lower.contains("candle")
                || holiday
                    .category
                    .as_deref()
                    .is_some_and(|c| CANDLE_CATEGORIES.contains(&c)))
        {
            return true;
        }

        self.exclude_titles
            .iter()
            .any(|p| title_lower.contains(&p.to_lowercase()))
    }
}

/// Parses a feed document.
///
/// # Errors
///
/// Returns [`FeedError::Json`] if the document is not a JSON object of the
/// expected shape, and [`FeedError::Remote`] if it carries an error message.
pub fn decode_feed(json: &str) -> FeedResult<Feed> {
    let feed: Feed = serde_json::from_str(json)?;
    if let Some(ref message) = feed.error {
        return Err(FeedError::remote(message));
    }
    tracing::debug!(items = feed.items.len(), title = ?feed.title, "decoded feed");
    Ok(feed)
}

/// Converts feed items into holidays.
///
/// Malformed items are logged and skipped; they never fail the batch. Feed
/// order is preserved.
pub fn collect_holidays(items: &[RawFeedItem], options: &FeedOptions) -> Vec<HolidayEvent> {
    let mut holidays = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item.to_holiday() {
            Ok(holiday) if options.excludes(&holiday) => {
                tracing::trace!(title = %holiday.title, "excluded by feed options");
            }
            Ok(holiday) => holidays.push(holiday),
            Err(e) => tracing::warn!(index, error = %e, "skipping malformed feed item"),
        }
    }
    holidays
}

/// Decodes a document and collects its holidays in one step.
///
/// # Errors
///
/// See [`decode_feed`].
pub fn load_holidays(json: &str, options: &FeedOptions) -> FeedResult<Vec<HolidayEvent>> {
    let feed = decode_feed(json)?;
    Ok(collect_holidays(&feed.items, options))
}
