//! Raw feed item type.
//!
//! [`RawFeedItem`] mirrors one entry of a Hebcal-style JSON feed as it comes
//! off the wire. The feed is third-party, so every field is optional here and
//! validation happens in [`RawFeedItem::to_holiday`].

use serde::{Deserialize, Serialize};
use yomtov_core::{HolidayEvent, parse_day};

use crate::error::RecordError;

/// One entry of the feed's `items` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFeedItem {
    /// The occasion name (e.g., "Purim", "Candle lighting: 19:05").
    pub title: Option<String>,
    /// ISO-8601 date, or a datetime with offset for timed entries.
    pub date: Option<String>,
    /// Hebrew rendering of the title.
    pub hebrew: Option<String>,
    /// Feed classification (e.g., "holiday", "candles", "havdalah").
    pub category: Option<String>,
    /// Free-text description.
    pub memo: Option<String>,
    /// Link to the occasion's page.
    pub link: Option<String>,
}

impl RawFeedItem {
    /// Creates an item with a title and date, the two required fields.
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            date: Some(date.into()),
            ..Self::default()
        }
    }

    /// Builder method to set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder method to set the Hebrew label.
    pub fn with_hebrew(mut self, hebrew: impl Into<String>) -> Self {
        self.hebrew = Some(hebrew.into());
        self
    }

    /// Builder method to set the memo.
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Returns the title if it is present and not blank.
    pub fn effective_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Converts the item into a [`HolidayEvent`].
    ///
    /// # Errors
    ///
    /// Fails if the title is missing or blank, or if the date is missing or
    /// is not a calendar date.
    pub fn to_holiday(&self) -> Result<HolidayEvent, RecordError> {
        let title = self.effective_title().ok_or(RecordError::MissingTitle)?;
        let raw_date = self.date.as_deref().ok_or_else(|| RecordError::MissingDate {
            title: title.to_string(),
        })?;
        let date = parse_day(raw_date).ok_or_else(|| RecordError::InvalidDate {
            title: title.to_string(),
            value: raw_date.to_string(),
        })?;

        Ok(HolidayEvent {
            title: title.to_string(),
            date,
            hebrew_label: self.hebrew.clone(),
            category: self.category.clone(),
            memo: self.memo.clone(),
            link: self.link.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn converts_complete_item() {
        let item = RawFeedItem {
            link: Some("https://www.hebcal.com/holidays/purim-2025".to_string()),
            ..RawFeedItem::new("Purim", "2025-03-14")
                .with_category("holiday")
                .with_hebrew("פורים")
                .with_memo("Celebration of Jewish deliverance")
        };

        let holiday = item.to_holiday().unwrap();
        assert_eq!(holiday.title, "Purim");
        assert_eq!(holiday.date, date(2025, 3, 14));
        assert_eq!(holiday.hebrew_label.as_deref(), Some("פורים"));
        assert_eq!(holiday.category.as_deref(), Some("holiday"));
        assert!(holiday.memo.is_some());
        assert!(holiday.link.is_some());
    }

    #[test]
    fn timed_item_uses_written_date() {
        let item = RawFeedItem::new("Candle lighting: 19:05", "2025-03-14T19:05:00-04:00");
        assert_eq!(item.to_holiday().unwrap().date, date(2025, 3, 14));
    }

    #[test]
    fn missing_title() {
        let item = RawFeedItem {
            date: Some("2025-03-14".to_string()),
            ..RawFeedItem::default()
        };
        assert_eq!(item.to_holiday(), Err(RecordError::MissingTitle));

        let blank = RawFeedItem::new("  ", "2025-03-14");
        assert_eq!(blank.to_holiday(), Err(RecordError::MissingTitle));
    }

    #[test]
    fn missing_date() {
        let item = RawFeedItem {
            title: Some("Purim".to_string()),
            ..RawFeedItem::default()
        };
        assert_eq!(
            item.to_holiday(),
            Err(RecordError::MissingDate {
                title: "Purim".to_string()
            })
        );
    }

    #[test]
    fn invalid_date() {
        let item = RawFeedItem::new("Purim", "14 Adar");
        assert_eq!(
            item.to_holiday(),
            Err(RecordError::InvalidDate {
                title: "Purim".to_string(),
                value: "14 Adar".to_string()
            })
        );
    }

    #[test]
    fn deserializes_with_unknown_fields() {
        let json = r#"{
            "title": "Purim",
            "date": "2025-03-14",
            "hdate": "14 Adar 5785",
            "category": "holiday",
            "subcat": "minor",
            "hebrew": "פורים",
            "yomtov": false
        }"#;
        let item: RawFeedItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title.as_deref(), Some("Purim"));
        assert_eq!(item.category.as_deref(), Some("holiday"));
        assert!(item.memo.is_none());

        let reencoded = serde_json::to_string(&item).unwrap();
        assert!(!reencoded.contains("subcat"));
        assert!(!reencoded.contains("hdate"));
    }

    #[test]
    fn deserializes_empty_object() {
        let item: RawFeedItem = serde_json::from_str("{}").unwrap();
        assert_eq!(item, RawFeedItem::default());
    }
}
