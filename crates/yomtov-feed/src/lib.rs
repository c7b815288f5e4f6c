//! Decoding of Hebcal-style holiday feeds.
//!
//! This crate turns an already-downloaded feed document into
//! [`yomtov_core::HolidayEvent`]s. Fetching the document is left to the caller.
//!
//! # Example
//!
//! ```
//! use yomtov_feed::{FeedOptions, load_holidays};
//!
//! let json = r#"{"items": [{"title": "Purim", "date": "2025-03-14", "category": "holiday"}]}"#;
//! let holidays = load_holidays(json, &FeedOptions::default()).unwrap();
//! assert_eq!(holidays[0].title, "Purim");
//! ```

pub mod decode;
pub mod error;
pub mod raw_item;

pub use decode::{Feed, FeedLocation, FeedOptions, collect_holidays, decode_feed, load_holidays};
pub use error::{FeedError, FeedResult, RecordError};
pub use raw_item::RawFeedItem;
