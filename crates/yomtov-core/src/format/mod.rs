//! Output formatting for holiday lists.
//!
//! Two output formats are supported:
//! - **TTY**: one text card per holiday, for terminals
//! - **JSON**: machine-readable output for other front ends
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use yomtov_core::format::OutputFormatter;
//! use yomtov_core::{annotate, normalize, HolidayEvent};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 13).unwrap();
//! let feed = vec![HolidayEvent::new("Purim", NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())];
//! let holidays = annotate(&normalize(&feed, None), today);
//!
//! let formatter = OutputFormatter::with_defaults();
//! let cards = formatter.format_tty(&holidays);
//! assert!(cards[0].text.contains("Tomorrow"));
//! ```

use std::borrow::Cow;
use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::event::NormalizedEvent;
use crate::relative::Distance;

/// Date layout used on cards, e.g. "Friday, March 14, 2025".
pub const DEFAULT_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// The output format for holiday display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Tty,
    /// Machine-readable JSON output.
    Json,
}

/// Where a holiday stands relative to the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayStatus {
    /// Already behind the reference day.
    Passed,
    /// On the reference day.
    Today,
    /// Still ahead.
    Upcoming,
}

impl HolidayStatus {
    /// Classifies a distance.
    pub fn from_distance(distance: &Distance) -> Self {
        match distance {
            Distance::Passed => Self::Passed,
            Distance::Today => Self::Today,
            _ => Self::Upcoming,
        }
    }
}

/// Configuration options for output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Maximum length for holiday titles (truncated with ellipsis).
    pub max_title_length: Option<usize>,
    /// strftime-style layout for the date line.
    pub date_format: String,
    /// Whether to show the Hebrew label line.
    pub show_hebrew: bool,
    /// Whether to show the memo line.
    pub show_memo: bool,
    /// Whether to link titles (OSC8) in TTY output.
    pub hyperlinks: bool,
    /// Whether to hide holidays that are already behind the reference day.
    pub skip_passed: bool,
    /// Maximum number of holidays to output.
    pub limit: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_title_length: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            show_hebrew: true,
            show_memo: false,
            hyperlinks: true,
            skip_passed: false,
            limit: None,
        }
    }
}

/// JSON output format for machine consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// List of formatted holidays.
    pub holidays: Vec<JsonHoliday>,
    /// The first holiday that has not passed yet, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_holiday: Option<JsonHoliday>,
    /// Number of holidays returned.
    pub count: usize,
    /// Place the feed was generated for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl JsonOutput {
    /// Builder method to set the feed location.
    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }
}

/// A single holiday in JSON format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonHoliday {
    /// Holiday title (may be truncated).
    pub title: String,
    /// Date in ISO 8601 format.
    pub date: String,
    /// Date formatted for display.
    pub date_display: String,
    /// Relative distance label ("Today", "In 3 days", ...).
    pub distance_label: String,
    /// Structured distance.
    pub distance: Distance,
    /// Status class.
    pub status: HolidayStatus,
    /// Hebrew label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hebrew: Option<String>,
    /// Feed category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// Link to more information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A formatted holiday card with metadata.
#[derive(Debug, Clone)]
pub struct FormattedHoliday {
    /// The card text, one line per field.
    pub text: String,
    /// The status class.
    pub status: HolidayStatus,
    /// The underlying holiday.
    pub holiday: NormalizedEvent,
}

/// Output formatter for holiday lists.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    options: FormatOptions,
}

impl OutputFormatter {
    /// Creates a new OutputFormatter with the given options.
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Creates a new OutputFormatter with default options.
    pub fn with_defaults() -> Self {
        Self::new(FormatOptions::default())
    }

    /// Returns the formatting options.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Formats holidays as terminal cards.
    pub fn format_tty(&self, holidays: &[NormalizedEvent]) -> Vec<FormattedHoliday> {
        self.select(holidays)
            .into_iter()
            .map(|h| self.format_card(h))
            .collect()
    }

    /// Renders all cards separated by blank lines, or `empty_text` if none remain.
    pub fn render_tty(&self, holidays: &[NormalizedEvent], empty_text: &str) -> String {
        let cards = self.format_tty(holidays);
        if cards.is_empty() {
            return empty_text.to_string();
        }
        cards
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Formats holidays as JSON output.
    pub fn format_json(&self, holidays: &[NormalizedEvent]) -> JsonOutput {
        let selected = self.select(holidays);
        let json_holidays: Vec<JsonHoliday> =
            selected.iter().map(|h| self.to_json_holiday(h)).collect();

        let next_holiday = selected
            .iter()
            .find(|h| !h.is_passed())
            .map(|h| self.to_json_holiday(h));

        JsonOutput {
            count: json_holidays.len(),
            holidays: json_holidays,
            next_holiday,
            location: None,
        }
    }

    /// Applies `skip_passed` and `limit`.
    fn select<'a>(&self, holidays: &'a [NormalizedEvent]) -> Vec<&'a NormalizedEvent> {
        let visible = holidays
            .iter()
            .filter(|h| !(self.options.skip_passed && h.is_passed()));
        match self.options.limit {
            Some(limit) => visible.take(limit).collect(),
            None => visible.collect(),
        }
    }

    fn format_card(&self, holiday: &NormalizedEvent) -> FormattedHoliday {
        let event = &holiday.event;
        let mut lines = Vec::with_capacity(4);

        lines.push(self.format_title(holiday));
        lines.push(format!(
            "{} - {}",
            self.format_date(holiday),
            holiday.distance_label
        ));
        if self.options.show_hebrew
            && let Some(ref hebrew) = event.hebrew_label
        {
            lines.push(hebrew.clone());
        }
        if self.options.show_memo
            && let Some(ref memo) = event.memo
        {
            lines.push(memo.clone());
        }

        FormattedHoliday {
            text: lines.join("\n"),
            status: HolidayStatus::from_distance(&holiday.distance),
            holiday: holiday.clone(),
        }
    }

    /// Formats the date line; unknown strftime specifiers fall back to ISO dates.
    fn format_date(&self, holiday: &NormalizedEvent) -> String {
        let mut out = String::new();
        if write!(out, "{}", holiday.date().format(&self.options.date_format)).is_err() {
            tracing::debug!(format = %self.options.date_format, "invalid date format");
            return holiday.date().format("%Y-%m-%d").to_string();
        }
        out
    }

    /// Formats the title, linked when hyperlinks are enabled and a link exists.
    fn format_title(&self, holiday: &NormalizedEvent) -> String {
        let title = self.truncate_title(holiday.title());
        match holiday.event.link {
            Some(ref url) if self.options.hyperlinks => make_hyperlink(url, &title),
            _ => title.into_owned(),
        }
    }

    fn truncate_title<'a>(&self, title: &'a str) -> Cow<'a, str> {
        match self.options.max_title_length {
            Some(max) => ellipsis(title, max),
            None => Cow::Borrowed(title),
        }
    }

    fn to_json_holiday(&self, holiday: &NormalizedEvent) -> JsonHoliday {
        let event = &holiday.event;
        JsonHoliday {
            title: self.truncate_title(&event.title).into_owned(),
            date: event.date.format("%Y-%m-%d").to_string(),
            date_display: self.format_date(holiday),
            distance_label: holiday.distance_label.clone(),
            distance: holiday.distance,
            status: HolidayStatus::from_distance(&holiday.distance),
            hebrew: event.hebrew_label.clone(),
            category: event.category.clone(),
            memo: event.memo.clone(),
            link: event.link.clone(),
        }
    }
}

/// Returns true if chrono understands every specifier in `format`.
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Truncates a string with ellipsis if it exceeds the given length.
pub fn ellipsis(s: &str, max_len: usize) -> Cow<'_, str> {
    if max_len == 0 {
        return Cow::Borrowed("");
    }

    if s.chars().count() <= max_len {
        return Cow::Borrowed(s);
    }

    // Too short for "...": hard cut.
    if max_len <= 3 {
        return Cow::Owned(s.chars().take(max_len).collect());
    }

    let truncated: String = s.chars().take(max_len - 3).collect();
    Cow::Owned(format!("{}...", truncated))
}

/// Creates an OSC8 hyperlink for terminal output.
pub fn make_hyperlink(url: &str, label: &str) -> String {
    // OSC8 hyperlink format: \e]8;;URL\e\\LABEL\e]8;;\e\\
    format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::HolidayEvent;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn purim(today: NaiveDate) -> NormalizedEvent {
        let event = HolidayEvent::new("Purim", date(2025, 3, 14))
            .with_hebrew_label("פורים")
            .with_category("holiday")
            .with_memo("Celebration of Jewish deliverance")
            .with_link("https://www.hebcal.com/holidays/purim-2025");
        NormalizedEvent::from_event(&event, today)
    }

    fn plain(title: &str, d: NaiveDate, today: NaiveDate) -> NormalizedEvent {
        NormalizedEvent::from_event(&HolidayEvent::new(title, d), today)
    }

    mod ellipsis_fn {
        use super::*;

        #[test]
        fn short_string_unchanged() {
            assert_eq!(ellipsis("Purim", 10), "Purim");
        }

        #[test]
        fn long_string_truncated() {
            assert_eq!(ellipsis("Shabbat Mevarchim Chodesh", 10), "Shabbat...");
        }

        #[test]
        fn counts_characters_not_bytes() {
            assert_eq!(ellipsis("פורים", 5), "פורים");
        }

        #[test]
        fn zero_length() {
            assert_eq!(ellipsis("Purim", 0), "");
        }

        #[test]
        fn tiny_limits_never_exceed_max() {
            assert_eq!(ellipsis("Purim", 1), "P");
            assert_eq!(ellipsis("Purim", 3), "Pur");
            assert_eq!(ellipsis("Purim", 4), "P...");
            for max in 0..8 {
                assert!(ellipsis("Rosh Chodesh Nisan", max).chars().count() <= max);
            }
        }
    }

    mod hyperlink {
        use super::*;

        #[test]
        fn creates_osc8_link() {
            let link = make_hyperlink("https://example.com", "Click");
            assert!(link.contains("https://example.com"));
            assert!(link.contains("Click"));
            assert!(link.starts_with("\x1b]8;;"));
        }
    }

    mod status {
        use super::*;

        #[test]
        fn from_distance() {
            assert_eq!(
                HolidayStatus::from_distance(&Distance::Passed),
                HolidayStatus::Passed
            );
            assert_eq!(
                HolidayStatus::from_distance(&Distance::Today),
                HolidayStatus::Today
            );
            assert_eq!(
                HolidayStatus::from_distance(&Distance::Tomorrow),
                HolidayStatus::Upcoming
            );
            assert_eq!(
                HolidayStatus::from_distance(&Distance::Months { months: 1, days: 0 }),
                HolidayStatus::Upcoming
            );
        }

        #[test]
        fn serializes_snake_case() {
            let json = serde_json::to_string(&HolidayStatus::Upcoming).unwrap();
            assert_eq!(json, r#""upcoming""#);
        }
    }

    mod formatter {
        use super::*;

        #[test]
        fn card_lines() {
            let mut opts = FormatOptions::default();
            opts.hyperlinks = false;
            let formatter = OutputFormatter::new(opts);

            let cards = formatter.format_tty(&[purim(date(2025, 3, 13))]);
            assert_eq!(cards.len(), 1);
            let lines: Vec<_> = cards[0].text.lines().collect();
            assert_eq!(
                lines,
                vec!["Purim", "Friday, March 14, 2025 - Tomorrow", "פורים"]
            );
            assert_eq!(cards[0].status, HolidayStatus::Upcoming);
        }

        #[test]
        fn memo_and_hebrew_toggles() {
            let mut opts = FormatOptions::default();
            opts.hyperlinks = false;
            opts.show_hebrew = false;
            opts.show_memo = true;
            let formatter = OutputFormatter::new(opts);

            let cards = formatter.format_tty(&[purim(date(2025, 3, 14))]);
            let lines: Vec<_> = cards[0].text.lines().collect();
            assert_eq!(lines[2], "Celebration of Jewish deliverance");
            assert!(!cards[0].text.contains("פורים"));
            assert_eq!(cards[0].status, HolidayStatus::Today);
        }

        #[test]
        fn hyperlinked_title() {
            let formatter = OutputFormatter::with_defaults();
            let cards = formatter.format_tty(&[purim(date(2025, 3, 1))]);
            let title = cards[0].text.lines().next().unwrap();
            assert_eq!(
                title,
                make_hyperlink("https://www.hebcal.com/holidays/purim-2025", "Purim")
            );
        }

        #[test]
        fn custom_date_format() {
            let mut opts = FormatOptions::default();
            opts.date_format = "%d/%m/%Y".to_string();
            let formatter = OutputFormatter::new(opts);

            let today = date(2025, 3, 1);
            let cards = formatter.format_tty(&[plain("Purim", date(2025, 3, 14), today)]);
            assert!(cards[0].text.contains("14/03/2025 - In 13 days"));
        }

        #[test]
        fn skip_passed_and_limit() {
            let today = date(2025, 3, 15);
            let holidays = vec![
                plain("Purim", date(2025, 3, 14), today),
                plain("Shushan Purim", date(2025, 3, 15), today),
                plain("Rosh Chodesh Nisan", date(2025, 3, 30), today),
                plain("Pesach I", date(2025, 4, 13), today),
            ];

            let mut opts = FormatOptions::default();
            opts.skip_passed = true;
            opts.limit = Some(2);
            let formatter = OutputFormatter::new(opts);

            let cards = formatter.format_tty(&holidays);
            let titles: Vec<_> = cards.iter().map(|c| c.holiday.title()).collect();
            assert_eq!(titles, vec!["Shushan Purim", "Rosh Chodesh Nisan"]);
        }

        #[test]
        fn render_empty() {
            let formatter = OutputFormatter::with_defaults();
            assert_eq!(formatter.render_tty(&[], "No holidays"), "No holidays");
        }

        #[test]
        fn truncates_titles() {
            let mut opts = FormatOptions::default();
            opts.max_title_length = Some(10);
            let formatter = OutputFormatter::new(opts);

            assert_eq!(formatter.truncate_title("Purim").as_ref(), "Purim");
            assert_eq!(
                formatter.truncate_title("Rosh Chodesh Nisan").as_ref(),
                "Rosh Ch..."
            );
        }

        #[test]
        fn json_basic() {
            let today = date(2025, 3, 15);
            let holidays = vec![
                plain("Purim", date(2025, 3, 14), today),
                purim(date(2025, 3, 1)),
            ];
            let formatter = OutputFormatter::with_defaults();

            let output = formatter.format_json(&holidays);
            assert_eq!(output.count, 2);
            assert_eq!(output.holidays[0].status, HolidayStatus::Passed);

            let next = output.next_holiday.expect("one upcoming holiday");
            assert_eq!(next.title, "Purim");
            assert_eq!(next.date, "2025-03-14");
            assert_eq!(next.distance_label, "In 13 days");
            assert_eq!(next.hebrew.as_deref(), Some("פורים"));
        }

        #[test]
        fn json_skips_missing_fields() {
            let today = date(2025, 3, 1);
            let formatter = OutputFormatter::with_defaults();
            let output = formatter.format_json(&[plain("Purim", date(2025, 3, 14), today)]);
            let json = serde_json::to_string(&output).unwrap();

            assert!(!json.contains("hebrew"));
            assert!(!json.contains("memo"));
            assert!(!json.contains("link"));
            assert!(json.contains(r#""status":"upcoming""#));
        }

        #[test]
        fn json_without_upcoming() {
            let today = date(2025, 4, 1);
            let formatter = OutputFormatter::with_defaults();
            let output = formatter.format_json(&[plain("Purim", date(2025, 3, 14), today)]);
            assert!(output.next_holiday.is_none());
            let json = serde_json::to_string(&output).unwrap();
            assert!(!json.contains("next_holiday"));
        }

        #[test]
        fn json_location() {
            let today = date(2025, 3, 1);
            let formatter = OutputFormatter::with_defaults();
            let holidays = [plain("Purim", date(2025, 3, 14), today)];

            let json = serde_json::to_value(formatter.format_json(&holidays)).unwrap();
            assert!(json.get("location").is_none());

            let output = formatter
                .format_json(&holidays)
                .with_location(Some("Jerusalem".to_string()));
            let json = serde_json::to_value(output).unwrap();
            assert_eq!(json["location"], "Jerusalem");
        }
    }

    mod date_format {
        use super::*;

        #[test]
        fn validity() {
            assert!(is_valid_date_format(DEFAULT_DATE_FORMAT));
            assert!(is_valid_date_format("%d/%m/%Y"));
            assert!(is_valid_date_format("no specifiers"));
            assert!(!is_valid_date_format("%Q"));
        }

        #[test]
        fn unknown_specifier_falls_back_to_iso() {
            let mut opts = FormatOptions::default();
            opts.hyperlinks = false;
            opts.date_format = "%Q".to_string();
            let formatter = OutputFormatter::new(opts);

            let today = date(2025, 3, 1);
            let cards = formatter.format_tty(&[plain("Purim", date(2025, 3, 14), today)]);
            assert_eq!(cards[0].text, "Purim\n2025-03-14 - In 13 days");

            let output = formatter.format_json(&[plain("Purim", date(2025, 3, 14), today)]);
            assert_eq!(output.holidays[0].date_display, "2025-03-14");
        }
    }

    mod output_format {
        use super::*;

        #[test]
        fn default_is_tty() {
            assert_eq!(OutputFormat::default(), OutputFormat::Tty);
        }

        #[test]
        fn serde_roundtrip() {
            let json = serde_json::to_string(&OutputFormat::Json).unwrap();
            assert_eq!(json, "\"json\"");
            let parsed: OutputFormat = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, OutputFormat::Json);
        }
    }
}
