//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/yomtov/config.toml` by default:
//!
//! ```toml
//! [feed]
//! path = "~/holidays.json"   # a leading `~/` is the home directory
//! category = "holiday"
//! exclude_titles = ["erev"]
//!
//! [display]
//! skip_passed = true
//! limit = 10
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use yomtov_core::{DEFAULT_DATE_FORMAT, FormatOptions, is_valid_date_format};
use yomtov_feed::FeedOptions;

use crate::cli::Cli;

/// Configuration for the yomtov client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Debug mode.
    pub debug: bool,

    /// Feed settings.
    pub feed: FeedSettings,

    /// Display settings.
    pub display: DisplaySettings,
}

/// Where the feed comes from and which entries to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Feed document to read when `--input` is not given.
    pub path: Option<PathBuf>,

    /// Only keep holidays of this category. Unset keeps every category.
    pub category: Option<String>,

    /// Drop candle-lighting and havdalah entries.
    pub skip_candle_lighting: bool,

    /// Drop holidays whose title contains any of these (case-insensitive).
    pub exclude_titles: Vec<String>,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            path: None,
            category: None,
            skip_candle_lighting: true,
            exclude_titles: Vec::new(),
        }
    }
}

/// Display settings for output formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Maximum title length (truncated with ellipsis).
    pub max_title_length: Option<usize>,

    /// strftime-style layout of the date line.
    pub date_format: String,

    /// Show the Hebrew label line.
    pub show_hebrew: bool,

    /// Show the memo line.
    pub show_memo: bool,

    /// Link titles in the terminal (OSC8).
    pub hyperlinks: bool,

    /// Show the feed's location above the list (and in JSON).
    pub show_location: bool,

    /// Hide holidays that have already passed.
    pub skip_passed: bool,

    /// Maximum number of holidays to display.
    pub limit: Option<usize>,

    /// Text to show when there are no holidays.
    pub no_holiday_text: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_title_length: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            show_hebrew: true,
            show_memo: false,
            hyperlinks: true,
            show_location: true,
            skip_passed: false,
            limit: None,
            no_holiday_text: "No upcoming holidays".to_string(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default path.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("yomtov")
    }

    /// Checks values that parse fine but cannot work.
    pub fn validate(&self) -> Result<(), String> {
        if self.display.date_format.trim().is_empty() {
            return Err("display.date_format must not be empty".to_string());
        }
        if !is_valid_date_format(&self.display.date_format) {
            return Err(format!(
                "display.date_format {:?} contains an unknown strftime specifier",
                self.display.date_format
            ));
        }
        if self.display.limit == Some(0) {
            return Err("display.limit must be at least 1".to_string());
        }
        if let Some(ref category) = self.feed.category
            && category.trim().is_empty()
        {
            return Err("feed.category must not be empty; remove it to show every category".to_string());
        }
        if self.feed.exclude_titles.iter().any(|p| p.trim().is_empty()) {
            return Err("feed.exclude_titles must not contain empty patterns".to_string());
        }
        Ok(())
    }

    /// Overlays command-line flags on top of the file settings.
    pub fn merge_cli(&mut self, cli: &Cli) {
        self.debug |= cli.debug;

        if let Some(ref input) = cli.input {
            self.feed.path = Some(input.clone());
        }
        if cli.all_categories {
            self.feed.category = None;
        } else if let Some(ref category) = cli.category {
            self.feed.category = Some(category.clone());
        }
        if cli.keep_candle_lighting {
            self.feed.skip_candle_lighting = false;
        }
        self.feed
            .exclude_titles
            .extend(cli.exclude_title.iter().cloned());

        if cli.skip_passed {
            self.display.skip_passed = true;
        }
        if cli.limit.is_some() {
            self.display.limit = cli.limit;
        }
        if cli.max_title_length.is_some() {
            self.display.max_title_length = cli.max_title_length;
        }
        if cli.show_memo {
            self.display.show_memo = true;
        }
        if cli.no_hebrew {
            self.display.show_hebrew = false;
        }
        if let Some(ref text) = cli.no_holiday_text {
            self.display.no_holiday_text = text.clone();
        }
    }

    /// The feed path with a leading `~` replaced by the home directory.
    pub fn feed_path(&self) -> Option<PathBuf> {
        self.feed.path.as_deref().map(expand_home)
    }

    /// Builds the feed decoding options.
    pub fn feed_options(&self) -> FeedOptions {
        FeedOptions {
            skip_candle_lighting: self.feed.skip_candle_lighting,
            exclude_titles: self.feed.exclude_titles.clone(),
        }
    }

    /// Builds the output formatting options.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            max_title_length: self.display.max_title_length,
            date_format: self.display.date_format.clone(),
            show_hebrew: self.display.show_hebrew,
            show_memo: self.display.show_memo,
            hyperlinks: self.display.hyperlinks,
            skip_passed: self.display.skip_passed,
            limit: self.display.limit,
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
