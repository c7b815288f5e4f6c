//! Command-line interface definition.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// yomtov - Upcoming Jewish holidays at a glance
#[derive(Debug, Parser)]
#[command(name = "yomtov")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "YOMTOV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Feed document to read ("-" for stdin)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Reference day for the "time until" labels (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    // --- Filter flags ---
    /// Only show holidays of this feed category (e.g., "holiday")
    #[arg(long)]
    pub category: Option<String>,

    /// Show every category, ignoring the configured one
    #[arg(long, conflicts_with = "category")]
    pub all_categories: bool,

    /// Keep candle-lighting and havdalah entries
    #[arg(long)]
    pub keep_candle_lighting: bool,

    /// Exclude holidays matching this title pattern (can be repeated)
    #[arg(long, action = clap::ArgAction::Append)]
    pub exclude_title: Vec<String>,

    /// Hide holidays that have already passed
    #[arg(long)]
    pub skip_passed: bool,

    /// Maximum number of holidays to display
    #[arg(long)]
    pub limit: Option<usize>,

    // --- Display options ---
    /// Maximum title length (truncated with ellipsis)
    #[arg(long)]
    pub max_title_length: Option<usize>,

    /// Show the memo line on each card
    #[arg(long)]
    pub show_memo: bool,

    /// Hide the Hebrew label line
    #[arg(long)]
    pub no_hebrew: bool,

    /// Text to show when there are no holidays
    #[arg(long)]
    pub no_holiday_text: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Returns the output format based on CLI flags.
    pub fn output_format(&self) -> yomtov_core::OutputFormat {
        if self.json {
            yomtov_core::OutputFormat::Json
        } else {
            yomtov_core::OutputFormat::Tty
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}
