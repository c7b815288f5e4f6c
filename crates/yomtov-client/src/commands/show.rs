//! The default command: print the holiday list.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use yomtov_core::{OutputFormat, OutputFormatter, annotate, normalize, today_local};
use yomtov_feed::{Feed, collect_holidays, decode_feed};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Reads the feed, normalizes it and prints it to stdout.
pub fn run(config: &ClientConfig, format: OutputFormat, today: Option<NaiveDate>) -> ClientResult<()> {
    let document = read_input(config.feed_path().as_deref())?;
    let today = today.unwrap_or_else(today_local);
    let output = render(&document, config, format, today)?;
    println!("{}", output);
    Ok(())
}

/// Reads the feed document from a file, or from stdin for `None` and `-`.
pub fn read_input(path: Option<&Path>) -> ClientResult<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            tracing::debug!(path = %path.display(), "reading feed file");
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            tracing::debug!("reading feed from stdin");
            let mut document = String::new();
            std::io::stdin().read_to_string(&mut document)?;
            Ok(document)
        }
    }
}

/// Runs the decode, normalize, annotate and format pipeline on a document.
pub fn render(
    document: &str,
    config: &ClientConfig,
    format: OutputFormat,
    today: NaiveDate,
) -> ClientResult<String> {
    let feed = decode_feed(document)?;
    let holidays = collect_holidays(&feed.items, &config.feed_options());
    let normalized = normalize(&holidays, config.feed.category.as_deref());
    let annotated = annotate(&normalized, today);
    tracing::info!(
        decoded = holidays.len(),
        shown = annotated.len(),
        %today,
        "prepared holiday list"
    );

    let location = if config.display.show_location {
        location_name(&feed)
    } else {
        None
    };

    let formatter = OutputFormatter::new(config.format_options());
    match format {
        OutputFormat::Tty => {
            let body = formatter.render_tty(&annotated, &config.display.no_holiday_text);
            Ok(match location {
                Some(place) => format!("{}\n\n{}", place, body),
                None => body,
            })
        }
        OutputFormat::Json => {
            let output = formatter.format_json(&annotated).with_location(location);
            serde_json::to_string_pretty(&output)
                .map_err(|e| ClientError::Output(format!("failed to serialize holidays: {}", e)))
        }
    }
}

/// The place name of the feed, if it has a non-blank one.
fn location_name(feed: &Feed) -> Option<String> {
    feed.location
        .as_ref()
        .and_then(|l| l.title.as_deref())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
