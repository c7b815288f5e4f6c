//! Core types: holiday events, normalization, relative time labels, formatting

pub mod event;
pub mod format;
pub mod normalize;
pub mod relative;
pub mod time;
pub mod tracing;

pub use event::{HolidayEvent, NormalizedEvent};
pub use format::{
    DEFAULT_DATE_FORMAT, FormatOptions, FormattedHoliday, HolidayStatus, JsonHoliday, JsonOutput,
    OutputFormat, OutputFormatter, ellipsis, is_valid_date_format, make_hyperlink,
};
pub use normalize::{annotate, dedup_events, normalize, sort_events};
pub use relative::{Distance, format_distance};
pub use time::{parse_day, today_local};
pub use self::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
