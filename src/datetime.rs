//! Locale-aware date formatting for the form's date rows.
//!
//! Date rows render their value in medium-date / short-time style (e.g.
//! "Sep 5, 2016 10:30 AM"), localized month names included. The locale comes
//! from the config override or the usual environment variables; terminals
//! give no notification when the user changes their locale, so [`DateFormatter::refresh`]
//! re-resolves it on demand and the immediate-mode renderer repaints every
//! date string from the stored values on the next frame.

use chrono::{DateTime, Local, Locale, NaiveDateTime};

use crate::config::Config;
use crate::error::FormatError;
use crate::log;

/// Medium date style, e.g. "Sep 5, 2016".
const MEDIUM_DATE: &str = "%b %-d, %Y";
/// Short time style, e.g. "10:30 AM".
const SHORT_TIME: &str = "%-I:%M %p";

/// Fixed format the done action re-parses the display string with,
/// e.g. "09/05/16, 10:30 AM".
pub const DONE_FORMAT: &str = "%m/%d/%y, %-I:%M %p";

/// Formats the date rows' values for display.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    locale: Locale,
    date_format: String,
    time_format: String,
}

impl DateFormatter {
    pub fn new(config: &Config) -> Self {
        Self {
            locale: resolve_locale(config.locale.as_deref()),
            date_format: config
                .date_format
                .clone()
                .unwrap_or_else(|| MEDIUM_DATE.to_string()),
            time_format: config
                .time_format
                .clone()
                .unwrap_or_else(|| SHORT_TIME.to_string()),
        }
    }

    /// Format a date row value in medium/short style.
    pub fn format(&self, date: &DateTime<Local>) -> String {
        format!(
            "{} {}",
            date.format_localized(&self.date_format, self.locale),
            date.format_localized(&self.time_format, self.locale)
        )
    }

    /// Format for the done action's log line.
    pub fn format_done(&self, date: &DateTime<Local>) -> String {
        date.format(DONE_FORMAT).to_string()
    }

    /// Re-resolve the locale from the environment (and config override).
    pub fn refresh(&mut self, config: &Config) {
        self.locale = resolve_locale(config.locale.as_deref());
    }
}

/// Re-parse a done-format display string.
///
/// The displayed text is generated by this program, so a parse failure is a
/// defect rather than a runtime condition; it is reported as a typed error
/// and covered by tests instead of being unwrapped.
pub fn parse_done(input: &str) -> Result<NaiveDateTime, FormatError> {
    NaiveDateTime::parse_from_str(input, DONE_FORMAT).map_err(|source| FormatError::Parse {
        input: input.to_string(),
        source,
    })
}

/// Look up a chrono locale by its unix name, e.g. "en_US" or "de_DE.UTF-8".
pub fn locale_from_name(name: &str) -> Result<Locale, FormatError> {
    // Strip encoding and modifier suffixes: "de_DE.UTF-8@euro" -> "de_DE".
    let base = name.split(['.', '@']).next().unwrap_or(name);

    Locale::try_from(base).map_err(|_| FormatError::UnknownLocale(name.to_string()))
}

/// Resolve the formatting locale: config override first, then the standard
/// environment variables, then en_US.
fn resolve_locale(config_override: Option<&str>) -> Locale {
    let candidates = config_override
        .map(str::to_string)
        .into_iter()
        .chain(["LC_ALL", "LC_TIME", "LANG"].into_iter().filter_map(|var| {
            std::env::var(var)
                .ok()
                .filter(|v| !v.is_empty() && v != "C" && v != "POSIX")
        }));

    for name in candidates {
        match locale_from_name(&name) {
            Ok(locale) => return locale,
            Err(e) => log::log(&format!("{}, falling back", e)),
        }
    }

    Locale::en_US
}
