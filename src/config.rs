//! Configuration file support for schedit.
//!
//! Configuration is loaded from `~/.config/schedit/config.toml`; the
//! `--config <path>` CLI flag overrides the location. Missing file or keys
//! fall back to defaults; a malformed file is reported and ignored.
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/schedit/config.toml
//! locale = "de_DE"
//! picker_height = 6
//!
//! [labels]
//! heading = "Pick a row to change its date:"
//! start = "Departure"
//! end = "Return"
//! others = ["Flight", "Hotel", "Car"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::rows::ITEM_COUNT;

/// Default height of the expanded picker row, in terminal lines.
const DEFAULT_PICKER_HEIGHT: u16 = 5;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Locale override for date formatting, e.g. "en_US" or "fr_FR".
    /// Defaults to whatever the environment advertises.
    pub locale: Option<String>,

    /// strftime override for the date part (default: medium style "%b %e, %Y")
    pub date_format: Option<String>,

    /// strftime override for the time part (default: short style "%-I:%M %p")
    pub time_format: Option<String>,

    /// Height of the expanded picker row in terminal lines
    pub picker_height: Option<u16>,

    /// Row label overrides
    #[serde(default)]
    pub labels: Labels,
}

/// Custom labels for the form rows.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Labels {
    /// The heading row at the top of the form
    pub heading: Option<String>,

    /// Title of the start-date row
    pub start: Option<String>,

    /// Title of the end-date row
    pub end: Option<String>,

    /// Titles of the three plain rows between heading and dates.
    /// Extra entries are ignored; missing ones keep their defaults.
    pub others: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if the file doesn't exist or can't be
    /// parsed.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("schedit")
            .join("config.toml")
    }

    /// Height of the expanded picker row. Anything under 3 lines cannot fit
    /// the wheel plus its border, so the floor is 3.
    pub fn picker_height(&self) -> u16 {
        self.picker_height.unwrap_or(DEFAULT_PICKER_HEIGHT).max(3)
    }

    /// The six row titles in logical order, with config overrides applied.
    pub fn item_titles(&self) -> [String; ITEM_COUNT] {
        let mut titles = [
            "Select a date row to edit it:".to_string(),
            "(other item 1)".to_string(),
            "(other item 2)".to_string(),
            "(other item 3)".to_string(),
            "Start Date".to_string(),
            "End Date".to_string(),
        ];

        if let Some(heading) = &self.labels.heading {
            titles[0] = heading.clone();
        }
        if let Some(others) = &self.labels.others {
            for (slot, label) in titles[1..=3].iter_mut().zip(others) {
                *slot = label.clone();
            }
        }
        if let Some(start) = &self.labels.start {
            titles[4] = start.clone();
        }
        if let Some(end) = &self.labels.end {
            titles[5] = end.clone();
        }

        titles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.locale.is_none());
        assert!(config.date_format.is_none());
        assert_eq!(config.picker_height(), DEFAULT_PICKER_HEIGHT);
        assert_eq!(config.item_titles()[4], "Start Date");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            locale = "de_DE"
            picker_height = 8

            [labels]
            start = "Departure"
            others = ["Flight", "Hotel"]
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.locale.as_deref(), Some("de_DE"));
        assert_eq!(config.picker_height(), 8);

        let titles = config.item_titles();
        assert_eq!(titles[1], "Flight");
        assert_eq!(titles[2], "Hotel");
        assert_eq!(titles[3], "(other item 3)"); // missing entry keeps default
        assert_eq!(titles[4], "Departure");
        assert_eq!(titles[5], "End Date");
    }

    #[test]
    fn test_picker_height_floor() {
        let config: Config = toml::from_str("picker_height = 1").unwrap();
        assert_eq!(config.picker_height(), 3);
    }
}
