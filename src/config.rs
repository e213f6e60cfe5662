//! Configuration file support for wheelpick.
//!
//! Configuration is loaded from `~/.config/wheelpick/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/wheelpick/config.toml
//! default_picker = "time"
//! reminder_time = "07:30"
//! year = 2025
//!
//! margin = 3
//! visible_slots = 5
//! snap_duration_ms = 200
//! item_height = 10.0
//!
//! # Offset units per mouse-wheel notch, and the pause that ends a wheel gesture
//! wheel_step = 4.0
//! wheel_quiet_ms = 120
//! ```

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveTime;
use serde::Deserialize;

use crate::picker::{ColumnSpec, DEFAULT_MARGIN, SNAP_DURATION};

/// Largest margin every wrapping column accepts; the hour column holds 12.
const MAX_MARGIN: usize = 11;

/// Which picker the app opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PickerKind {
    #[default]
    Time,
    Month,
    Year,
}

impl PickerKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "time" => Some(PickerKind::Time),
            "month" => Some(PickerKind::Month),
            "year" => Some(PickerKind::Year),
            _ => None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Picker shown on startup
    pub default_picker: Option<PickerKind>,

    /// Initial reminder time, `HH:MM` in 24-hour form
    pub reminder_time: Option<String>,

    /// Year used for day counts in the yearly picker
    pub year: Option<i32>,

    /// Items duplicated onto each end of a wrapping column
    pub margin: Option<usize>,

    /// Rows visible per column
    pub visible_slots: Option<usize>,

    /// Length of the snap animation
    pub snap_duration_ms: Option<u64>,

    /// Offset units per item
    pub item_height: Option<f64>,

    /// Offset units per mouse-wheel notch
    pub wheel_step: Option<f64>,

    /// Quiet period that ends a wheel gesture
    pub wheel_quiet_ms: Option<u64>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
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
            .join("wheelpick")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(
        mut self,
        picker: Option<PickerKind>,
        reminder_time: Option<String>,
        year: Option<i32>,
    ) -> Self {
        if picker.is_some() {
            self.default_picker = picker;
        }
        if reminder_time.is_some() {
            self.reminder_time = reminder_time;
        }
        if year.is_some() {
            self.year = year;
        }
        self
    }

    pub fn default_picker(&self) -> PickerKind {
        self.default_picker.unwrap_or_default()
    }

    /// Initial reminder time, falling back to `WHEELPICK_TIME` and then 09:00.
    pub fn reminder_time(&self) -> NaiveTime {
        self.reminder_time
            .clone()
            .or_else(|| std::env::var("WHEELPICK_TIME").ok())
            .and_then(|s| parse_time(&s))
            .unwrap_or_else(|| NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default())
    }

    /// Column layout, with out-of-range values replaced by defaults.
    pub fn column_spec(&self) -> ColumnSpec {
        let defaults = ColumnSpec::default();
        ColumnSpec {
            item_height: self
                .item_height
                .filter(|h| h.is_finite() && *h > 0.0)
                .unwrap_or(defaults.item_height),
            visible_slots: self
                .visible_slots
                .filter(|n| *n > 0)
                .unwrap_or(defaults.visible_slots),
            margin: self
                .margin
                .filter(|m| (1..=MAX_MARGIN).contains(m))
                .unwrap_or(DEFAULT_MARGIN),
            snap_duration: self
                .snap_duration_ms
                .map(Duration::from_millis)
                .unwrap_or(SNAP_DURATION),
        }
    }

    pub fn wheel_step(&self) -> f64 {
        self.wheel_step
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(4.0)
    }

    pub fn wheel_quiet(&self) -> Duration {
        Duration::from_millis(self.wheel_quiet_ms.unwrap_or(120))
    }
}

/// Parse `HH:MM` in 24-hour form.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.default_picker.is_none());
        assert_eq!(config.default_picker(), PickerKind::Time);
        assert_eq!(config.column_spec(), ColumnSpec::default());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            default_picker = "year"
            reminder_time = "07:30"
            year = 2024
            margin = 2
            visible_slots = 7
            snap_duration_ms = 150
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.default_picker(), PickerKind::Year);
        assert_eq!(config.reminder_time(), NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        assert_eq!(config.year, Some(2024));
        let spec = config.column_spec();
        assert_eq!(spec.margin, 2);
        assert_eq!(spec.visible_slots, 7);
        assert_eq!(spec.snap_duration, Duration::from_millis(150));
    }

    #[test]
    fn test_invalid_layout_falls_back() {
        let config: Config = toml::from_str("item_height = -1.0\nvisible_slots = 0").unwrap();
        let spec = config.column_spec();
        assert_eq!(spec.item_height, 10.0);
        assert_eq!(spec.visible_slots, 5);
    }

    #[test]
    fn test_oversized_margin_falls_back() {
        let config: Config = toml::from_str("margin = 12").unwrap();
        assert_eq!(config.column_spec().margin, DEFAULT_MARGIN);

        let config: Config = toml::from_str("margin = 0").unwrap();
        assert_eq!(config.column_spec().margin, DEFAULT_MARGIN);

        let config: Config = toml::from_str("margin = 11").unwrap();
        assert_eq!(config.column_spec().margin, 11);
    }

    #[test]
    fn test_overrides_win() {
        let config = Config {
            year: Some(2020),
            ..Config::default()
        }
        .with_overrides(Some(PickerKind::Month), Some("18:45".into()), None);
        assert_eq!(config.default_picker(), PickerKind::Month);
        assert_eq!(parse_time("18:45"), NaiveTime::from_hms_opt(18, 45, 0));
        assert_eq!(config.year, Some(2020));
    }
}
