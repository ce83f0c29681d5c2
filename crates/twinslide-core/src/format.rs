//! Text formatting and lenient parsing of slider values.
//!
//! Three display modes are supported:
//! - **Number**: fixed decimal places, `%.0f` by default
//! - **Time**: minutes since midnight shown as zero-padded `HH:MM`
//! - **Duration**: minutes shown as `2h 5m`, zero components omitted

use chrono::{Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Minutes in an hour.
const MINUTES_PER_HOUR: i64 = 60;

/// Display mode of the paired text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueMode {
    #[default]
    Number,
    Time,
    Duration,
}

/// Unit suffixes for duration text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationUnits {
    pub hour: String,
    pub minute: String,
}

impl Default for DurationUnits {
    fn default() -> Self {
        Self {
            hour: "h".to_string(),
            minute: "m".to_string(),
        }
    }
}

/// Formatter chosen once from a [`ValueMode`] and never changed.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueFormat {
    Number { precision: usize },
    Time,
    Duration(DurationUnits),
}

impl ValueFormat {
    /// Build the formatter for a mode.
    pub fn new(mode: ValueMode, precision: usize, units: DurationUnits) -> Self {
        match mode {
            ValueMode::Number => ValueFormat::Number { precision },
            ValueMode::Time => ValueFormat::Time,
            ValueMode::Duration => ValueFormat::Duration(units),
        }
    }

    pub fn mode(&self) -> ValueMode {
        match self {
            ValueFormat::Number { .. } => ValueMode::Number,
            ValueFormat::Time => ValueMode::Time,
            ValueFormat::Duration(_) => ValueMode::Duration,
        }
    }

    /// Format a domain value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Number { precision } => format_fixed(value, *precision),
            ValueFormat::Time => format_time(value),
            ValueFormat::Duration(units) => format_duration(value, units),
        }
    }

    /// Parse user text into a domain value. Never fails: unreadable text
    /// falls back to 0, or to the current time of day in time mode.
    pub fn parse(&self, text: &str) -> f64 {
        match self {
            ValueFormat::Number { .. } => parse_number(text).unwrap_or_else(|| {
                log::warn!("Unreadable number {:?}, using 0", text);
                0.0
            }),
            ValueFormat::Time => parse_time_or(text, current_minutes()),
            ValueFormat::Duration(units) => parse_duration(text, units).unwrap_or_else(|| {
                log::warn!("Unreadable duration {:?}, using 0", text);
                0.0
            }),
        }
    }
}

impl Default for ValueFormat {
    fn default() -> Self {
        ValueFormat::Number { precision: 0 }
    }
}

/// Format with a fixed number of decimal places (`%.Nf`).
pub fn format_fixed(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Format minutes since midnight as `HH:MM`, rounded to the nearest minute.
/// Negative values show as midnight.
pub fn format_time(minutes: f64) -> String {
    let total = minutes.max(0.0).round() as i64;
    format!(
        "{:02}:{:02}",
        total / MINUTES_PER_HOUR,
        total % MINUTES_PER_HOUR
    )
}

/// Format minutes as hours and minutes, omitting zero parts. Rounded to the
/// nearest minute.
///
/// `125` gives `"2h 5m"`, `60` gives `"1h"`, `45` gives `"45m"` and `0`
/// gives an empty string.
pub fn format_duration(minutes: f64, units: &DurationUnits) -> String {
    let total = minutes.round() as i64;
    let hours = total / MINUTES_PER_HOUR;
    let mins = total % MINUTES_PER_HOUR;
    match (hours > 0, mins > 0) {
        (true, true) => format!("{}{} {}{}", hours, units.hour, mins, units.minute),
        (true, false) => format!("{}{}", hours, units.hour),
        (false, true) => format!("{}{}", mins, units.minute),
        (false, false) => String::new(),
    }
}

/// Parse a plain decimal number.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Parse `HH:MM` into minutes since midnight.
pub fn parse_time(text: &str) -> Option<f64> {
    let time = NaiveTime::parse_from_str(text.trim(), "%H:%M").ok()?;
    Some(f64::from(time.hour() * 60 + time.minute()))
}

/// Parse `HH:MM`, or fall back to `fallback` minutes.
pub fn parse_time_or(text: &str, fallback: f64) -> f64 {
    parse_time(text).unwrap_or_else(|| {
        log::warn!("Unreadable time {:?}, using {}", text, format_time(fallback));
        fallback
    })
}

/// Current local time of day in minutes since midnight.
pub fn current_minutes() -> f64 {
    let now = Local::now();
    f64::from(now.hour() * 60 + now.minute())
}

/// Parse duration text in the format produced by [`format_duration`].
///
/// Text is read as runs of a number followed by an optional unit suffix.
/// Whitespace around numbers and suffixes is ignored, so suffixes that carry
/// their own spacing (`" sa"`) read back. A bare number is read as minutes.
/// Empty text is zero.
pub fn parse_duration(text: &str, units: &DurationUnits) -> Option<f64> {
    // Longest suffix first so one unit that prefixes the other still matches.
    let mut suffixes = [
        (units.hour.trim(), MINUTES_PER_HOUR as f64),
        (units.minute.trim(), 1.0),
    ];
    suffixes.sort_by_key(|(suffix, _)| std::cmp::Reverse(suffix.len()));

    let mut total = 0.0;
    let mut rest = text.trim_start();
    while !rest.is_empty() {
        let split = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let number: f64 = rest[..split].parse().ok()?;
        rest = rest[split..].trim_start();

        let (scale, after) = suffixes
            .iter()
            .filter(|(suffix, _)| !suffix.is_empty())
            .find_map(|(suffix, scale)| rest.strip_prefix(suffix).map(|after| (*scale, after)))
            .unwrap_or((1.0, rest));
        total += number * scale;
        rest = after.trim_start();
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed_rounds() {
        assert_eq!(format_fixed(19.6, 0), "20");
        assert_eq!(format_fixed(19.4, 0), "19");
        assert_eq!(format_fixed(3.14159, 2), "3.14");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(90.0), "01:30");
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(1439.0), "23:59");
        assert_eq!(format_time(605.9), "10:06");
        assert_eq!(format_time(89.999999), "01:30");
        assert_eq!(format_time(-5.0), "00:00");
    }

    #[test]
    fn test_format_duration() {
        let units = DurationUnits::default();
        assert_eq!(format_duration(125.0, &units), "2h 5m");
        assert_eq!(format_duration(60.0, &units), "1h");
        assert_eq!(format_duration(45.0, &units), "45m");
        assert_eq!(format_duration(0.0, &units), "");
        assert_eq!(format_duration(59.4, &units), "59m");
        assert_eq!(format_duration(59.6, &units), "1h");
    }

    #[test]
    fn test_format_duration_custom_units() {
        let units = DurationUnits {
            hour: " sa".to_string(),
            minute: " dk".to_string(),
        };
        assert_eq!(format_duration(125.0, &units), "2 sa 5 dk");
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("01:30"), Some(90.0));
        assert_eq!(parse_time(" 23:59 "), Some(1439.0));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time(":"), None);
        assert_eq!(parse_time_or("garbage", 42.0), 42.0);
    }

    #[test]
    fn test_parse_time_falls_back_to_now() {
        let minutes = ValueFormat::Time.parse("not a time");
        assert!((0.0..1440.0).contains(&minutes));
    }

    #[test]
    fn test_parse_duration() {
        let units = DurationUnits::default();
        assert_eq!(parse_duration("2h 5m", &units), Some(125.0));
        assert_eq!(parse_duration("1h", &units), Some(60.0));
        assert_eq!(parse_duration("45m", &units), Some(45.0));
        assert_eq!(parse_duration("90", &units), Some(90.0));
        assert_eq!(parse_duration("", &units), Some(0.0));
        assert_eq!(parse_duration("2x", &units), None);
        assert_eq!(parse_duration("h", &units), None);
        assert_eq!(parse_duration("2h5m", &units), Some(125.0));
        assert_eq!(parse_duration(" 2 h  5 m ", &units), Some(125.0));
    }

    #[test]
    fn test_duration_text_reads_back() {
        let unit_sets = [
            DurationUnits::default(),
            DurationUnits {
                hour: " sa".to_string(),
                minute: " dk".to_string(),
            },
            DurationUnits {
                hour: " hr".to_string(),
                minute: " min".to_string(),
            },
            DurationUnits {
                hour: "m".to_string(),
                minute: "min".to_string(),
            },
        ];
        for units in &unit_sets {
            for minutes in [0.0, 5.0, 45.0, 60.0, 125.0, 600.0, 1439.0] {
                let text = format_duration(minutes, units);
                assert_eq!(
                    parse_duration(&text, units),
                    Some(minutes),
                    "{:?} with {:?}",
                    text,
                    units
                );
            }
        }
    }

    #[test]
    fn test_parse_number_lenient() {
        let format = ValueFormat::default();
        assert_eq!(format.parse(" 42 "), 42.0);
        assert_eq!(format.parse("4.5"), 4.5);
        assert_eq!(format.parse("abc"), 0.0);
        assert_eq!(format.parse(""), 0.0);
    }

    #[test]
    fn test_mode_round_trip() {
        for mode in [ValueMode::Number, ValueMode::Time, ValueMode::Duration] {
            let format = ValueFormat::new(mode, 0, DurationUnits::default());
            assert_eq!(format.mode(), mode);
        }
    }
}
