//! Report timestamp formatting.
//!
//! Report dates arrive as opaque strings. They are parsed leniently and rendered in the
//! dashboard's `en-US` style, for example `Jan 2, 2024, 10:00 AM`. Anything that cannot be
//! read as a calendar date degrades to [`INVALID_DATE`].

use crate::TypesError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::str::FromStr;

/// Marker rendered in place of an unparseable report date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Display format: short month, numeric day and year, 2-digit 12-hour clock.
const DISPLAY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Naive date-time layouts tried after RFC 3339. `%.f` also accepts a missing fraction.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Time zone used when rendering timestamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayZone {
    /// Render in UTC. Deterministic across hosts.
    #[default]
    Utc,
    /// Render in the host's local time zone.
    Local,
}

impl DisplayZone {
    /// Interpret a zone-less date-time in this zone.
    fn anchor(self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            DisplayZone::Utc => Some(naive.and_utc()),
            DisplayZone::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl FromStr for DisplayZone {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(DisplayZone::Utc),
            "local" => Ok(DisplayZone::Local),
            other => Err(TypesError::UnknownDisplayZone(other.to_string())),
        }
    }
}

/// Timestamp parsing and display.
///
/// Zero-sized namespace; all methods are associated functions.
pub struct DisplayTimestamp;

impl DisplayTimestamp {
    /// Parse a report date into an instant.
    ///
    /// Accepted inputs, in order:
    /// - RFC 3339 with an offset (`2024-01-02T10:00:00Z`, `2024-01-02T15:30:00+05:30`)
    /// - RFC 2822 (`Tue, 02 Jan 2024 10:00:00 GMT`)
    /// - a naive date-time, interpreted in `zone`
    /// - a bare date (`2024-01-02`), interpreted as UTC midnight
    pub fn parse(value: &str, zone: DisplayZone) -> Option<DateTime<Utc>> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(dt.with_timezone(&Utc));
        }

        if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
            return Some(dt.with_timezone(&Utc));
        }

        for layout in NAIVE_LAYOUTS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(value, layout) {
                return zone.anchor(naive);
            }
        }

        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    /// Format a report date for display. Never fails.
    pub fn format(value: &str, zone: DisplayZone) -> String {
        match Self::parse(value, zone) {
            Some(instant) => Self::format_instant(instant, zone),
            None => INVALID_DATE.to_string(),
        }
    }

    /// Format an already-parsed instant in the given zone.
    pub fn format_instant(instant: DateTime<Utc>, zone: DisplayZone) -> String {
        match zone {
            DisplayZone::Utc => instant.format(DISPLAY_FORMAT).to_string(),
            DisplayZone::Local => instant
                .with_timezone(&Local)
                .format(DISPLAY_FORMAT)
                .to_string(),
        }
    }

    /// Whether a report date would render as something other than [`INVALID_DATE`].
    pub fn is_valid(value: &str, zone: DisplayZone) -> bool {
        Self::parse(value, zone).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_in_utc() {
        assert_eq!(
            DisplayTimestamp::format("2024-01-02T10:00:00Z", DisplayZone::Utc),
            "Jan 2, 2024, 10:00 AM"
        );
        assert_eq!(
            DisplayTimestamp::format("2024-11-20T21:05:09.123Z", DisplayZone::Utc),
            "Nov 20, 2024, 09:05 PM"
        );
    }

    #[test]
    fn converts_offsets_to_display_zone() {
        assert_eq!(
            DisplayTimestamp::format("2024-07-15T21:05:00+05:30", DisplayZone::Utc),
            "Jul 15, 2024, 03:35 PM"
        );
    }

    #[test]
    fn accepts_naive_and_date_only_inputs() {
        assert_eq!(
            DisplayTimestamp::format("2024-03-09T08:15:00", DisplayZone::Utc),
            "Mar 9, 2024, 08:15 AM"
        );
        assert_eq!(
            DisplayTimestamp::format("2024-03-09 18:15", DisplayZone::Utc),
            "Mar 9, 2024, 06:15 PM"
        );
        assert_eq!(
            DisplayTimestamp::format("2024-01-01", DisplayZone::Utc),
            "Jan 1, 2024, 12:00 AM"
        );
    }

    #[test]
    fn accepts_rfc2822_inputs() {
        assert_eq!(
            DisplayTimestamp::format("Tue, 02 Jan 2024 10:00:00 GMT", DisplayZone::Utc),
            "Jan 2, 2024, 10:00 AM"
        );
        assert_eq!(
            DisplayTimestamp::format("Tue, 2 Jan 2024 15:30:00 +0530", DisplayZone::Utc),
            "Jan 2, 2024, 10:00 AM"
        );
    }

    #[test]
    fn invalid_input_degrades_to_marker() {
        assert_eq!(
            DisplayTimestamp::format("not-a-date", DisplayZone::Utc),
            INVALID_DATE
        );
        assert_eq!(DisplayTimestamp::format("", DisplayZone::Local), INVALID_DATE);
        assert_eq!(
            DisplayTimestamp::format("2024-02-30T10:00:00Z", DisplayZone::Utc),
            INVALID_DATE
        );
        assert!(!DisplayTimestamp::is_valid("yesterday", DisplayZone::Utc));
    }

    #[test]
    fn local_zone_renders_something_for_valid_input() {
        let rendered = DisplayTimestamp::format("2024-01-02T10:00:00Z", DisplayZone::Local);
        assert_ne!(rendered, INVALID_DATE);
        assert!(rendered.contains("2024"));
    }

    #[test]
    fn parses_zone_names() {
        assert_eq!("UTC".parse::<DisplayZone>().expect("utc"), DisplayZone::Utc);
        assert_eq!(" local ".parse::<DisplayZone>().expect("local"), DisplayZone::Local);
        let err = "mars".parse::<DisplayZone>().expect_err("should reject");
        assert!(matches!(err, TypesError::UnknownDisplayZone(name) if name == "mars"));
    }
}
