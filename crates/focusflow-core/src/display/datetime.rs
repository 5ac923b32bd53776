//! Date, time and duration display utilities.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

/// A `Timestamp` shown as `YYYY-MM-DD HH:MM TZ`.
///
/// Formats in the system time zone unless built with [`LocalDateTime::in_zone`],
/// which lets output agree with a tracker configured for another zone.
pub struct LocalDateTime<'a> {
    timestamp: &'a Timestamp,
    time_zone: TimeZone,
}

impl<'a> LocalDateTime<'a> {
    pub fn new(timestamp: &'a Timestamp) -> Self {
        Self::in_zone(timestamp, TimeZone::system())
    }

    pub fn in_zone(timestamp: &'a Timestamp, time_zone: TimeZone) -> Self {
        Self {
            timestamp,
            time_zone,
        }
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.timestamp
                .to_zoned(self.time_zone.clone())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}

/// A calendar date with its weekday, e.g. `Mon 2024-03-11`.
pub struct ShortDate<'a>(pub &'a Date);

impl fmt::Display for ShortDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a %Y-%m-%d"))
    }
}

/// A number of minutes shown as `5m` or `1h 5m`.
///
/// # Examples
///
/// ```rust
/// use focusflow_core::display::FocusMinutes;
///
/// assert_eq!(FocusMinutes(45).to_string(), "45m");
/// assert_eq!(FocusMinutes(65).to_string(), "1h 5m");
/// assert_eq!(FocusMinutes(120).to_string(), "2h 0m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusMinutes(pub u64);

impl fmt::Display for FocusMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 60;
        let minutes = self.0 % 60;
        if hours > 0 {
            write!(f, "{hours}h {minutes}m")
        } else {
            write!(f, "{minutes}m")
        }
    }
}
