//! Duration and date-time display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A duration in seconds shown as `MM:SS`.
///
/// Minutes are not wrapped into hours, so a 65 minute session reads `65:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinutesSeconds(pub u32);

impl fmt::Display for MinutesSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Render `seconds` as `MM:SS`.
pub fn format_duration(seconds: u32) -> String {
    MinutesSeconds(seconds).to_string()
}

/// Parse `MM:SS` back into seconds.
pub fn parse_duration(s: &str) -> Option<u32> {
    let (minutes, seconds) = s.trim().split_once(':')?;
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    minutes.checked_mul(60)?.checked_add(seconds)
}

/// A timestamp formatted in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_seconds() {
        assert_eq!(format_duration(1500), "25:00");
        assert_eq!(format_duration(90), "01:30");
        assert_eq!(format_duration(3900), "65:00");
        assert_eq!(format_duration(0), "00:00");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("25:00"), Some(1500));
        assert_eq!(parse_duration("01:30"), Some(90));
        assert_eq!(parse_duration("1:75"), None);
        assert_eq!(parse_duration("abc"), None);
    }
}
