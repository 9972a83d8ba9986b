use std::fmt;

/// A second count broken into clock digits for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockParts {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockParts {
    pub fn from_secs(total_secs: u32) -> Self {
        Self {
            hours: total_secs / 3_600,
            minutes: (total_secs % 3_600) / 60,
            seconds: total_secs % 60,
        }
    }
}

impl fmt::Display for ClockParts {
    /// `H:MM:SS` with the hours field shown only when non-zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 {
            write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        } else {
            write!(f, "{:02}:{:02}", self.minutes, self.seconds)
        }
    }
}

/// Format a remaining-seconds value for the display and the document title.
pub fn format_clock(total_secs: u32) -> String {
    ClockParts::from_secs(total_secs).to_string()
}

/// Coerce a duration input field to a number. Empty, malformed, and
/// negative input all silently become 0; there is no error to surface.
pub fn parse_field(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_hides_zero_hours() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn clock_shows_hours_when_present() {
        assert_eq!(format_clock(3_600), "1:00:00");
        assert_eq!(format_clock(3_661), "1:01:01");
        assert_eq!(format_clock(36_000), "10:00:00");
    }

    #[test]
    fn clock_parts_split_correctly() {
        assert_eq!(
            ClockParts::from_secs(3_725),
            ClockParts { hours: 1, minutes: 2, seconds: 5 }
        );
    }

    #[test]
    fn malformed_fields_coerce_to_zero() {
        assert_eq!(parse_field("25"), 25);
        assert_eq!(parse_field(" 7 "), 7);
        assert_eq!(parse_field(""), 0);
        assert_eq!(parse_field("abc"), 0);
        assert_eq!(parse_field("-3"), 0);
        assert_eq!(parse_field("1.5"), 0);
    }
}
