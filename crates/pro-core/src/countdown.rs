//! Launch countdown arithmetic.

use chrono::{DateTime, TimeZone, Utc};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Remaining time until a target instant, split into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Time left from `now` until `target`. Zero once the target has passed.
    pub fn until<Tz: TimeZone>(target: &DateTime<Tz>, now: DateTime<Utc>) -> Self {
        let remaining = target.with_timezone(&Utc) - now;
        Self::from_seconds(remaining.num_seconds())
    }

    /// Split a number of seconds into days/hours/minutes/seconds.
    pub fn from_seconds(total: i64) -> Self {
        if total <= 0 {
            return Self::default();
        }
        Self {
            days: total / SECS_PER_DAY,
            hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    }

    /// Whether the countdown has finished.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Units with their Spanish banner labels, largest first.
    pub fn units(&self) -> [(i64, &'static str); 4] {
        [
            (self.days, "días"),
            (self.hours, "hrs"),
            (self.minutes, "min"),
            (self.seconds, "seg"),
        ]
    }
}

impl std::fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .units()
            .iter()
            .map(|(value, label)| format!("{} {}", pad2(*value), label))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Zero-pad to two digits (`7` -> `"07"`). Larger values are left as is.
pub fn pad2(value: i64) -> String {
    format!("{:02}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn launch() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2025-04-14T00:00:00-05:00").unwrap()
    }

    #[test]
    fn test_time_left_split() {
        let now = DateTime::parse_from_rfc3339("2025-04-12T22:58:30-05:00")
            .unwrap()
            .with_timezone(&Utc);

        let left = TimeLeft::until(&launch(), now);

        assert_eq!(
            left,
            TimeLeft {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 30
            }
        );
    }

    #[test]
    fn test_time_left_after_launch_is_zero() {
        let now = DateTime::parse_from_rfc3339("2025-05-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let left = TimeLeft::until(&launch(), now);
        assert!(left.is_zero());
    }

    #[test]
    fn test_exact_launch_instant_is_zero() {
        let now = launch().with_timezone(&Utc);
        assert!(TimeLeft::until(&launch(), now).is_zero());
    }

    #[test]
    fn test_from_seconds_boundaries() {
        assert_eq!(TimeLeft::from_seconds(59).seconds, 59);
        assert_eq!(TimeLeft::from_seconds(60).minutes, 1);
        assert_eq!(TimeLeft::from_seconds(3600).hours, 1);
        assert_eq!(TimeLeft::from_seconds(86_400).days, 1);
        assert!(TimeLeft::from_seconds(-5).is_zero());
    }

    #[test]
    fn test_pad2() {
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(42), "42");
        assert_eq!(pad2(365), "365");
    }

    #[test]
    fn test_display() {
        let left = TimeLeft::from_seconds(SECS_PER_DAY * 3 + 5);
        assert_eq!(left.to_string(), "03 días 00 hrs 00 min 05 seg");
    }
}
