//! Day/hour/minute/second breakdown of a remaining duration

use chrono::Duration;
use std::fmt;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Components of a countdown display. Hours stay in 0-23 and
/// minutes/seconds in 0-59; days carry everything above that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeBreakdown {
    /// Break a remaining duration down by floor division on the
    /// millisecond remainder cascade. Negative durations saturate to
    /// zero, so an expired timer reads 00:00:00:00.
    pub fn from_remaining(remaining: Duration) -> Self {
        let ms = remaining.num_milliseconds().max(0) as u64;

        Self {
            days: ms / MS_PER_DAY,
            hours: (ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

impl fmt::Display for TimeBreakdown {
    /// Every component zero-padded to two digits; days widen as needed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration() {
        let b = TimeBreakdown::from_remaining(Duration::zero());
        assert!(b.is_zero());
    }

    #[test]
    fn test_two_seconds() {
        let b = TimeBreakdown::from_remaining(Duration::milliseconds(2_000));
        assert_eq!((b.days, b.hours, b.minutes, b.seconds), (0, 0, 0, 2));
    }

    #[test]
    fn test_sub_second_remainder_floors() {
        let b = TimeBreakdown::from_remaining(Duration::milliseconds(2_999));
        assert_eq!(b.seconds, 2);
    }

    #[test]
    fn test_full_cascade() {
        // 1 day, 2 hours, 3 minutes, 4 seconds
        let ms = 86_400_000 + 2 * 3_600_000 + 3 * 60_000 + 4_000;
        let b = TimeBreakdown::from_remaining(Duration::milliseconds(ms));
        assert_eq!((b.days, b.hours, b.minutes, b.seconds), (1, 2, 3, 4));
    }

    #[test]
    fn test_components_stay_in_natural_range() {
        // 100 days minus one second
        let ms = 100 * 86_400_000 - 1_000;
        let b = TimeBreakdown::from_remaining(Duration::milliseconds(ms));
        assert_eq!((b.days, b.hours, b.minutes, b.seconds), (99, 23, 59, 59));
    }

    #[test]
    fn test_negative_saturates_to_zero() {
        let b = TimeBreakdown::from_remaining(Duration::milliseconds(-5_000));
        assert!(b.is_zero());
    }

    #[test]
    fn test_display_zero_pads() {
        let b = TimeBreakdown {
            days: 1,
            hours: 2,
            minutes: 3,
            seconds: 4,
        };
        assert_eq!(b.to_string(), "01:02:03:04");

        let wide = TimeBreakdown {
            days: 365,
            hours: 0,
            minutes: 0,
            seconds: 0,
        };
        assert_eq!(wide.to_string(), "365:00:00:00");
    }
}
