use chrono::Duration;

/// Formats a countdown as `M:SS`, rounding partial seconds up.
///
/// A clock showing `0:00` has really run out.
#[must_use]
pub fn format_remaining(remaining: Duration) -> String {
    let millis = remaining.num_milliseconds().max(0);
    let secs = millis.saturating_add(999) / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_remaining(Duration::seconds(100)), "1:40");
        assert_eq!(format_remaining(Duration::seconds(9)), "0:09");
        assert_eq!(format_remaining(Duration::seconds(600)), "10:00");
    }

    #[test]
    fn rounds_partial_seconds_up() {
        assert_eq!(format_remaining(Duration::milliseconds(58_001)), "0:59");
        assert_eq!(format_remaining(Duration::milliseconds(1)), "0:01");
    }

    #[test]
    fn longest_duration_formats_without_overflow() {
        let secs = i64::MAX / 1000;
        let expected = format!("{}:{:02}", secs / 60, secs % 60);
        assert_eq!(format_remaining(Duration::MAX), expected);
    }

    #[test]
    fn zero_and_negative_show_zero() {
        assert_eq!(format_remaining(Duration::zero()), "0:00");
        assert_eq!(format_remaining(Duration::seconds(-3)), "0:00");
    }
}
