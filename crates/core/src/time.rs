use chrono::Duration;

/// Round length used when nothing else is configured.
pub const DEFAULT_ROUND_SECS: i64 = 100;

/// Subtracts `elapsed` from `remaining`, never going below zero.
#[must_use]
pub fn saturating_remaining(remaining: Duration, elapsed: Duration) -> Duration {
    remaining
        .checked_sub(&elapsed)
        .map_or(Duration::zero(), |left| left.max(Duration::zero()))
}

/// Converts a measured `std::time::Duration` into a round duration.
///
/// Values chrono cannot represent saturate to `Duration::MAX`.
#[must_use]
pub fn from_std_saturating(elapsed: std::time::Duration) -> Duration {
    Duration::from_std(elapsed).unwrap_or(Duration::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_clamps_at_zero() {
        let left = saturating_remaining(Duration::seconds(60), Duration::seconds(70));
        assert_eq!(left, Duration::zero());
    }

    #[test]
    fn remaining_subtracts() {
        let left = saturating_remaining(Duration::seconds(60), Duration::milliseconds(1_500));
        assert_eq!(left, Duration::milliseconds(58_500));
    }

    #[test]
    fn remaining_survives_overflow() {
        let left = saturating_remaining(Duration::seconds(5), Duration::MAX);
        assert_eq!(left, Duration::zero());
    }

    #[test]
    fn std_durations_convert() {
        let converted = from_std_saturating(std::time::Duration::from_millis(250));
        assert_eq!(converted, Duration::milliseconds(250));
    }
}
