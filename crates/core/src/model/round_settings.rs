use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::DEFAULT_ROUND_SECS;

/// Validated configuration for a timed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSettings {
    duration: Duration,
    start_paused: bool,
}

/// Raw round configuration, as read from flags, env vars or a settings screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundSettingsDraft {
    pub duration_secs: i64,
    pub start_paused: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundSettingsError {
    #[error("round duration must be positive, got {millis}ms")]
    InvalidDuration { millis: i64 },
    #[error("round duration of {0}s is too long")]
    DurationTooLong(i64),
}

impl Default for RoundSettingsDraft {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_ROUND_SECS,
            start_paused: false,
        }
    }
}

impl RoundSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft into settings a round can start with.
    ///
    /// # Errors
    ///
    /// Returns `RoundSettingsError::InvalidDuration` if the duration is zero or negative,
    /// `RoundSettingsError::DurationTooLong` if it does not fit a `Duration`.
    pub fn validate(self) -> Result<RoundSettings, RoundSettingsError> {
        if self.duration_secs <= 0 {
            return Err(RoundSettingsError::InvalidDuration {
                millis: self.duration_secs.saturating_mul(1000),
            });
        }
        let duration = Duration::try_seconds(self.duration_secs)
            .ok_or(RoundSettingsError::DurationTooLong(self.duration_secs))?;

        Ok(RoundSettings {
            duration,
            start_paused: self.start_paused,
        })
    }
}

impl RoundSettings {
    /// # Errors
    ///
    /// Returns `RoundSettingsError::InvalidDuration` if `duration` is not positive.
    pub fn new(duration: Duration, start_paused: bool) -> Result<Self, RoundSettingsError> {
        if duration <= Duration::zero() {
            return Err(RoundSettingsError::InvalidDuration {
                millis: duration.num_milliseconds(),
            });
        }
        Ok(Self {
            duration,
            start_paused,
        })
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn start_paused(&self) -> bool {
        self.start_paused
    }

    #[must_use]
    pub fn with_start_paused(mut self, start_paused: bool) -> Self {
        self.start_paused = start_paused;
        self
    }
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            duration: Duration::seconds(DEFAULT_ROUND_SECS),
            start_paused: false,
        }
    }
}
