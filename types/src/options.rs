//! Timing knobs for a single wait.

use std::time::Duration;

/// Timeout and poll interval for one wait.
///
/// Defaults to a 5 second timeout polled every 10 milliseconds. A zero
/// interval is raised to [`PollOptions::MIN_INTERVAL`]: the poller must sleep
/// between evaluations for a paused clock to advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    timeout: Duration,
    interval: Duration,
}

impl PollOptions {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(10);
    pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Self::DEFAULT_TIMEOUT,
            interval: Self::DEFAULT_INTERVAL,
        }
    }

    #[must_use]
    pub const fn from_millis(timeout_ms: u64, interval_ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms),
            interval: clamp_interval(Duration::from_millis(interval_ms)),
        }
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn interval(mut self, interval: Duration) -> Self {
        self.interval = clamp_interval(interval);
        self
    }

    /// Multiply the timeout, leaving the interval alone.
    ///
    /// Non-finite or non-positive factors, and products that overflow a
    /// `Duration`, leave the options unchanged.
    #[must_use]
    pub fn scale_timeout(mut self, factor: f64) -> Self {
        if factor.is_finite()
            && factor > 0.0
            && let Ok(scaled) = Duration::try_from_secs_f64(self.timeout.as_secs_f64() * factor)
        {
            self.timeout = scaled;
        }
        self
    }

    #[must_use]
    pub const fn timeout_duration(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub const fn interval_duration(&self) -> Duration {
        self.interval
    }
}

const fn clamp_interval(interval: Duration) -> Duration {
    if interval.is_zero() {
        PollOptions::MIN_INTERVAL
    } else {
        interval
    }
}

impl Default for PollOptions {
    fn default() -> Self {
        Self::new()
    }
}
