use std::time::Duration;

use thiserror::Error;

/// A condition was not ready before its deadline.
///
/// The message names the awaited condition and the timeout so a failing test
/// report is diagnosable on its own. The timeout is rendered in whole
/// milliseconds, so sub-millisecond parts are truncated (1.5ms shows as
/// `1ms`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Timeout waiting for {description} after {}ms", .timeout.as_millis())]
pub struct TimeoutError {
    description: String,
    timeout: Duration,
}

impl TimeoutError {
    pub fn new(description: impl Into<String>, timeout: Duration) -> Self {
        Self {
            description: description.into(),
            timeout,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn timeout_ms(&self) -> u128 {
        self.timeout.as_millis()
    }
}
