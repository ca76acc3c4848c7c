//! Logging and error construction shared by the async and blocking pollers.

use std::time::Duration;

use waitkit_types::{PollOptions, TimeoutError};

pub(crate) fn log_ready(description: &str, attempts: u32, elapsed: Duration) {
    tracing::debug!(
        description,
        attempts,
        elapsed_ms = elapsed.as_millis(),
        "Condition ready"
    );
}

pub(crate) fn log_not_ready(description: &str, attempt: u32, elapsed: Duration) {
    tracing::trace!(
        description,
        attempt,
        elapsed_ms = elapsed.as_millis(),
        "Condition not ready"
    );
}

pub(crate) fn timed_out(description: &str, options: PollOptions, attempts: u32) -> TimeoutError {
    let err = TimeoutError::new(description, options.timeout_duration());
    tracing::debug!(
        description,
        timeout_ms = err.timeout_ms(),
        attempts,
        "Gave up waiting for condition"
    );
    err
}
