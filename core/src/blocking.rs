//! Thread-blocking variants for synchronous tests and worker threads.
//!
//! Same semantics as the async pollers, with `std::thread::sleep` between
//! evaluations. Do not call these from inside an async runtime.

use std::thread;
use std::time::Instant;

use waitkit_types::{IntoReadiness, PollOptions, Readiness, TimeoutError};

use crate::outcome::{log_not_ready, log_ready, timed_out};

pub fn wait_for<F, R>(
    mut check: F,
    description: &str,
    options: PollOptions,
) -> Result<R::Output, TimeoutError>
where
    F: FnMut() -> R,
    R: IntoReadiness,
{
    try_wait_for(|| Ok(check()), description, options)
}

/// Blocking counterpart of [`crate::try_wait_for`].
pub fn try_wait_for<F, R, E>(
    mut check: F,
    description: &str,
    options: PollOptions,
) -> Result<R::Output, E>
where
    F: FnMut() -> Result<R, E>,
    R: IntoReadiness,
    E: From<TimeoutError>,
{
    let start = Instant::now();
    let mut attempts: u32 = 0;

    loop {
        attempts = attempts.saturating_add(1);
        if let Readiness::Ready(value) = check()?.into_readiness() {
            log_ready(description, attempts, start.elapsed());
            return Ok(value);
        }

        let elapsed = start.elapsed();
        if elapsed > options.timeout_duration() {
            return Err(timed_out(description, options, attempts).into());
        }
        log_not_ready(description, attempts, elapsed);

        thread::sleep(options.interval_duration());
    }
}
