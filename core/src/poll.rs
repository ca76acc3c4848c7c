//! Async condition polling on tokio.
//!
//! Every entry point funnels into [`try_wait_for_async`]: evaluate, return the
//! first ready value, otherwise check the deadline and sleep for the interval.
//! Time is read from [`tokio::time::Instant`], so suites running on a paused
//! runtime see virtual time.

use std::future;

use tokio::time::{Instant, sleep};
use waitkit_types::{IntoReadiness, PollOptions, Readiness, TimeoutError};

use crate::outcome::{log_not_ready, log_ready, timed_out};

/// Poll `check` with the default options (5s timeout, 10ms interval).
///
/// See [`IntoReadiness`] for which return values count as ready. Bare `0`,
/// `""` and `NaN` are *not* ready; return `Some(value)` when they are valid.
pub async fn wait_for<F, R>(check: F, description: &str) -> Result<R::Output, TimeoutError>
where
    F: FnMut() -> R,
    R: IntoReadiness,
{
    wait_for_with(check, description, PollOptions::default()).await
}

/// Poll `check` with explicit timing.
pub async fn wait_for_with<F, R>(
    mut check: F,
    description: &str,
    options: PollOptions,
) -> Result<R::Output, TimeoutError>
where
    F: FnMut() -> R,
    R: IntoReadiness,
{
    try_wait_for(|| Ok(check()), description, options).await
}

/// Poll `check` with the options from the discovered waitkit config file.
pub async fn wait_for_configured<F, R>(
    check: F,
    description: &str,
) -> Result<R::Output, TimeoutError>
where
    F: FnMut() -> R,
    R: IntoReadiness,
{
    wait_for_with(check, description, waitkit_config::default_poll_options()).await
}

/// Poll a fallible `check`.
///
/// An `Err` from the check is returned as-is and ends the wait; a timeout is
/// converted into `E` through `From<TimeoutError>`.
pub async fn try_wait_for<F, R, E>(
    mut check: F,
    description: &str,
    options: PollOptions,
) -> Result<R::Output, E>
where
    F: FnMut() -> Result<R, E>,
    R: IntoReadiness,
    E: From<TimeoutError>,
{
    try_wait_for_async(|| future::ready(check()), description, options).await
}

/// Poll a check that is itself async.
///
/// The deadline is only consulted between evaluations; an evaluation that
/// never completes keeps the wait pending.
pub async fn wait_for_async<F, Fut, R>(
    mut check: F,
    description: &str,
    options: PollOptions,
) -> Result<R::Output, TimeoutError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = R>,
    R: IntoReadiness,
{
    try_wait_for_async(
        || {
            let evaluation = check();
            async move { Ok(evaluation.await) }
        },
        description,
        options,
    )
    .await
}

/// Poll a fallible async check.
pub async fn try_wait_for_async<F, Fut, R, E>(
    mut check: F,
    description: &str,
    options: PollOptions,
) -> Result<R::Output, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<R, E>>,
    R: IntoReadiness,
    E: From<TimeoutError>,
{
    let start = Instant::now();
    let mut attempts: u32 = 0;

    loop {
        attempts = attempts.saturating_add(1);
        if let Readiness::Ready(value) = check().await?.into_readiness() {
            log_ready(description, attempts, start.elapsed());
            return Ok(value);
        }

        let elapsed = start.elapsed();
        if elapsed > options.timeout_duration() {
            return Err(timed_out(description, options, attempts).into());
        }
        log_not_ready(description, attempts, elapsed);

        sleep(options.interval_duration()).await;
    }
}
