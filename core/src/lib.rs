//! Condition polling for tests.
//!
//! Replace fixed sleeps with a wait that returns as soon as a condition is
//! ready and fails with a descriptive [`TimeoutError`] otherwise:
//!
//! ```ignore
//! use waitkit_core::{PollOptions, wait_for, wait_for_with};
//!
//! let job = wait_for(|| queue.pop(), "job to be queued").await?;
//! wait_for_with(|| server.is_listening(), "server", PollOptions::from_millis(200, 5)).await?;
//! ```
//!
//! | Entry point | Check signature |
//! |-------------|-----------------|
//! | [`wait_for`], [`wait_for_with`], [`wait_for_configured`] | `FnMut() -> R` |
//! | [`try_wait_for`] | `FnMut() -> Result<R, E>` |
//! | [`wait_for_async`] | `FnMut() -> impl Future<Output = R>` |
//! | [`try_wait_for_async`] | `FnMut() -> impl Future<Output = Result<R, E>>` |
//! | [`blocking::wait_for`], [`blocking::try_wait_for`] | sync, thread-blocking |
//!
//! `R` is anything implementing [`IntoReadiness`]. Bare scalars use
//! truthiness, so `0`, `""` and `NaN` mean "not ready"; wrap the value in
//! `Some` when it is a legitimate result.

pub mod blocking;
mod outcome;
mod poll;

pub use poll::{
    try_wait_for, try_wait_for_async, wait_for, wait_for_async, wait_for_configured,
    wait_for_with,
};
pub use waitkit_types::{IntoReadiness, PollOptions, Readiness, TimeoutError};
