//! Core types for waitkit.
//!
//! Pure types with no IO and no async: how a condition reports readiness,
//! the timing of a wait, and the error raised when a wait runs out of time.

mod error;
mod options;
mod readiness;

pub use error::TimeoutError;
pub use options::PollOptions;
pub use readiness::{IntoReadiness, Readiness};
