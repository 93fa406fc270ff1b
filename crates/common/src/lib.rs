//! Shared utilities for the SLA engine crates.
//!
//! Currently this is time plumbing: the [`time::Clock`] abstraction that
//! lets callers inject a fixed "now" in tests, and human-readable
//! formatting for working-seconds counts.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod time;

// Re-export commonly used items
pub use time::clock::{Clock, MockClock, SystemClock};
pub use time::format::format_working_seconds;
