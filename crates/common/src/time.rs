//! Time utilities and abstractions
//!
//! - **[`clock`]**: Real and mock wall-clock time for testing
//! - **[`format`]**: Human-readable formatting of working-seconds counts

pub mod clock;
pub mod format;

pub use clock::{Clock, MockClock, SystemClock};
pub use format::format_working_seconds;
