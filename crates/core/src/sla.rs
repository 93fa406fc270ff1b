//! Service-level-agreement tracking.
//!
//! [`business_hours`] holds the calendar arithmetic; [`service`] wraps it
//! with priority targets and an injected clock to produce status labels.

pub mod business_hours;
pub mod service;

pub use business_hours::{compute_due_by, compute_elapsed};
pub use service::SlaTracker;
