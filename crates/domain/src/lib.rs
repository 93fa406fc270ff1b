//! # SLA Domain
//!
//! Business domain types and models for the SLA engine.
//!
//! This crate contains:
//! - Domain value types (WorkSchedule, HolidayList, PriorityTargets, ...)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::{ScheduleEntry, SlaConfig};
pub use errors::{Result, SlaError};
pub use types::schedule::{HolidayList, WorkSchedule, WorkingWindow};
pub use types::sla::{Priority, PriorityTargets, SlaAssessment, SlaStatus};
