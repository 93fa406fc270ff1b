//! # SLA Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The business-hours calculator (elapsed working time, due-by walks)
//! - The SLA tracker service that turns calculator results into status
//!   labels
//!
//! ## Architecture Principles
//! - Only depends on `sla-domain` and `sla-common`
//! - No database, HTTP, or platform code
//! - "Now" enters via the clock trait, never ambient
//! - Pure, testable business logic

pub mod sla;

// Re-export specific items to avoid ambiguity
pub use sla::business_hours::{compute_due_by, compute_elapsed};
pub use sla::service::SlaTracker;
