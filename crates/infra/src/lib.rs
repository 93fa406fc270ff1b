//! # SLA Infra
//!
//! Infrastructure layer for the SLA engine: loading the administrator's
//! configuration (work schedule, holidays, priority targets) from the
//! environment or from config files.

pub mod config;

// Re-export commonly used items
pub use config::loader::{load, load_from_env, load_from_file};
