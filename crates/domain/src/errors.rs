//! Error types used throughout the SLA engine

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::sla::Priority;

/// Main error type for SLA calculations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum SlaError {
    /// A schedule entry is malformed: inverted window, duplicate weekday,
    /// or an unparseable configuration value.
    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    /// An elapsed-time query where the start instant is after the end.
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDateTime, end: NaiveDateTime },

    /// A due-by walk cannot terminate: the schedule has no working hours,
    /// every candidate day is a holiday, or the calendar overflowed.
    #[error("no working time available: {0}")]
    NoWorkingTime(String),

    /// No response target is configured for the requested priority.
    #[error("no response target configured for priority {0}")]
    MissingTarget(Priority),

    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for SLA operations
pub type Result<T> = std::result::Result<T, SlaError>;
