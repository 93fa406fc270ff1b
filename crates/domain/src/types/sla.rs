//! SLA priorities, response targets, and status labels.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::SlaError;

/// Record priority, the key into the response-target table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        };
        f.write_str(label)
    }
}

impl FromStr for Priority {
    type Err = SlaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            other => Err(SlaError::InvalidSchedule(format!("unknown priority: {other}"))),
        }
    }
}

/// Mapping from priority to required first-response working seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityTargets {
    targets: BTreeMap<Priority, u64>,
}

impl PriorityTargets {
    /// Create an empty target table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target for one priority, builder style.
    #[must_use]
    pub fn with_target(mut self, priority: Priority, seconds: u64) -> Self {
        self.targets.insert(priority, seconds);
        self
    }

    /// Required working seconds for a priority, if configured.
    pub fn target_for(&self, priority: Priority) -> Option<u64> {
        self.targets.get(&priority).copied()
    }

    /// True when no targets are configured.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl FromIterator<(Priority, u64)> for PriorityTargets {
    fn from_iter<I: IntoIterator<Item = (Priority, u64)>>(iter: I) -> Self {
        Self { targets: iter.into_iter().collect() }
    }
}

/// SLA status label for a tracked record.
///
/// Serialized with the human-facing labels the original application stored
/// on records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlaStatus {
    /// First response was recorded on or before the due-by instant.
    Fulfilled,
    /// No response yet, but the due-by instant has not passed.
    #[serde(rename = "First Response Due")]
    FirstResponseDue,
    /// Responded late, or not responded and past due.
    Failed,
}

impl fmt::Display for SlaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Fulfilled => "Fulfilled",
            Self::FirstResponseDue => "First Response Due",
            Self::Failed => "Failed",
        };
        f.write_str(label)
    }
}

/// One full SLA evaluation: deadline, status, and budget left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlaAssessment {
    /// The computed first-response deadline.
    pub due_by: NaiveDateTime,
    /// Status at evaluation time.
    pub status: SlaStatus,
    /// Working seconds still available before `due_by`; `None` unless the
    /// status is [`SlaStatus::FirstResponseDue`].
    pub remaining_seconds: Option<u64>,
}
