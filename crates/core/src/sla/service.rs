//! SLA tracker service - status decisions around the calculator.
//!
//! The tracker owns the configured schedule, holidays, and priority
//! targets, plus a clock. "Now" only ever enters through the clock so the
//! otherwise non-deterministic status decision is testable with a pinned
//! [`MockClock`](sla_common::time::clock::MockClock).

use std::sync::Arc;

use chrono::NaiveDateTime;
use sla_common::time::clock::{Clock, SystemClock};
use sla_common::time::format::format_working_seconds;
use sla_domain::errors::{Result, SlaError};
use sla_domain::types::schedule::{HolidayList, WorkSchedule};
use sla_domain::types::sla::{Priority, PriorityTargets, SlaAssessment, SlaStatus};
use tracing::debug;

use super::business_hours::{compute_due_by, compute_elapsed};

/// Tracks first-response SLAs against a working-hours calendar.
pub struct SlaTracker {
    schedule: WorkSchedule,
    holidays: HolidayList,
    targets: PriorityTargets,
    clock: Arc<dyn Clock>,
}

impl SlaTracker {
    /// Create a tracker reading the real system clock.
    pub fn new(schedule: WorkSchedule, holidays: HolidayList, targets: PriorityTargets) -> Self {
        Self { schedule, holidays, targets, clock: Arc::new(SystemClock) }
    }

    /// Replace the clock, builder style. Tests pin time with a mock here.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// First-response deadline for a record opened at `opened_at`.
    ///
    /// # Errors
    /// Returns [`SlaError::MissingTarget`] when the priority has no
    /// configured target, or [`SlaError::NoWorkingTime`] from the due-by
    /// walk.
    pub fn response_due_by(
        &self,
        opened_at: NaiveDateTime,
        priority: Priority,
    ) -> Result<NaiveDateTime> {
        let target =
            self.targets.target_for(priority).ok_or(SlaError::MissingTarget(priority))?;
        compute_due_by(opened_at, target, &self.schedule, &self.holidays)
    }

    /// Working seconds between opening and first response.
    ///
    /// # Errors
    /// Returns [`SlaError::InvalidRange`] when `responded_at` precedes
    /// `opened_at`.
    pub fn elapsed_response_seconds(
        &self,
        opened_at: NaiveDateTime,
        responded_at: NaiveDateTime,
    ) -> Result<u64> {
        compute_elapsed(opened_at, responded_at, &self.schedule, &self.holidays)
    }

    /// The three-branch status decision.
    ///
    /// Responded on or before the deadline is `Fulfilled`, responded after
    /// is `Failed`; with no response yet the deadline is compared against
    /// the clock's "now".
    pub fn evaluate(
        &self,
        due_by: NaiveDateTime,
        first_responded_at: Option<NaiveDateTime>,
    ) -> SlaStatus {
        Self::evaluate_at(due_by, first_responded_at, self.clock.now())
    }

    fn evaluate_at(
        due_by: NaiveDateTime,
        first_responded_at: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> SlaStatus {
        match first_responded_at {
            Some(responded_at) if responded_at <= due_by => SlaStatus::Fulfilled,
            Some(_) => SlaStatus::Failed,
            None if now <= due_by => SlaStatus::FirstResponseDue,
            None => SlaStatus::Failed,
        }
    }

    /// Deadline, status, and remaining budget in one call.
    ///
    /// `remaining_seconds` is populated only while the response is still
    /// due; it is the working time left between "now" and the deadline.
    ///
    /// # Errors
    /// Propagates the same errors as [`Self::response_due_by`].
    pub fn assess(
        &self,
        opened_at: NaiveDateTime,
        priority: Priority,
        first_responded_at: Option<NaiveDateTime>,
    ) -> Result<SlaAssessment> {
        let due_by = self.response_due_by(opened_at, priority)?;
        // One clock read for the whole assessment: the status decision and
        // the remaining-budget range must agree on "now", or a tick across
        // the deadline between two reads would invert the range.
        let now = self.clock.now();
        let status = Self::evaluate_at(due_by, first_responded_at, now);

        let remaining_seconds = if status == SlaStatus::FirstResponseDue {
            // FirstResponseDue implies now <= due_by, so the range is valid.
            Some(compute_elapsed(now, due_by, &self.schedule, &self.holidays)?)
        } else {
            None
        };

        match remaining_seconds {
            Some(secs) => debug!(
                %due_by,
                status = %status,
                remaining = %format_working_seconds(secs),
                "assessed sla"
            ),
            None => debug!(%due_by, status = %status, "assessed sla"),
        }

        Ok(SlaAssessment { due_by, status, remaining_seconds })
    }
}
