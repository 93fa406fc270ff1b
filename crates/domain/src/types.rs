//! Domain value types for business-hours SLA tracking.

pub mod schedule;
pub mod sla;

pub use schedule::{HolidayList, WorkSchedule, WorkingWindow};
pub use sla::{Priority, PriorityTargets, SlaAssessment, SlaStatus};
