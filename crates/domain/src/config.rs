//! Serde configuration structures for the SLA engine.
//!
//! These mirror what an administrator writes in `sla.toml` (or JSON, or the
//! `SLA_CONFIG` environment variable). They stay loosely validated at parse
//! time; [`SlaConfig::build`] converts them into the strongly-typed domain
//! values, re-running every domain invariant.
//!
//! ```toml
//! [[schedule]]
//! day = "monday"
//! start = "09:00:00"
//! end = "17:00:00"
//!
//! holidays = ["2026-12-25"]
//!
//! [targets]
//! urgent = 1800
//! high = 3600
//! ```

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::types::schedule::{HolidayList, WorkSchedule, WorkingWindow};
use crate::types::sla::{Priority, PriorityTargets};

/// One weekday's working window as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Weekday name ("monday", "tue", ...).
    pub day: Weekday,
    /// Start of working hours, e.g. "09:00:00".
    pub start: NaiveTime,
    /// End of working hours, e.g. "17:00:00".
    pub end: NaiveTime,
}

/// Top-level SLA configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaConfig {
    /// Weekly working-hours entries, at most one per weekday.
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,

    /// Calendar dates with no working time, e.g. "2026-12-25".
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,

    /// Required first-response working seconds per priority.
    #[serde(default)]
    pub targets: BTreeMap<Priority, u64>,
}

impl SlaConfig {
    /// Convert the parsed document into validated domain values.
    ///
    /// # Errors
    /// Returns [`SlaError::InvalidSchedule`](crate::errors::SlaError::InvalidSchedule)
    /// on inverted windows or duplicate weekdays.
    pub fn build(&self) -> Result<(WorkSchedule, HolidayList, PriorityTargets)> {
        let mut entries = Vec::with_capacity(self.schedule.len());
        for entry in &self.schedule {
            entries.push((entry.day, WorkingWindow::new(entry.start, entry.end)?));
        }
        let schedule = WorkSchedule::new(entries)?;
        let holidays: HolidayList = self.holidays.iter().copied().collect();
        let targets: PriorityTargets = self.targets.iter().map(|(p, s)| (*p, *s)).collect();
        Ok((schedule, holidays, targets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        holidays = ["2026-12-25"]

        [[schedule]]
        day = "monday"
        start = "09:00:00"
        end = "17:00:00"

        [[schedule]]
        day = "friday"
        start = "09:00:00"
        end = "13:00:00"

        [targets]
        urgent = 1800
        low = 14400
    "#;

    #[test]
    fn parses_and_builds_domain_values() {
        let config: SlaConfig = toml::from_str(SAMPLE).unwrap();
        let (schedule, holidays, targets) = config.build().unwrap();

        assert_eq!(schedule.window_for(Weekday::Mon).unwrap().seconds(), 8 * 3600);
        assert_eq!(schedule.window_for(Weekday::Fri).unwrap().seconds(), 4 * 3600);
        assert!(schedule.window_for(Weekday::Sat).is_none());
        assert!(holidays.contains(NaiveDate::from_ymd_opt(2026, 12, 25).unwrap()));
        assert_eq!(targets.target_for(Priority::Urgent), Some(1800));
        assert_eq!(targets.target_for(Priority::Low), Some(14400));
    }

    #[test]
    fn inverted_window_is_rejected_at_build() {
        let raw = r#"
            [[schedule]]
            day = "monday"
            start = "17:00:00"
            end = "09:00:00"
        "#;
        let config: SlaConfig = toml::from_str(raw).unwrap();
        assert!(config.build().is_err());
    }

    #[test]
    fn empty_document_builds_empty_values() {
        let config: SlaConfig = toml::from_str("").unwrap();
        let (schedule, holidays, targets) = config.build().unwrap();
        assert!(schedule.is_empty());
        assert!(holidays.is_empty());
        assert!(targets.is_empty());
    }
}
