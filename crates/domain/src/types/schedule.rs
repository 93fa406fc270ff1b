//! Work schedules and holiday calendars.
//!
//! A [`WorkSchedule`] maps weekdays to at most one [`WorkingWindow`] each;
//! a [`HolidayList`] marks whole calendar dates as non-working regardless
//! of weekday. Both are validated at construction and read-only afterwards,
//! so the calculator never has to re-check them.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime, Timelike, Weekday};
use serde::Serialize;

use crate::errors::{Result, SlaError};

/// The working time-of-day interval for a single weekday.
///
/// A zero-length window (`start == end`) is valid and means the day has no
/// working hours. An inverted window is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkingWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl WorkingWindow {
    /// Create a working window, failing fast on an inverted interval.
    ///
    /// # Errors
    /// Returns [`SlaError::InvalidSchedule`] if `end` is before `start`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if end < start {
            return Err(SlaError::InvalidSchedule(format!(
                "window end {end} is before window start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Start of the window.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// End of the window.
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Window start as seconds since midnight.
    pub fn start_seconds(&self) -> u64 {
        u64::from(self.start.num_seconds_from_midnight())
    }

    /// Window end as seconds since midnight.
    pub fn end_seconds(&self) -> u64 {
        u64::from(self.end.num_seconds_from_midnight())
    }

    /// Total length of the window in seconds.
    pub fn seconds(&self) -> u64 {
        self.end_seconds() - self.start_seconds()
    }
}

/// Weekly working-hours schedule: at most one window per weekday.
///
/// Stored as a 7-slot array indexed by days-from-Monday so lookups during
/// the day walk are branch-free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkSchedule {
    windows: [Option<WorkingWindow>; 7],
}

impl WorkSchedule {
    /// Build a schedule from `(weekday, window)` pairs.
    ///
    /// # Errors
    /// Returns [`SlaError::InvalidSchedule`] if the same weekday appears
    /// more than once.
    pub fn new(entries: impl IntoIterator<Item = (Weekday, WorkingWindow)>) -> Result<Self> {
        let mut windows: [Option<WorkingWindow>; 7] = [None; 7];
        for (day, window) in entries {
            let slot = &mut windows[day.num_days_from_monday() as usize];
            if slot.is_some() {
                return Err(SlaError::InvalidSchedule(format!("duplicate entry for {day}")));
            }
            *slot = Some(window);
        }
        Ok(Self { windows })
    }

    /// Convenience constructor for the common Monday-to-Friday case with
    /// the same window every working day.
    ///
    /// # Errors
    /// Returns [`SlaError::InvalidSchedule`] if the window is inverted.
    pub fn weekdays(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        let window = WorkingWindow::new(start, end)?;
        Self::new(
            [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri]
                .into_iter()
                .map(|day| (day, window)),
        )
    }

    /// Working window for a weekday, if one is configured.
    pub fn window_for(&self, day: Weekday) -> Option<&WorkingWindow> {
        self.windows[day.num_days_from_monday() as usize].as_ref()
    }

    /// Total configured working seconds across one week.
    pub fn weekly_working_seconds(&self) -> u64 {
        self.windows.iter().flatten().map(WorkingWindow::seconds).sum()
    }

    /// True when no weekday has any working time at all.
    pub fn is_empty(&self) -> bool {
        self.weekly_working_seconds() == 0
    }
}

/// Set of calendar dates that never accrue working time.
///
/// The original application frequently ran with an empty list, so the
/// default is empty and everything treats that as "no holidays".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HolidayList {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayList {
    /// Create an empty holiday list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a date as a holiday.
    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    /// Whether the given date is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of holidays in the list.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True when no holidays are configured.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidayList {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self { dates: iter.into_iter().collect() }
    }
}

impl Extend<NaiveDate> for HolidayList {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        self.dates.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn window_rejects_inverted_interval() {
        let err = WorkingWindow::new(t(17, 0), t(9, 0)).unwrap_err();
        assert!(matches!(err, SlaError::InvalidSchedule(_)));
    }

    #[test]
    fn zero_length_window_is_valid_and_empty() {
        let window = WorkingWindow::new(t(9, 0), t(9, 0)).unwrap();
        assert_eq!(window.seconds(), 0);
    }

    #[test]
    fn schedule_rejects_duplicate_weekday() {
        let window = WorkingWindow::new(t(9, 0), t(17, 0)).unwrap();
        let err = WorkSchedule::new([(Weekday::Mon, window), (Weekday::Mon, window)]).unwrap_err();
        assert!(matches!(err, SlaError::InvalidSchedule(_)));
    }

    #[test]
    fn weekday_schedule_covers_monday_to_friday() {
        let schedule = WorkSchedule::weekdays(t(9, 0), t(17, 0)).unwrap();
        assert!(schedule.window_for(Weekday::Mon).is_some());
        assert!(schedule.window_for(Weekday::Fri).is_some());
        assert!(schedule.window_for(Weekday::Sat).is_none());
        assert!(schedule.window_for(Weekday::Sun).is_none());
        assert_eq!(schedule.weekly_working_seconds(), 5 * 8 * 3600);
    }

    #[test]
    fn default_schedule_is_empty() {
        let schedule = WorkSchedule::default();
        assert!(schedule.is_empty());
        assert_eq!(schedule.weekly_working_seconds(), 0);
    }

    #[test]
    fn holiday_list_membership() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let holidays: HolidayList = [date].into_iter().collect();
        assert!(holidays.contains(date));
        assert!(!holidays.contains(date.succ_opt().unwrap()));
        assert_eq!(holidays.len(), 1);
    }
}
