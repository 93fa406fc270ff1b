//! Business-hours calendar arithmetic.
//!
//! Two pure functions over a [`WorkSchedule`] and [`HolidayList`]:
//!
//! - [`compute_elapsed`] counts the working seconds between two instants.
//! - [`compute_due_by`] walks forward from a start instant until a
//!   working-seconds budget is exhausted and returns the deadline.
//!
//! Only time inside a day's working window accrues; holidays and weekdays
//! without a window contribute nothing. All datetimes are naive: the
//! schedule and the instants are assumed to live in the same zone.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use sla_domain::constants::{MAX_DUE_BY_HORIZON_DAYS, SECONDS_PER_DAY};
use sla_domain::errors::{Result, SlaError};
use sla_domain::types::schedule::{HolidayList, WorkSchedule};

/// Compute the instant `required_seconds` of working time after `start`.
///
/// The walk skips holidays and windowless weekdays, consumes whatever is
/// left of the current day's window, then rolls to the start of the next
/// day. A start instant already at or past the day's window end consumes
/// nothing that day.
///
/// `required_seconds == 0` returns `start` unchanged, even on a holiday.
///
/// # Errors
/// Returns [`SlaError::NoWorkingTime`] when the schedule has no working
/// hours at all, or when no working day is found within
/// [`MAX_DUE_BY_HORIZON_DAYS`] of `start` (a holiday-saturated calendar).
pub fn compute_due_by(
    start: NaiveDateTime,
    required_seconds: u64,
    schedule: &WorkSchedule,
    holidays: &HolidayList,
) -> Result<NaiveDateTime> {
    if required_seconds == 0 {
        return Ok(start);
    }
    if schedule.is_empty() {
        return Err(SlaError::NoWorkingTime("schedule has no working hours".to_string()));
    }

    let mut remaining = required_seconds;
    let mut date = start.date();
    // Time-of-day cursor; only meaningful on the first day, every later
    // day starts at midnight.
    let mut cursor = u64::from(start.time().num_seconds_from_midnight());

    for _ in 0..=MAX_DUE_BY_HORIZON_DAYS {
        if !holidays.contains(date) {
            if let Some(window) = schedule.window_for(date.weekday()) {
                let window_start = window.start_seconds().max(cursor);
                let window_end = window.end_seconds();
                if window_end > window_start {
                    let available = window_end - window_start;
                    let consumed = remaining.min(available);
                    remaining -= consumed;
                    if remaining == 0 {
                        return Ok(date.and_time(time_of_day(window_start + consumed)?));
                    }
                }
            }
        }
        date = next_day(date)?;
        cursor = 0;
    }

    Err(SlaError::NoWorkingTime(format!(
        "no working day within {MAX_DUE_BY_HORIZON_DAYS} days of {start}"
    )))
}

/// Count the working seconds elapsed between `start` and `end`.
///
/// Interior days contribute their full window; the start day contributes
/// from the later of window start and `start`'s time-of-day, the end day
/// up to the earlier of window end and `end`'s time-of-day. A shared
/// start/end day clamps both sides, floored at zero.
///
/// # Errors
/// Returns [`SlaError::InvalidRange`] when `start` is after `end`.
pub fn compute_elapsed(
    start: NaiveDateTime,
    end: NaiveDateTime,
    schedule: &WorkSchedule,
    holidays: &HolidayList,
) -> Result<u64> {
    if start > end {
        return Err(SlaError::InvalidRange { start, end });
    }

    let start_date = start.date();
    let end_date = end.date();
    let mut total = 0u64;
    let mut date = start_date;

    loop {
        if !holidays.contains(date) {
            if let Some(window) = schedule.window_for(date.weekday()) {
                let mut lo = window.start_seconds();
                let mut hi = window.end_seconds();
                if date == start_date {
                    lo = lo.max(u64::from(start.time().num_seconds_from_midnight()));
                }
                if date == end_date {
                    hi = hi.min(u64::from(end.time().num_seconds_from_midnight()));
                }
                if hi > lo {
                    total += hi - lo;
                }
            }
        }
        if date == end_date {
            break;
        }
        date = next_day(date)?;
    }

    Ok(total)
}

fn next_day(date: NaiveDate) -> Result<NaiveDate> {
    date.succ_opt()
        .ok_or_else(|| SlaError::NoWorkingTime(format!("calendar overflow after {date}")))
}

fn time_of_day(seconds: u64) -> Result<NaiveTime> {
    // Window ends are NaiveTime, so this stays below SECONDS_PER_DAY.
    u32::try_from(seconds)
        .ok()
        .filter(|secs| u64::from(*secs) < SECONDS_PER_DAY)
        .and_then(|secs| NaiveTime::from_num_seconds_from_midnight_opt(secs, 0))
        .ok_or_else(|| SlaError::InvalidSchedule(format!("{seconds}s is not a valid time of day")))
}
