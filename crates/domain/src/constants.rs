//! Domain constants

/// Upper bound on the due-by day walk, roughly ten years of calendar days.
///
/// A schedule whose every remaining day is a holiday would otherwise walk
/// forever; past this horizon the calculation fails with
/// [`SlaError::NoWorkingTime`](crate::errors::SlaError::NoWorkingTime).
pub const MAX_DUE_BY_HORIZON_DAYS: u32 = 3660;

/// Seconds in one calendar day.
pub const SECONDS_PER_DAY: u64 = 86_400;
