//! Human-readable formatting of working-seconds counts
//!
//! SLA budgets and elapsed times are tracked as whole working seconds;
//! logs and assessments render them as `"2h 30m"`, `"45s"`, `"3d 1h"`.

/// Format a working-seconds count into a human-readable string.
///
/// # Examples
///
/// ```
/// use sla_common::time::format::format_working_seconds;
///
/// assert_eq!(format_working_seconds(5), "5s");
/// assert_eq!(format_working_seconds(3665), "1h 1m 5s");
/// assert_eq!(format_working_seconds(9000), "2h 30m");
/// ```
pub fn format_working_seconds(total_secs: u64) -> String {
    if total_secs == 0 {
        return "0s".to_string();
    }

    let days = total_secs / 86400;
    let hours = (total_secs % 86400) / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    let components = [(days, "d"), (hours, "h"), (minutes, "m"), (seconds, "s")];

    components
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, suffix)| format!("{value}{suffix}"))
        .collect::<Vec<_>>()
        .join(" ")
}
