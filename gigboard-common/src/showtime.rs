//! Show time classification and display formatting
//!
//! A show is *upcoming* iff its start time is strictly after the current
//! instant, else *past*. The classification is computed at read time and
//! never stored.

use chrono::{DateTime, Utc};

/// Strict-after comparison: a show starting exactly now counts as past
pub fn is_upcoming(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_time > now
}

/// Partition items into (upcoming, past) by their start time.
///
/// The two halves are disjoint and together contain every input item.
pub fn partition_by_time<T>(
    items: Vec<T>,
    now: DateTime<Utc>,
    start_time: impl Fn(&T) -> DateTime<Utc>,
) -> (Vec<T>, Vec<T>) {
    items
        .into_iter()
        .partition(|item| is_upcoming(start_time(item), now))
}

/// Human-readable show time, e.g. "Wed Jun 15, 2026 7:30PM"
pub fn format_show_time(t: DateTime<Utc>) -> String {
    t.format("%a %b %d, %Y %l:%M%p").to_string()
}
