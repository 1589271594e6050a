//! 12-hour clock rendering of times of day.

use chrono::{NaiveTime, Timelike};
use std::fmt;

use crate::models::Timeslot;

/// Render `time` on a 12-hour clock, e.g. `9 AM`, `6:30 PM`, `1:01:01 AM`.
///
/// Seconds are shown only when non-zero; minutes only when seconds or minutes
/// are non-zero. The hour never has a leading zero.
pub fn format_time(time: NaiveTime) -> String {
    let pattern = if time.second() != 0 {
        "%I:%M:%S %p"
    } else if time.minute() != 0 {
        "%I:%M %p"
    } else {
        "%I %p"
    };

    let rendered = time.format(pattern).to_string();
    match rendered.strip_prefix('0') {
        Some(stripped) => stripped.to_string(),
        None => rendered,
    }
}

impl fmt::Display for Timeslot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            format_time(self.opening),
            format_time(self.closing)
        )
    }
}
