//! End-to-end conversion from the raw weekly payload to display text.

use crate::error::ValidationResult;
use crate::models::WeeklyInput;

use super::normalizer::parse_weekly_input;
use super::output::PrettySchedule;
use super::week_walker::build_schedule;

/// Prettify a JSON payload of per-day open/close events.
///
/// The payload maps weekday names (any case) to lists of
/// `{"type": "open" | "close", "value": <seconds since midnight>}` records.
/// Days that are missing or empty are closed.
///
/// # Errors
/// Returns the first [`ValidationError`](crate::error::ValidationError) met,
/// without any partial output.
pub fn prettify_timeslots(json: &str) -> ValidationResult<PrettySchedule> {
    let input = parse_weekly_input(json)?;
    prettify_input(&input)
}

/// Prettify an already normalized week.
pub fn prettify_input(input: &WeeklyInput) -> ValidationResult<PrettySchedule> {
    let schedule = build_schedule(input)?;
    Ok(PrettySchedule::from(&schedule))
}
