//! Event normalization.
//!
//! Decodes the client payload and turns each day's raw records into typed
//! events sorted by time of day.

use log::debug;
use std::collections::BTreeMap;

use crate::error::{ValidationError, ValidationResult};
use crate::models::{sort_day_events, Event, EventKind, RawEvent, WeeklyInput, Weekday, SECONDS_PER_DAY};

/// Raw JSON structure for a week: weekday name to its records.
///
/// A `null` day is the same as an empty one.
pub type RawWeek = BTreeMap<String, Option<Vec<RawEvent>>>;

/// Decode a JSON payload and normalize it into a [`WeeklyInput`].
pub fn parse_weekly_input(json: &str) -> ValidationResult<WeeklyInput> {
    let raw: RawWeek = serde_json::from_str(json)?;
    normalize_week(raw)
}

/// Resolve weekday names and normalize every day in calendar order.
pub fn normalize_week(raw: RawWeek) -> ValidationResult<WeeklyInput> {
    let mut by_day: [Option<Vec<RawEvent>>; 7] = Default::default();
    let mut seen = [false; 7];

    for (key, records) in raw {
        let day: Weekday = key.parse()?;
        if std::mem::replace(&mut seen[day.index()], true) {
            return Err(ValidationError::MalformedInput(format!(
                "{} is listed more than once",
                day
            )));
        }
        by_day[day.index()] = records;
    }

    let mut input = WeeklyInput::new();
    for (day, records) in Weekday::ALL.into_iter().zip(by_day) {
        let events = normalize_day(day, records.unwrap_or_default())?;
        input.set_day(day, events)?;
    }

    debug!(
        "Normalized {} events across {} open days",
        input.total_events(),
        input.iter().filter(|(_, events)| !events.is_empty()).count()
    );
    Ok(input)
}

/// Validate one day's records and sort them by time.
pub fn normalize_day(day: Weekday, records: Vec<RawEvent>) -> ValidationResult<Vec<Event>> {
    let mut events = records
        .into_iter()
        .map(|record| normalize_event(day, record))
        .collect::<ValidationResult<Vec<_>>>()?;
    sort_day_events(day, &mut events)?;
    Ok(events)
}

fn normalize_event(day: Weekday, record: RawEvent) -> ValidationResult<Event> {
    let kind = EventKind::parse(&record.kind).ok_or_else(|| ValidationError::MalformedStatus {
        day,
        found: record.kind.clone(),
    })?;

    u32::try_from(record.value)
        .ok()
        .filter(|seconds| *seconds < SECONDS_PER_DAY)
        .and_then(|seconds| Event::at(kind, seconds))
        .ok_or(ValidationError::TimestampOutOfRange {
            day,
            value: record.value,
        })
}
