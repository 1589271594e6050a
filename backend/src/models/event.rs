use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::weekday::Weekday;
use crate::error::{ValidationError, ValidationResult};

/// Number of seconds in a day; valid event values are `0..SECONDS_PER_DAY`.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Whether the restaurant opens or closes at an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Open,
    Close,
}

impl EventKind {
    /// Matches `open` / `close`, ignoring case.
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("open") {
            Some(EventKind::Open)
        } else if token.eq_ignore_ascii_case("close") {
            Some(EventKind::Close)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Open => "open",
            EventKind::Close => "close",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw JSON structure for one event of a day, as sent by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEvent {
    #[serde(rename = "type", alias = "status")]
    pub kind: String,
    pub value: i64,
}

/// A validated open/close transition within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    pub kind: EventKind,
    pub time: NaiveTime,
}

impl Event {
    /// Build an event from seconds since midnight, `None` when out of the day.
    pub fn at(kind: EventKind, seconds: u32) -> Option<Self> {
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).map(|time| Self { kind, time })
    }

    pub fn seconds(&self) -> u32 {
        self.time.num_seconds_from_midnight()
    }
}

/// Sort one day's events by time, rejecting two events at the same second.
pub fn sort_day_events(day: Weekday, events: &mut [Event]) -> ValidationResult<()> {
    events.sort_by_key(|event| event.time);
    match events.windows(2).find(|pair| pair[0].time == pair[1].time) {
        Some(pair) => Err(ValidationError::AmbiguousOrdering {
            day,
            seconds: pair[0].seconds(),
        }),
        None => Ok(()),
    }
}

/// Per-day event lists for a whole week.
///
/// Each day's list is sorted by time with no two events at the same second.
/// Days never set are empty, i.e. closed all day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyInput {
    days: [Vec<Event>; 7],
}

impl WeeklyInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events of `day` in time order.
    pub fn day(&self, day: Weekday) -> &[Event] {
        &self.days[day.index()]
    }

    /// Replace the events of `day`, sorting them by time.
    ///
    /// Fails with [`ValidationError::AmbiguousOrdering`] when two events share
    /// a timestamp; the day is left untouched in that case.
    pub fn set_day(&mut self, day: Weekday, mut events: Vec<Event>) -> ValidationResult<()> {
        sort_day_events(day, &mut events)?;
        self.days[day.index()] = events;
        Ok(())
    }

    /// Days with their events, in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[Event])> + '_ {
        Weekday::ALL
            .into_iter()
            .map(move |day| (day, self.day(day)))
    }

    pub fn total_events(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }
}
