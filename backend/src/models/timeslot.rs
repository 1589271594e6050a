use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::event::{Event, EventKind, WeeklyInput};
use super::weekday::Weekday;
use crate::error::ValidationResult;

/// A period during which the restaurant is open.
///
/// The slot belongs to the day it opened on, except the slot closed by
/// Monday's leading close, which is always listed under Sunday. `closing` may
/// be numerically earlier than `opening` when the slot runs past midnight;
/// `closes_on` names the day whose event list held the close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timeslot {
    pub opening: NaiveTime,
    pub closing: NaiveTime,
    pub closes_on: Weekday,
}

/// Paired timeslots for each day of the week, in the order they opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [Vec<Timeslot>; 7],
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, day: Weekday, slot: Timeslot) {
        self.days[day.index()].push(slot);
    }

    pub fn day(&self, day: Weekday) -> &[Timeslot] {
        &self.days[day.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[Timeslot])> + '_ {
        Weekday::ALL
            .into_iter()
            .map(move |day| (day, self.day(day)))
    }

    pub fn total_slots(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    /// Re-derive the event lists that produce this schedule.
    ///
    /// Openings are placed on the day the slot is listed under, so a week
    /// whose wrapping opening fell before Sunday re-derives with that opening
    /// moved to Sunday.
    pub fn to_input(&self) -> ValidationResult<WeeklyInput> {
        let mut events: [Vec<Event>; 7] = Default::default();
        for (day, slots) in self.iter() {
            for slot in slots {
                events[day.index()].push(Event {
                    kind: EventKind::Open,
                    time: slot.opening,
                });
                events[slot.closes_on.index()].push(Event {
                    kind: EventKind::Close,
                    time: slot.closing,
                });
            }
        }

        let mut input = WeeklyInput::new();
        for (day, day_events) in Weekday::ALL.into_iter().zip(events) {
            input.set_day(day, day_events)?;
        }
        Ok(input)
    }
}
