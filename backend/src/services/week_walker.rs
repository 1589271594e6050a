//! Pairing of open/close events into timeslots over a circular week.
//!
//! Days are visited once in calendar order. The walker carries the kind of the
//! last event seen and the opening still waiting for its close, so a slot may
//! open on one day and close on a later one. The only wrap across the week
//! boundary is an opening left pending at the end of the week being closed by
//! Monday's first event; that close is set aside when it is met and resolved
//! after the last day. The wrap slot is listed under Sunday, the day before
//! the Monday that closes it, whichever day it opened on.

use chrono::NaiveTime;
use log::debug;

use crate::error::{ValidationError, ValidationResult};
use crate::models::{Event, EventKind, Timeslot, WeeklyInput, WeeklySchedule, Weekday};

/// Pair every opening of `input` with its closing.
pub fn build_schedule(input: &WeeklyInput) -> ValidationResult<WeeklySchedule> {
    let mut walker = WeekWalker::default();
    for (day, events) in input.iter() {
        for (i, event) in events.iter().enumerate() {
            walker.step(day, i, event)?;
        }
    }
    let schedule = walker.finish()?;
    debug!("Paired {} timeslots", schedule.total_slots());
    Ok(schedule)
}

/// An opening that has not met its close yet.
#[derive(Debug, Clone, Copy)]
struct PendingOpening {
    day: Weekday,
    time: NaiveTime,
}

#[derive(Debug, Default)]
struct WeekWalker {
    previous_kind: Option<EventKind>,
    pending_opening: Option<PendingOpening>,
    /// Monday's first event when it is a close, to be paired after Sunday.
    deferred_closure: Option<NaiveTime>,
    schedule: WeeklySchedule,
}

impl WeekWalker {
    fn step(&mut self, day: Weekday, index: usize, event: &Event) -> ValidationResult<()> {
        if self.previous_kind == Some(event.kind) {
            return Err(ValidationError::RepeatedStatus {
                day,
                kind: event.kind,
            });
        }

        match event.kind {
            EventKind::Open => {
                self.pending_opening = Some(PendingOpening {
                    day,
                    time: event.time,
                });
            }
            EventKind::Close => {
                if day == Weekday::Monday && index == 0 && self.previous_kind.is_none() {
                    // previous_kind stays unset so the next event must be an open.
                    self.deferred_closure = Some(event.time);
                    return Ok(());
                }

                let opening = self
                    .pending_opening
                    .take()
                    .ok_or(ValidationError::CloseWithoutOpen { day })?;
                self.schedule.push(
                    opening.day,
                    Timeslot {
                        opening: opening.time,
                        closing: event.time,
                        closes_on: day,
                    },
                );
            }
        }

        self.previous_kind = Some(event.kind);
        Ok(())
    }

    fn finish(mut self) -> ValidationResult<WeeklySchedule> {
        match (self.pending_opening.take(), self.deferred_closure) {
            (Some(opening), Some(closing)) => {
                self.schedule.push(
                    Weekday::Monday.previous(),
                    Timeslot {
                        opening: opening.time,
                        closing,
                        closes_on: Weekday::Monday,
                    },
                );
            }
            (Some(opening), None) => {
                return Err(ValidationError::UnclosedOpen { day: opening.day });
            }
            (None, Some(_)) => return Err(ValidationError::DanglingMondayClosure),
            (None, None) => {}
        }
        Ok(self.schedule)
    }
}
