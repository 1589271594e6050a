//! Domain types: the calendar, raw and validated events, and paired timeslots.

pub mod event;
pub mod timeslot;
pub mod weekday;

pub use event::*;
pub use timeslot::*;
pub use weekday::*;
