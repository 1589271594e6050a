//! Public API surface of the crate.

pub use crate::config::{ConfigError, ServerConfig};
pub use crate::error::{ValidationError, ValidationResult};
pub use crate::models::{Event, EventKind, RawEvent, Timeslot, WeeklyInput, WeeklySchedule, Weekday};
pub use crate::services::{
    build_schedule, format_time, parse_weekly_input, prettify_input, prettify_timeslots,
    PrettySchedule,
};
