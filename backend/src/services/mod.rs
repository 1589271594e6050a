//! Service layer: the opening-hours pipeline.
//!
//! Raw payload -> [`normalizer`] -> [`week_walker`] -> [`formatter`] per slot
//! -> [`output`]. [`prettify`] chains the stages.

pub mod formatter;
pub mod normalizer;
pub mod output;
pub mod prettify;
pub mod week_walker;

pub use formatter::format_time;
pub use normalizer::{normalize_day, normalize_week, parse_weekly_input, RawWeek};
pub use output::{PrettySchedule, CLOSED};
pub use prettify::{prettify_input, prettify_timeslots};
pub use week_walker::build_schedule;
