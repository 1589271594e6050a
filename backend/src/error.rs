//! Error types for opening-hours validation.
//!
//! Every failure is an input-integrity problem: nothing here is retryable, and
//! the first error aborts the whole computation.

use crate::models::{EventKind, Weekday};

/// Result type for the normalization pipeline.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reasons a weekly payload cannot be turned into opening hours.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The payload is not a JSON object of per-day event lists.
    #[error("The input is not a valid opening hours payload: {0}")]
    MalformedInput(String),

    /// A key of the payload is not a weekday name.
    #[error("We expected a weekday, instead we got '{0}'")]
    UnknownWeekday(String),

    /// An event's type is neither `open` nor `close`.
    #[error("On {day} we expected an open or close status, instead we got '{found}'")]
    MalformedStatus { day: Weekday, found: String },

    /// An event's value is not a second of the day.
    #[error("On {day} the value {value} is not between 0 and 86399 seconds")]
    TimestampOutOfRange { day: Weekday, value: i64 },

    /// Two events of the same day share a timestamp, so their order is undefined.
    #[error("On {day} more than one status is set at {seconds} seconds from midnight")]
    AmbiguousOrdering { day: Weekday, seconds: u32 },

    /// Two consecutive events (across day boundaries) have the same kind.
    #[error("On {day} the opening hours have a repeated {kind} status")]
    RepeatedStatus { day: Weekday, kind: EventKind },

    /// A close with nothing open to pair it with.
    #[error("The first status found is a close on {day} without a previous open")]
    CloseWithoutOpen { day: Weekday },

    /// The week ends while an opening is still waiting for its close.
    #[error("On {day} the restaurant opened but it never closed")]
    UnclosedOpen { day: Weekday },

    /// Monday starts with a close but nothing is open at the end of the week.
    #[error("The first action on Monday is close but there is no matching opening on Sunday")]
    DanglingMondayClosure,
}

impl ValidationError {
    /// Stable identifier for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MalformedInput(_) => "MALFORMED_INPUT",
            ValidationError::UnknownWeekday(_) => "UNKNOWN_WEEKDAY",
            ValidationError::MalformedStatus { .. } => "MALFORMED_STATUS",
            ValidationError::TimestampOutOfRange { .. } => "TIMESTAMP_OUT_OF_RANGE",
            ValidationError::AmbiguousOrdering { .. } => "AMBIGUOUS_ORDERING",
            ValidationError::RepeatedStatus { .. } => "REPEATED_STATUS",
            ValidationError::CloseWithoutOpen { .. } => "CLOSE_WITHOUT_OPEN",
            ValidationError::UnclosedOpen { .. } => "UNCLOSED_OPEN",
            ValidationError::DanglingMondayClosure => "DANGLING_MONDAY_CLOSURE",
        }
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        ValidationError::MalformedInput(err.to_string())
    }
}
