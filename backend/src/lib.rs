//! # Opening Hours
//!
//! Turns a week of restaurant open/close events into human-readable opening
//! hours.
//!
//! Clients send, for each weekday, a list of `{"type": "open" | "close",
//! "value": <seconds since midnight>}` records, in any order. The crate
//! validates the week as a whole, pairs every opening with its closing (a
//! slot may run past midnight, and Sunday night may close on Monday), and
//! renders each day as `"Closed"` or ranges such as `"9 AM - 5 PM, 6:30 PM - 11 PM"`.
//!
//! ## Architecture
//!
//! - [`models`]: weekdays, events and timeslots
//! - [`services`]: normalization, pairing, formatting and output
//! - [`error`]: the validation error taxonomy
//! - [`config`]: server configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`api`]: public re-exports
//!
//! ```
//! use opening_hours::api::{prettify_timeslots, Weekday};
//!
//! let pretty = prettify_timeslots(
//!     r#"{"monday": [{"type": "open", "value": 32400}, {"type": "close", "value": 64800}]}"#,
//! )
//! .unwrap();
//! assert_eq!(pretty.get(Weekday::Monday), "9 AM - 6 PM");
//! assert_eq!(pretty.get(Weekday::Sunday), "Closed");
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
