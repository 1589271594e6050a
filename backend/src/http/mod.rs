//! HTTP adapter for the opening-hours service.
//!
//! A thin axum layer over [`crate::services`]: it hands the request body to the
//! pipeline untouched and maps validation failures to `422` responses.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Body extraction and size limit                         │
//! │  - JSON responses, CORS, compression, tracing             │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Normalization, pairing, formatting                     │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
