//! Atlas Data - static datasets and lookups
//!
//! Loads the country, country-code, and timeline documents once at startup
//! into an immutable [`Dataset`] snapshot and answers lookups against it.
//! Per-event detail documents are read from disk on every request.

pub mod dataset;
pub mod error;
pub mod lookup;
pub mod types;

pub use dataset::*;
pub use error::*;
pub use lookup::{is_safe_event_id, FALLBACK_DESCRIPTION};
pub use types::*;
