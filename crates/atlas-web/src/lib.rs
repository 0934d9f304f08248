//! Atlas Web - HTTP front end for the Atlas datasets.
//!
//! Serves the world map, timeline, country and event pages, plus the JSON
//! endpoints the map script reads from.

pub mod config;
pub mod error;
pub mod server;
pub mod views;

pub use config::AtlasConfig;
pub use server::{router, AppState, WebServer};
pub use views::Views;
