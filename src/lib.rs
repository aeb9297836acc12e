//! ActivityBoard
//!
//! A console client for a school activities signup backend. This library
//! provides the roster data model, the HTTP client for the activities REST
//! API, a deterministic view layer, and the board controller that drives
//! the refresh, signup and unregister flows.

#![allow(non_snake_case)]

pub mod board;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{BoardError, Result};

// Re-export main components for easy access
pub use board::ActivityBoard;
pub use models::{Activity, Roster};
pub use services::ActivitiesApi;
pub use view::BoardView;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
