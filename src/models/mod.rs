//! Data models module
//!
//! This module contains the data structures reported by the activities backend.

pub mod activity;

// Re-export commonly used models
pub use activity::{Activity, Roster};
