//! Services module
//!
//! This module contains the HTTP-facing client for the activities backend.

pub mod activities;

// Re-export commonly used services
pub use activities::ActivitiesApi;
