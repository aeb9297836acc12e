//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{BoardError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_backend_config(&settings.backend)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend configuration
fn validate_backend_config(config: &super::BackendConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(BoardError::Config(
            "Backend base URL is required".to_string(),
        ));
    }

    let url = Url::parse(&config.base_url)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(BoardError::Config(format!(
            "Backend base URL must be http or https, got: {}",
            url.scheme()
        )));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(BoardError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(BoardError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
