//! Shared helpers for integration tests

pub mod backend_mock;

use ActivityBoard::config::{BackendConfig, LoggingConfig, Settings};

/// Build settings pointing at the given mock backend URL
pub fn test_settings(base_url: &str) -> Settings {
    Settings {
        backend: BackendConfig {
            base_url: base_url.to_string(),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            file_path: "./logs".to_string(),
        },
    }
}
