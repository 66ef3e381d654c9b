//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Base URL of the REST backend when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

/// REST backend configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Persistence configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// JSON file backing the durable tier; `None` keeps it in memory
    pub durable_path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

/// Front-end behaviour configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    pub initial_route: String,
    pub alert_ttl_seconds: u64,
}

impl Settings {
    /// Load settings from defaults, configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("coursedesk").required(false))
            .add_source(config::Environment::with_prefix("COURSEDESK").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::CourseDeskError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_API_BASE_URL.to_string(),
                timeout_seconds: 10,
                user_agent: "CourseDesk/0.1".to_string(),
            },
            storage: StorageConfig {
                durable_path: Some("coursedesk-storage.json".to_string()),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
            ui: UiConfig {
                initial_route: "/".to_string(),
                alert_ttl_seconds: 3,
            },
        }
    }
}
