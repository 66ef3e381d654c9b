//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use crate::utils::errors::{CourseDeskError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;
    validate_ui_config(&settings.ui)?;

    Ok(())
}

/// Validate REST backend configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(CourseDeskError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = Url::parse(&config.base_url)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(CourseDeskError::Config(
            format!("API base URL must use http or https, got: {}", url.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(CourseDeskError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate persistence configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if let Some(path) = &config.durable_path {
        if path.trim().is_empty() {
            return Err(CourseDeskError::Config(
                "Durable storage path cannot be blank".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CourseDeskError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(CourseDeskError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

/// Validate front-end configuration
fn validate_ui_config(config: &super::UiConfig) -> Result<()> {
    if !config.initial_route.starts_with('/') {
        return Err(CourseDeskError::Config(
            format!("Initial route must start with '/': {}", config.initial_route)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut settings = Settings::default();
        settings.api.base_url = "ftp://localhost:3000".to_string();
        assert_matches!(validate_settings(&settings), Err(CourseDeskError::Config(_)));
    }

    #[test]
    fn test_rejects_unparseable_base_url() {
        let mut settings = Settings::default();
        settings.api.base_url = "not a url".to_string();
        assert_matches!(validate_settings(&settings), Err(CourseDeskError::UrlParse(_)));
    }

    #[test]
    fn test_rejects_zero_timeout_and_bad_level() {
        let mut settings = Settings::default();
        settings.api.timeout_seconds = 0;
        assert!(validate_settings(&settings).is_err());

        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_relative_initial_route() {
        let mut settings = Settings::default();
        settings.ui.initial_route = "courses".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
