//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the CourseDesk application.

use std::path::Path;

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{CourseDeskError, Result};

/// Initialize logging based on configuration.
///
/// Logs go to stderr so they never interleave with rendered frames on stdout.
/// The returned guard must be kept alive for the file layer to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| CourseDeskError::Config(format!("Invalid log filter: {}", e)))?;

    let (file_layer, guard) = match &config.file_path {
        Some(file_path) => {
            let path = Path::new(file_path);
            let directory = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("coursedesk.log");

            let file_appender = tracing_appender::rolling::daily(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| CourseDeskError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log admin actions
pub fn log_admin_action(admin_id: i64, action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        admin_id = admin_id,
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log backend requests
pub fn log_request(method: &str, endpoint: &str, status: Option<u16>, duration_ms: u64, success: bool) {
    if success {
        debug!(
            method = method,
            endpoint = endpoint,
            status = status,
            duration_ms = duration_ms,
            "Backend request completed"
        );
    } else {
        warn!(
            method = method,
            endpoint = endpoint,
            status = status,
            duration_ms = duration_ms,
            "Backend request failed"
        );
    }
}

/// Log route changes
pub fn log_navigation(from: &str, to: &str, reason: &str) {
    debug!(
        from = from,
        to = to,
        reason = reason,
        "Navigation"
    );
}
