//! Error handling for CourseDesk
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

use crate::models::RecordId;

/// Main error type for CourseDesk
#[derive(Error, Debug)]
pub enum CourseDeskError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email is already registered: {email}")]
    EmailAlreadyExists { email: String },

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("User {user_id} is already enrolled in course {course_id}")]
    AlreadyEnrolled { user_id: RecordId, course_id: RecordId },

    #[error("Course {course_id} reached its capacity of {capacity}")]
    CourseFull { course_id: RecordId, capacity: u32 },

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: RecordId },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for CourseDesk operations
pub type Result<T> = std::result::Result<T, CourseDeskError>;

impl CourseDeskError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            CourseDeskError::Config(_) => false,
            CourseDeskError::ConfigLoad(_) => false,
            CourseDeskError::UrlParse(_) => false,
            CourseDeskError::InvalidCredentials
            | CourseDeskError::EmailAlreadyExists { .. }
            | CourseDeskError::Http { .. }
            | CourseDeskError::Validation(_)
            | CourseDeskError::AlreadyEnrolled { .. }
            | CourseDeskError::CourseFull { .. }
            | CourseDeskError::NotFound { .. }
            | CourseDeskError::PermissionDenied(_)
            | CourseDeskError::NotAuthenticated
            | CourseDeskError::Request(_)
            | CourseDeskError::Serialization(_)
            | CourseDeskError::Io(_)
            | CourseDeskError::Storage(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CourseDeskError::Config(_) => ErrorSeverity::Critical,
            CourseDeskError::ConfigLoad(_) => ErrorSeverity::Critical,
            CourseDeskError::UrlParse(_) => ErrorSeverity::Critical,
            CourseDeskError::InvalidCredentials => ErrorSeverity::Warning,
            CourseDeskError::PermissionDenied(_) => ErrorSeverity::Warning,
            CourseDeskError::NotAuthenticated => ErrorSeverity::Warning,
            CourseDeskError::AlreadyEnrolled { .. } => ErrorSeverity::Warning,
            CourseDeskError::CourseFull { .. } => ErrorSeverity::Warning,
            CourseDeskError::Validation(_) => ErrorSeverity::Info,
            CourseDeskError::EmailAlreadyExists { .. } => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
