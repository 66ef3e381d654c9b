//! Services module
//!
//! This module contains the backend client and the business logic services

pub mod auth;
pub mod course;
pub mod enrollment;
pub mod http;
pub mod notification;
pub mod user;

// Re-export commonly used services
pub use auth::SessionManager;
pub use course::CourseService;
pub use enrollment::EnrollmentService;
pub use http::HttpClient;
pub use notification::{Alert, AlertKind, LoadingGuard, Notifier};
pub use user::UserService;

use std::time::Duration;

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub http: HttpClient,
    pub notifier: Notifier,
    pub user_service: UserService,
    pub course_service: CourseService,
    pub enrollment_service: EnrollmentService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing one client
    pub fn new(settings: &Settings) -> Result<Self> {
        let notifier = Notifier::new(Duration::from_secs(settings.ui.alert_ttl_seconds));
        let http = HttpClient::new(&settings.api, notifier.clone())?;

        Ok(Self {
            user_service: UserService::new(http.clone()),
            course_service: CourseService::new(http.clone()),
            enrollment_service: EnrollmentService::new(http.clone()),
            http,
            notifier,
        })
    }
}
