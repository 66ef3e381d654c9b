//! Event handlers module
//!
//! Every user event is an `Action`. Handlers run the action against the
//! services and tell the application what to show next:
//! - auth handlers for login, registration and logout
//! - CRUD handlers for users, courses and enrollments
//! - modal handlers that open create/edit forms
//! - the terminal command parser that produces actions

pub mod auth;
pub mod commands;
pub mod confirm;
pub mod crud;
pub mod modals;

pub use commands::parse_command;
pub use confirm::{AutoConfirm, Confirm};

use tracing::{debug, warn};

use crate::models::{FormData, RecordId};
use crate::services::Notifier;
use crate::utils::errors::CourseDeskError;
use crate::views::Modal;

/// A user event
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Follow a client-side link
    Navigate(String),
    Back,
    Forward,
    Login { email: String, password: String },
    Register(FormData),
    Logout,
    NewUser,
    EditUser(RecordId),
    /// Submit the user form; `None` submits whatever form is open
    SaveUser { id: Option<RecordId>, form: FormData },
    DeleteUser(RecordId),
    NewCourse,
    EditCourse(RecordId),
    SaveCourse { id: Option<RecordId>, form: FormData },
    DeleteCourse(RecordId),
    Enroll(RecordId),
    CancelEnrollment(RecordId),
    CloseModal,
}

impl Action {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::Navigate(_) => "navigate",
            Action::Back => "back",
            Action::Forward => "forward",
            Action::Login { .. } => "login",
            Action::Register(_) => "register",
            Action::Logout => "logout",
            Action::NewUser => "new_user",
            Action::EditUser(_) => "edit_user",
            Action::SaveUser { .. } => "save_user",
            Action::DeleteUser(_) => "delete_user",
            Action::NewCourse => "new_course",
            Action::EditCourse(_) => "edit_course",
            Action::SaveCourse { .. } => "save_course",
            Action::DeleteCourse(_) => "delete_course",
            Action::Enroll(_) => "enroll",
            Action::CancelEnrollment(_) => "cancel_enrollment",
            Action::CloseModal => "close_modal",
        }
    }
}

/// What the application shows after a handler succeeds
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Render the current route again
    Refresh,
    Navigate(String),
    OpenModal(Modal),
    /// Close the open modal and render the current route again
    CloseModal,
}

/// Turn a handler failure into an alert
///
/// Backend failures were already announced by the HTTP client and are only
/// logged here.
pub fn report_error(notifier: &Notifier, error: &CourseDeskError) {
    match error {
        CourseDeskError::Http { .. }
        | CourseDeskError::Request(_)
        | CourseDeskError::Serialization(_) => {
            debug!(error = %error, "Backend failure already reported");
        }
        CourseDeskError::InvalidCredentials => notifier.error("Invalid email or password"),
        CourseDeskError::EmailAlreadyExists { .. } => notifier.error("This email is already registered"),
        CourseDeskError::Validation(_) => notifier.error(error.to_string()),
        CourseDeskError::AlreadyEnrolled { .. } => notifier.warning("You are already enrolled in this course"),
        CourseDeskError::CourseFull { .. } => notifier.warning("This course has no places left"),
        CourseDeskError::NotFound { .. } => notifier.error(error.to_string()),
        CourseDeskError::PermissionDenied(message) => notifier.error(message.clone()),
        CourseDeskError::NotAuthenticated => notifier.warning("Please log in first"),
        CourseDeskError::Io(_)
        | CourseDeskError::UrlParse(_)
        | CourseDeskError::Config(_)
        | CourseDeskError::ConfigLoad(_)
        | CourseDeskError::Storage(_) => {
            warn!(error = %error, severity = %error.severity(), "Unexpected failure");
            notifier.error(format!("Unexpected error: {}", error));
        }
    }
}
