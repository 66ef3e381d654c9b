//! Data models module
//!
//! This module contains all data structures exchanged with the REST backend

pub mod id;
pub mod user;
pub mod course;
pub mod enrollment;
pub mod form;

// Re-export commonly used models
pub use id::{RecordId, parse_id};
pub use user::{User, Role, CreateUserRequest, UpdateUserRequest, RegistrationRequest};
pub use course::{Course, CourseRequest};
pub use enrollment::{Enrollment, EnrollmentStatus, CreateEnrollmentRequest};
pub use form::FormData;
