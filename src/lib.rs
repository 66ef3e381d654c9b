//! CourseDesk
//!
//! Client core for a course management front end: users, courses and
//! enrollments kept in a REST backend, with role-gated client-side routing.
//! This library provides the session, routing, view rendering and event
//! handling; a terminal driver in `main.rs` stands in for the browser.

#![allow(non_snake_case)]

pub mod app;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CourseDeskError, Result};

// Re-export main components for easy access
pub use app::App;
pub use handlers::{Action, AutoConfirm, Confirm};
pub use router::{Route, Router};
pub use services::{ServiceFactory, SessionManager};
pub use state::{AppContext, PersistenceAdapter, SessionStore};
pub use views::Frame;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
