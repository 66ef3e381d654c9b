//! Middleware module
//!
//! This module contains the authorization checks applied before routing
//! and before mutating actions

pub mod auth;

// Re-export commonly used middleware
pub use auth::{require_admin, require_authenticated, require_visitor, Access, RouteGuard};
