//! Authorization checks
//!
//! Route gating for the router and role checks for the CRUD handlers.
//! Every check matches on `Role` exhaustively.

use tracing::{debug, warn};

use crate::models::{Role, User};
use crate::router::route::{Route, HOME_PATH, LOGIN_PATH};
use crate::state::session::Session;
use crate::utils::errors::{CourseDeskError, Result};

/// Outcome of gating a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect { to: &'static str, reason: &'static str },
}

/// Decides whether the current session may see a route
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    /// The authentication gate runs first, then the role gate
    pub fn check(route: &Route, session: &Session) -> Access {
        if !route.is_public() && !session.is_authenticated {
            return Access::Redirect {
                to: LOGIN_PATH,
                reason: "not authenticated",
            };
        }

        match route {
            Route::Users => match session.role() {
                Some(Role::Admin) => Access::Allow,
                Some(Role::Visitor) | None => Access::Redirect {
                    to: HOME_PATH,
                    reason: "administrators only",
                },
            },
            Route::Enrollments => match session.role() {
                Some(Role::Visitor) => Access::Allow,
                Some(Role::Admin) | None => Access::Redirect {
                    to: HOME_PATH,
                    reason: "visitors only",
                },
            },
            Route::Login
            | Route::Register
            | Route::Dashboard
            | Route::Courses
            | Route::NotFound(_) => Access::Allow,
        }
    }
}

/// The signed-in user, or `NotAuthenticated`
pub fn require_authenticated(session: &Session) -> Result<User> {
    match (&session.current_user, session.is_authenticated) {
        (Some(user), true) => Ok(user.clone()),
        _ => Err(CourseDeskError::NotAuthenticated),
    }
}

/// Check that the signed-in user is an administrator
pub fn require_admin(session: &Session, action: &str) -> Result<User> {
    let user = require_authenticated(session)?;
    match user.role {
        Role::Admin => {
            debug!(user_id = user.id, action = action, "Admin authorization successful");
            Ok(user)
        }
        Role::Visitor => {
            warn!(user_id = user.id, action = action, "Unauthorized admin action attempt");
            Err(CourseDeskError::PermissionDenied(format!(
                "Only administrators can {}",
                action
            )))
        }
    }
}

/// Check that the signed-in user is a visitor
pub fn require_visitor(session: &Session, action: &str) -> Result<User> {
    let user = require_authenticated(session)?;
    match user.role {
        Role::Visitor => Ok(user),
        Role::Admin => {
            warn!(user_id = user.id, action = action, "Visitor-only action attempted by admin");
            Err(CourseDeskError::PermissionDenied(format!(
                "Only visitors can {}",
                action
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn session_for(role: Option<Role>) -> Session {
        Session {
            current_user: role.map(|role| User {
                id: 7,
                name: "Test".to_string(),
                email: "test@test.com".to_string(),
                password: "secret1".to_string(),
                role,
                phone: String::new(),
                enroll_number: String::new(),
                date_of_admission: None,
            }),
            is_authenticated: role.is_some(),
            current_route: String::new(),
        }
    }

    #[test]
    fn test_auth_gate_wins() {
        let anonymous = session_for(None);
        for path in ["/", "/users", "/courses", "/enrollments", "/missing"] {
            assert_matches!(
                RouteGuard::check(&Route::parse(path), &anonymous),
                Access::Redirect { to: LOGIN_PATH, .. }
            );
        }
        assert_eq!(RouteGuard::check(&Route::Login, &anonymous), Access::Allow);
        assert_eq!(RouteGuard::check(&Route::Register, &anonymous), Access::Allow);
    }

    #[test]
    fn test_role_gates() {
        let admin = session_for(Some(Role::Admin));
        let visitor = session_for(Some(Role::Visitor));

        assert_eq!(RouteGuard::check(&Route::Users, &admin), Access::Allow);
        assert_matches!(RouteGuard::check(&Route::Users, &visitor), Access::Redirect { to: HOME_PATH, .. });
        assert_eq!(RouteGuard::check(&Route::Enrollments, &visitor), Access::Allow);
        assert_matches!(RouteGuard::check(&Route::Enrollments, &admin), Access::Redirect { to: HOME_PATH, .. });
        assert_eq!(RouteGuard::check(&Route::Courses, &visitor), Access::Allow);
    }

    #[test]
    fn test_action_checks() {
        let admin = session_for(Some(Role::Admin));
        let visitor = session_for(Some(Role::Visitor));

        assert!(require_admin(&admin, "delete users").is_ok());
        assert_matches!(require_admin(&visitor, "delete users"), Err(CourseDeskError::PermissionDenied(_)));
        assert!(require_visitor(&visitor, "enroll").is_ok());
        assert_matches!(require_visitor(&admin, "enroll"), Err(CourseDeskError::PermissionDenied(_)));
        assert_matches!(require_admin(&session_for(None), "x"), Err(CourseDeskError::NotAuthenticated));
    }
}
