//! In-memory session
//!
//! `SessionStore` is created once at startup and shared by the router,
//! the views and the session manager. Only the session manager changes the
//! user and authentication fields; the router records the current route.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{Role, User};

/// Who is signed in and where they are
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub current_user: Option<User>,
    pub is_authenticated: bool,
    pub current_route: String,
}

impl Session {
    pub fn role(&self) -> Option<Role> {
        self.current_user.as_ref().map(|user| user.role)
    }
}

/// Shared handle to the session
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the whole session
    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated
    }

    pub fn current_user(&self) -> Option<User> {
        self.read().current_user.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.read().role()
    }

    pub fn current_route(&self) -> String {
        self.read().current_route.clone()
    }

    pub(crate) fn sign_in(&self, user: User) {
        let mut session = self.write();
        session.current_user = Some(user);
        session.is_authenticated = true;
    }

    pub(crate) fn sign_out(&self) {
        let mut session = self.write();
        session.current_user = None;
        session.is_authenticated = false;
    }

    pub(crate) fn set_route(&self, route: &str) {
        self.write().current_route = route.to_string();
    }
}
