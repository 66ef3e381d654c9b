//! Client-side routing
//!
//! The router turns a path into a `Route` the current session may see.
//! Gating redirects are ordinary navigations: they push a history entry and
//! run the gates again. Redirects are silent and never surface as errors.

pub mod route;

pub use route::{Route, HOME_PATH, LOGIN_PATH, REGISTER_PATH};

use tracing::warn;

use crate::middleware::auth::{Access, RouteGuard};
use crate::state::session::SessionStore;
use crate::utils::logging::log_navigation;

/// Upper bound on consecutive redirects while resolving one navigation
pub const MAX_REDIRECTS: usize = 8;

/// Browser-style history with a cursor
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry after the cursor, dropping any forward entries
    pub fn push(&mut self, path: &str) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(path.to_string());
        self.cursor = self.entries.len() - 1;
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(String::as_str)
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.entries.is_empty() || self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.current()
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.current()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// Route state machine over the shared session
#[derive(Debug, Clone)]
pub struct Router {
    session: SessionStore,
    history: History,
}

impl Router {
    pub fn new(session: SessionStore) -> Self {
        Self {
            session,
            history: History::new(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current_path(&self) -> String {
        self.session.current_route()
    }

    /// Push a new entry and resolve it
    pub fn navigate(&mut self, path: &str) -> Route {
        self.history.push(path);
        self.resolve(path, "navigate")
    }

    /// Move back one entry; `None` at the start of history
    pub fn back(&mut self) -> Option<Route> {
        let path = self.history.back()?.to_string();
        Some(self.resolve(&path, "history back"))
    }

    /// Move forward one entry; `None` at the end of history
    pub fn forward(&mut self) -> Option<Route> {
        let path = self.history.forward()?.to_string();
        Some(self.resolve(&path, "history forward"))
    }

    /// Resolve the current entry again, e.g. after the session changed
    pub fn refresh(&mut self) -> Route {
        let path = self
            .history
            .current()
            .map(str::to_string)
            .unwrap_or_else(|| HOME_PATH.to_string());
        self.resolve(&path, "refresh")
    }

    fn resolve(&mut self, path: &str, reason: &'static str) -> Route {
        let from = self.session.current_route();
        let mut path = path.to_string();
        let mut reason = reason;

        for _ in 0..=MAX_REDIRECTS {
            let route = Route::parse(&path);
            match RouteGuard::check(&route, &self.session.snapshot()) {
                Access::Allow => {
                    log_navigation(&from, &path, reason);
                    self.session.set_route(&path);
                    return route;
                }
                Access::Redirect { to, reason: why } => {
                    log_navigation(&path, to, why);
                    self.history.push(to);
                    path = to.to_string();
                    reason = why;
                }
            }
        }

        warn!(path = %path, "Too many redirects, falling back to login");
        self.history.push(LOGIN_PATH);
        self.session.set_route(LOGIN_PATH);
        Route::Login
    }
}
