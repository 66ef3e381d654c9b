//! Route table

use std::fmt;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const HOME_PATH: &str = "/";

/// A resolved location inside the application
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Users,
    Courses,
    Enrollments,
    NotFound(String),
}

impl Route {
    /// Match a path; query strings and fragments are ignored
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default();

        match path {
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/" | "/dashboard" => Route::Dashboard,
            "/users" => Route::Users,
            "/courses" => Route::Courses,
            "/enrollments" => Route::Enrollments,
            other => Route::NotFound(other.to_string()),
        }
    }

    /// Canonical path of the route
    pub fn path(&self) -> &str {
        match self {
            Route::Login => LOGIN_PATH,
            Route::Register => REGISTER_PATH,
            Route::Dashboard => HOME_PATH,
            Route::Users => "/users",
            Route::Courses => "/courses",
            Route::Enrollments => "/enrollments",
            Route::NotFound(path) => path,
        }
    }

    /// Reachable without signing in
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
