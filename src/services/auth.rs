//! Session management
//!
//! `SessionManager` is the only writer of the signed-in user. It handles
//! login, self-registration, logout and restoring a session at startup.
//! Credentials are compared verbatim against the backend's user list.

use tracing::{debug, info, warn};

use crate::models::{CreateUserRequest, RegistrationRequest, Role, User};
use crate::services::notification::Notifier;
use crate::services::user::UserService;
use crate::state::session::SessionStore;
use crate::state::storage::{PersistenceAdapter, CURRENT_USER_KEY, IS_AUTHENTICATED_KEY};
use crate::utils::errors::{CourseDeskError, Result};
use crate::utils::helpers::today_stamp;
use crate::utils::logging::log_user_action;

#[derive(Debug, Clone)]
pub struct SessionManager {
    users: UserService,
    storage: PersistenceAdapter,
    session: SessionStore,
    notifier: Notifier,
}

impl SessionManager {
    pub fn new(users: UserService, storage: PersistenceAdapter, session: SessionStore, notifier: Notifier) -> Self {
        Self {
            users,
            storage,
            session,
            notifier,
        }
    }

    /// Sign in with an exact email and password match
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        debug!(email = %email, "Attempting login");

        let users = self.users.list().await?;
        let user = users
            .into_iter()
            .find(|user| user.email == email && user.password == password)
            .ok_or_else(|| {
                warn!(email = %email, "Login rejected");
                CourseDeskError::InvalidCredentials
            })?;

        self.storage.set_durable(CURRENT_USER_KEY, &user)?;
        self.storage.set_session(IS_AUTHENTICATED_KEY, &true)?;
        self.session.sign_in(user.clone());

        log_user_action(user.id, "login", Some(user.role.as_str()));
        self.notifier.success(format!("Welcome, {}!", user.name));
        Ok(user)
    }

    /// Create a visitor account; does not sign in
    pub async fn register(&self, request: RegistrationRequest) -> Result<User> {
        debug!(email = %request.email, "Attempting registration");

        let users = self.users.list().await?;
        if users.iter().any(|user| user.email == request.email) {
            warn!(email = %request.email, "Registration rejected, email already in use");
            return Err(CourseDeskError::EmailAlreadyExists { email: request.email });
        }

        let create = CreateUserRequest {
            name: request.name,
            email: request.email,
            password: request.password,
            role: Role::Visitor,
            phone: request.phone,
            enroll_number: request.enroll_number,
            date_of_admission: Some(today_stamp()),
        };
        let user = self.users.create(create).await?;

        log_user_action(user.id, "register", None);
        self.notifier.success("Registration successful, you can now log in");
        Ok(user)
    }

    /// Forget the session in both storage tiers and in memory
    pub fn logout(&self) -> Result<()> {
        let user_id = self.session.current_user().map(|user| user.id);

        self.storage.remove_durable(CURRENT_USER_KEY)?;
        self.storage.remove_session(IS_AUTHENTICATED_KEY)?;
        self.session.sign_out();

        if let Some(user_id) = user_id {
            log_user_action(user_id, "logout", None);
        }
        self.notifier.info("Session closed");
        Ok(())
    }

    /// Rebuild the in-memory session from storage; absence is not an error
    pub fn restore(&self) -> bool {
        let user = self.storage.get_durable::<User>(CURRENT_USER_KEY);
        let authenticated = self.storage.get_session::<bool>(IS_AUTHENTICATED_KEY).unwrap_or(false);

        match user {
            Some(user) if authenticated => {
                info!(user_id = user.id, "Session restored");
                self.session.sign_in(user);
                true
            }
            _ => {
                debug!("No session to restore");
                self.session.sign_out();
                false
            }
        }
    }
}
