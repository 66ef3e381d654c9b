//! User service implementation
//!
//! Typed CRUD over the `/users` resource. Lookups by id or email are done
//! on the client by listing and filtering; nothing is cached.

use tracing::{debug, info};

use crate::models::{CreateUserRequest, RecordId, UpdateUserRequest, User};
use crate::services::http::HttpClient;
use crate::utils::errors::{CourseDeskError, Result};
use crate::utils::helpers::today_stamp;

const USERS: &str = "/users";

/// User service for managing user operations
#[derive(Debug, Clone)]
pub struct UserService {
    http: HttpClient,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch every user
    pub async fn list(&self) -> Result<Vec<User>> {
        debug!("Listing users");
        self.http.get(USERS).await
    }

    /// Create a user; the admission date is stamped with today when absent
    pub async fn create(&self, mut request: CreateUserRequest) -> Result<User> {
        debug!(email = %request.email, role = request.role.as_str(), "Creating user");

        if request.date_of_admission.is_none() {
            request.date_of_admission = Some(today_stamp());
        }

        let user: User = self.http.post(USERS, &request).await?;
        info!(user_id = user.id, email = %user.email, "User created");
        Ok(user)
    }

    /// Overlay the edited fields on the stored record and write it back whole
    pub async fn update(&self, user_id: RecordId, request: UpdateUserRequest) -> Result<User> {
        debug!(user_id = user_id, "Updating user");

        let existing = self
            .get_by_id(user_id)
            .await?
            .ok_or(CourseDeskError::NotFound { resource: "User", id: user_id })?;
        let merged = request.apply_to(&existing);

        let user: User = self.http.put(&format!("{}/{}", USERS, user_id), &merged).await?;
        info!(user_id = user_id, "User updated");
        Ok(user)
    }

    pub async fn delete(&self, user_id: RecordId) -> Result<()> {
        debug!(user_id = user_id, "Deleting user");
        self.http.delete(&format!("{}/{}", USERS, user_id)).await?;
        info!(user_id = user_id, "User deleted");
        Ok(())
    }

    pub async fn get_by_id(&self, user_id: RecordId) -> Result<Option<User>> {
        debug!(user_id = user_id, "Getting user by ID");
        let users = self.list().await?;
        Ok(users.into_iter().find(|user| user.id == user_id))
    }
}
