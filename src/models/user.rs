//! User model

use serde::{Deserialize, Serialize};

use super::id::{flexible_id, RecordId};

/// Role of a user. A user has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Visitor,
}

impl Role {
    /// Label shown in tables and forms
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Visitor => "Visitor",
        }
    }

    /// Wire value, as used in form fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Visitor => "visitor",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "admin" => Some(Role::Admin),
            "visitor" => Some(Role::Visitor),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "flexible_id")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub role: Role,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub enroll_number: String,
    #[serde(default)]
    pub date_of_admission: Option<String>,
}

/// Payload for `POST /users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub phone: String,
    pub enroll_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_admission: Option<String>,
}

/// Fields an administrator can change on an existing user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    /// `None` keeps the stored password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
    pub phone: String,
    pub enroll_number: String,
}

impl UpdateUserRequest {
    /// Overlay the edited fields on a stored record
    pub fn apply_to(self, existing: &User) -> User {
        User {
            id: existing.id,
            name: self.name,
            email: self.email,
            password: self.password.unwrap_or_else(|| existing.password.clone()),
            role: self.role,
            phone: self.phone,
            enroll_number: self.enroll_number,
            date_of_admission: existing.date_of_admission.clone(),
        }
    }
}

/// Self-registration data; the role is always assigned by the server side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub enroll_number: String,
}
