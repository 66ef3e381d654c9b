//! Enrollment model

use serde::{Deserialize, Serialize};

use super::id::{flexible_id, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Active,
    Inactive,
}

impl EnrollmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "Active",
            EnrollmentStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(deserialize_with = "flexible_id")]
    pub id: RecordId,
    #[serde(deserialize_with = "flexible_id")]
    pub user_id: RecordId,
    #[serde(deserialize_with = "flexible_id")]
    pub course_id: RecordId,
    #[serde(default)]
    pub enrollment_date: String,
    pub status: EnrollmentStatus,
}

/// Payload for `POST /enrollments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnrollmentRequest {
    pub user_id: RecordId,
    pub course_id: RecordId,
    pub enrollment_date: String,
    pub status: EnrollmentStatus,
}
