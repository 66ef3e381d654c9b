//! Enrollment service implementation
//!
//! Besides plain CRUD over `/enrollments` this service owns the enrollment
//! rules: a user cannot hold two enrollments for the same course, and a
//! course accepts no more enrollments than its capacity. Every enrollment
//! counts toward capacity whatever its status. Both checks run against a
//! fresh listing and are not transactional.

use tracing::{debug, info, warn};

use crate::models::{CreateEnrollmentRequest, Enrollment, EnrollmentStatus, RecordId};
use crate::services::course::CourseService;
use crate::services::http::HttpClient;
use crate::utils::errors::{CourseDeskError, Result};
use crate::utils::helpers::today_stamp;

const ENROLLMENTS: &str = "/enrollments";

#[derive(Debug, Clone)]
pub struct EnrollmentService {
    http: HttpClient,
}

impl EnrollmentService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Enrollment>> {
        debug!("Listing enrollments");
        self.http.get(ENROLLMENTS).await
    }

    /// Create an active enrollment dated today, without any checks
    pub async fn enroll_user(&self, user_id: RecordId, course_id: RecordId) -> Result<Enrollment> {
        debug!(user_id = user_id, course_id = course_id, "Creating enrollment");

        let request = CreateEnrollmentRequest {
            user_id,
            course_id,
            enrollment_date: today_stamp(),
            status: EnrollmentStatus::Active,
        };
        let enrollment: Enrollment = self.http.post(ENROLLMENTS, &request).await?;
        info!(enrollment_id = enrollment.id, user_id = user_id, course_id = course_id, "Enrollment created");
        Ok(enrollment)
    }

    /// Delete one enrollment
    pub async fn cancel(&self, enrollment_id: RecordId) -> Result<()> {
        debug!(enrollment_id = enrollment_id, "Cancelling enrollment");
        self.http.delete(&format!("{}/{}", ENROLLMENTS, enrollment_id)).await?;
        info!(enrollment_id = enrollment_id, "Enrollment cancelled");
        Ok(())
    }

    pub async fn get_by_id(&self, enrollment_id: RecordId) -> Result<Option<Enrollment>> {
        let enrollments = self.list().await?;
        Ok(enrollments.into_iter().find(|e| e.id == enrollment_id))
    }

    pub async fn for_user(&self, user_id: RecordId) -> Result<Vec<Enrollment>> {
        debug!(user_id = user_id, "Listing enrollments for user");
        let enrollments = self.list().await?;
        Ok(enrollments.into_iter().filter(|e| e.user_id == user_id).collect())
    }

    pub async fn is_enrolled(&self, user_id: RecordId, course_id: RecordId) -> Result<bool> {
        let enrollments = self.for_user(user_id).await?;
        Ok(enrollments.iter().any(|e| e.course_id == course_id))
    }

    pub async fn for_course(&self, course_id: RecordId) -> Result<Vec<Enrollment>> {
        debug!(course_id = course_id, "Listing enrollments for course");
        let enrollments = self.list().await?;
        Ok(enrollments.into_iter().filter(|e| e.course_id == course_id).collect())
    }

    pub async fn count_for_course(&self, course_id: RecordId) -> Result<usize> {
        Ok(self.for_course(course_id).await?.len())
    }

    /// Delete every enrollment of a course one at a time; returns how many went
    pub async fn delete_for_course(&self, course_id: RecordId) -> Result<usize> {
        let enrollments = self.for_course(course_id).await?;
        for enrollment in &enrollments {
            self.cancel(enrollment.id).await?;
        }
        info!(course_id = course_id, removed = enrollments.len(), "Enrollments of course removed");
        Ok(enrollments.len())
    }

    /// Enroll after the duplicate check and then the capacity check
    pub async fn enroll_with_checks(
        &self,
        user_id: RecordId,
        course_id: RecordId,
        courses: &CourseService,
    ) -> Result<Enrollment> {
        if self.is_enrolled(user_id, course_id).await? {
            warn!(user_id = user_id, course_id = course_id, "User is already enrolled");
            return Err(CourseDeskError::AlreadyEnrolled { user_id, course_id });
        }

        let course = courses
            .get_by_id(course_id)
            .await?
            .ok_or(CourseDeskError::NotFound { resource: "Course", id: course_id })?;

        let enrolled = self.count_for_course(course_id).await?;
        if enrolled >= course.capacity as usize {
            warn!(course_id = course_id, enrolled = enrolled, capacity = course.capacity, "Course is full");
            return Err(CourseDeskError::CourseFull {
                course_id,
                capacity: course.capacity,
            });
        }

        self.enroll_user(user_id, course_id).await
    }
}
