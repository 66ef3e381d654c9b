//! Course service implementation

use tracing::{debug, info};

use crate::models::{Course, CourseRequest, RecordId};
use crate::services::http::HttpClient;
use crate::utils::errors::Result;

const COURSES: &str = "/courses";

/// Typed CRUD over the `/courses` resource
#[derive(Debug, Clone)]
pub struct CourseService {
    http: HttpClient,
}

impl CourseService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Course>> {
        debug!("Listing courses");
        self.http.get(COURSES).await
    }

    pub async fn create(&self, request: CourseRequest) -> Result<Course> {
        debug!(title = %request.title, "Creating course");
        let course: Course = self.http.post(COURSES, &request).await?;
        info!(course_id = course.id, title = %course.title, "Course created");
        Ok(course)
    }

    pub async fn update(&self, course_id: RecordId, request: CourseRequest) -> Result<Course> {
        debug!(course_id = course_id, "Updating course");
        let course: Course = self.http.put(&format!("{}/{}", COURSES, course_id), &request).await?;
        info!(course_id = course_id, "Course updated");
        Ok(course)
    }

    pub async fn delete(&self, course_id: RecordId) -> Result<()> {
        debug!(course_id = course_id, "Deleting course");
        self.http.delete(&format!("{}/{}", COURSES, course_id)).await?;
        info!(course_id = course_id, "Course deleted");
        Ok(())
    }

    pub async fn get_by_id(&self, course_id: RecordId) -> Result<Option<Course>> {
        debug!(course_id = course_id, "Getting course by ID");
        let courses = self.list().await?;
        Ok(courses.into_iter().find(|course| course.id == course_id))
    }
}
