//! Course model

use serde::{Deserialize, Serialize};

use super::id::{flexible_id, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(deserialize_with = "flexible_id")]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub duration: String,
    pub capacity: u32,
}

/// Payload for `POST /courses` and `PUT /courses/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub start_date: String,
    pub duration: String,
    pub capacity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_wire_format() {
        let json = r#"{"id": 3, "title": "Rust", "description": "Systems", "instructor": "Ferris",
                       "startDate": "01-Mar-2025", "duration": "4 weeks", "capacity": 20}"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.start_date, "01-Mar-2025");
        assert_eq!(course.capacity, 20);
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = CourseRequest {
            title: "Rust".to_string(),
            description: "Systems".to_string(),
            instructor: "Ferris".to_string(),
            start_date: "01-Mar-2025".to_string(),
            duration: "4 weeks".to_string(),
            capacity: 20,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["startDate"], "01-Mar-2025");
        assert!(value.get("id").is_none());
    }
}
