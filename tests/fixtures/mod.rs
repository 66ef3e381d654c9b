//! Test fixtures
//!
//! Seed data for the fake backend. The layout is chosen so every rule has
//! something to bite on: Juan already holds an enrollment in course 1, and
//! course 3 is at capacity.

#![allow(dead_code)]

use serde_json::{json, Value};

pub const ADMIN_ID: i64 = 1;
pub const ADMIN_EMAIL: &str = "admin@admin.com";
pub const ADMIN_PASSWORD: &str = "admin123";

pub const JUAN_ID: i64 = 2;
pub const JUAN_EMAIL: &str = "juan@email.com";
pub const JUAN_PASSWORD: &str = "123456";

pub const MARIA_ID: i64 = 3;

/// Juan is enrolled here, and so is María
pub const RUST_COURSE_ID: i64 = 1;
/// Juan holds an inactive enrollment here
pub const WEB_COURSE_ID: i64 = 2;
/// Capacity 1, taken by María
pub const FULL_COURSE_ID: i64 = 3;
/// Nobody enrolled yet
pub const OPEN_COURSE_ID: i64 = 4;

pub const JUAN_ENROLLMENT_IDS: [i64; 2] = [1, 4];
pub const MARIA_ENROLLMENT_IDS: [i64; 2] = [2, 3];

pub fn users() -> Vec<Value> {
    vec![
        json!({
            "id": ADMIN_ID,
            "name": "Administrator",
            "email": ADMIN_EMAIL,
            "password": ADMIN_PASSWORD,
            "role": "admin",
            "phone": "3000000000",
            "enrollNumber": "ADM-001",
            "dateOfAdmission": "1/1/2024"
        }),
        json!({
            "id": JUAN_ID,
            "name": "Juan Pérez",
            "email": JUAN_EMAIL,
            "password": JUAN_PASSWORD,
            "role": "visitor",
            "phone": "3001234567",
            "enrollNumber": "EST-002",
            "dateOfAdmission": "15/1/2024"
        }),
        json!({
            "id": MARIA_ID.to_string(),
            "name": "María Gómez",
            "email": "maria@email.com",
            "password": "654321",
            "role": "visitor",
            "phone": "3007654321",
            "enrollNumber": "EST-003",
            "dateOfAdmission": "20/1/2024"
        }),
    ]
}

pub fn courses() -> Vec<Value> {
    vec![
        json!({
            "id": RUST_COURSE_ID,
            "title": "Introduction to Rust",
            "description": "Ownership, borrowing and the type system",
            "instructor": "Ferris Crab",
            "startDate": "2025-03-01",
            "duration": "8 weeks",
            "capacity": 30
        }),
        json!({
            "id": WEB_COURSE_ID,
            "title": "Web Development",
            "description": "HTML, CSS and JavaScript basics",
            "instructor": "Ada Lovelace",
            "startDate": "2025-04-01",
            "duration": "6 weeks",
            "capacity": 20
        }),
        json!({
            "id": FULL_COURSE_ID,
            "title": "Data Science Seminar",
            "description": "Small group seminar",
            "instructor": "Grace Hopper",
            "startDate": "2025-05-01",
            "duration": "2 weeks",
            "capacity": 1
        }),
        json!({
            "id": OPEN_COURSE_ID,
            "title": "Databases",
            "description": "Relational modelling and SQL",
            "instructor": "Edgar Codd",
            "startDate": "2025-06-01",
            "duration": "4 weeks",
            "capacity": 10
        }),
    ]
}

pub fn enrollments() -> Vec<Value> {
    vec![
        json!({"id": 1, "userId": JUAN_ID, "courseId": RUST_COURSE_ID, "enrollmentDate": "1/2/2024", "status": "active"}),
        json!({"id": 2, "userId": MARIA_ID, "courseId": RUST_COURSE_ID, "enrollmentDate": "2/2/2024", "status": "active"}),
        json!({"id": 3, "userId": MARIA_ID.to_string(), "courseId": FULL_COURSE_ID.to_string(), "enrollmentDate": "3/2/2024", "status": "active"}),
        json!({"id": 4, "userId": JUAN_ID, "courseId": WEB_COURSE_ID, "enrollmentDate": "4/2/2024", "status": "inactive"}),
    ]
}

/// Registration form for a new visitor
pub fn registration_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Laura Torres"),
        ("email", "laura@email.com"),
        ("password", "laura1"),
        ("phone", "3009998877"),
        ("enrollNumber", "EST-010"),
    ]
}

/// Valid course form
pub fn course_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("title", "Async Rust"),
        ("description", "Futures, tasks and runtimes"),
        ("instructor", "Ferris Crab"),
        ("startDate", "2025-09-01"),
        ("duration", "3 weeks"),
        ("capacity", "15"),
    ]
}
