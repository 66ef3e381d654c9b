//! Form validation
//!
//! Validators collect every problem instead of stopping at the first one;
//! callers surface the whole list as a single alert.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{CourseRequest, CreateUserRequest, FormData, RegistrationRequest, Role, UpdateUserRequest};
use crate::utils::errors::{CourseDeskError, Result};
use crate::utils::helpers::normalize_whitespace;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_CAPACITY: u32 = 1;
pub const MAX_CAPACITY: u32 = 100;

pub const REGISTRATION_FIELDS: &[&str] = &["name", "email", "password", "phone", "enrollNumber"];
pub const USER_FIELDS: &[&str] = &["name", "email", "role", "phone", "enrollNumber"];
pub const COURSE_FIELDS: &[&str] = &["title", "description", "instructor", "startDate", "duration", "capacity"];

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// Check the shape of an email address
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// One message per required field that is missing or blank
pub fn validate_required(form: &FormData, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|field| form.get(field).trim().is_empty())
        .map(|field| format!("Field {} is required", field))
        .collect()
}

/// Required fields plus email format and password length when present
pub fn validate_form(form: &FormData, required: &[&str]) -> Vec<String> {
    let mut errors = validate_required(form, required);

    if let Some(email) = form.get_non_blank("email") {
        if !is_valid_email(email) {
            errors.push("Email format is not valid".to_string());
        }
    }

    if let Some(password) = form.get_non_blank("password") {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push(format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH));
        }
    }

    errors
}

/// Turn a list of messages into a result
pub fn ensure_valid(errors: Vec<String>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CourseDeskError::Validation(errors))
    }
}

/// Trim every input and collapse whitespace in the display name
pub fn clean_form(form: &FormData) -> FormData {
    let mut cleaned = form.trimmed();
    if cleaned.contains("name") {
        let name = normalize_whitespace(cleaned.get("name"));
        cleaned.insert("name", &name);
    }
    cleaned
}

/// Validate and convert the self-registration form
pub fn registration_from_form(form: &FormData) -> Result<RegistrationRequest> {
    let form = clean_form(form);
    ensure_valid(validate_form(&form, REGISTRATION_FIELDS))?;

    Ok(RegistrationRequest {
        name: form.get("name").to_string(),
        email: form.get("email").to_string(),
        password: form.get("password").to_string(),
        phone: form.get("phone").to_string(),
        enroll_number: form.get("enrollNumber").to_string(),
    })
}

fn parse_role(form: &FormData, errors: &mut Vec<String>) -> Role {
    match Role::parse(form.get("role")) {
        Some(role) => role,
        None => {
            if !form.get("role").is_empty() {
                errors.push(format!("Unknown role: {}", form.get("role")));
            }
            Role::Visitor
        }
    }
}

/// Validate and convert the administrator's create-user form
pub fn create_user_from_form(form: &FormData) -> Result<CreateUserRequest> {
    let form = clean_form(form);
    let mut required = USER_FIELDS.to_vec();
    required.push("password");
    let mut errors = validate_form(&form, &required);
    let role = parse_role(&form, &mut errors);
    ensure_valid(errors)?;

    Ok(CreateUserRequest {
        name: form.get("name").to_string(),
        email: form.get("email").to_string(),
        password: form.get("password").to_string(),
        role,
        phone: form.get("phone").to_string(),
        enroll_number: form.get("enrollNumber").to_string(),
        date_of_admission: None,
    })
}

/// Validate and convert the administrator's edit-user form; a blank password keeps the old one
pub fn update_user_from_form(form: &FormData) -> Result<UpdateUserRequest> {
    let form = clean_form(form);
    let mut errors = validate_form(&form, USER_FIELDS);
    let role = parse_role(&form, &mut errors);
    ensure_valid(errors)?;

    Ok(UpdateUserRequest {
        name: form.get("name").to_string(),
        email: form.get("email").to_string(),
        password: form.get_non_blank("password").map(str::to_string),
        role,
        phone: form.get("phone").to_string(),
        enroll_number: form.get("enrollNumber").to_string(),
    })
}

/// Validate and convert the course form
pub fn course_from_form(form: &FormData) -> Result<CourseRequest> {
    let form = clean_form(form);
    let mut errors = validate_required(&form, COURSE_FIELDS);

    let mut capacity = 0;
    if let Some(raw) = form.get_non_blank("capacity") {
        match raw.parse::<i64>() {
            Ok(value) if (MIN_CAPACITY as i64..=MAX_CAPACITY as i64).contains(&value) => capacity = value as u32,
            _ => errors.push(format!(
                "Capacity must be between {} and {} students",
                MIN_CAPACITY, MAX_CAPACITY
            )),
        }
    }
    ensure_valid(errors)?;

    Ok(CourseRequest {
        title: form.get("title").to_string(),
        description: form.get("description").to_string(),
        instructor: form.get("instructor").to_string(),
        start_date: form.get("startDate").to_string(),
        duration: form.get("duration").to_string(),
        capacity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn registration() -> FormData {
        FormData::new()
            .with("name", "  Juan   Pérez ")
            .with("email", "juan@email.com")
            .with("password", "123456")
            .with("phone", "3001234567")
            .with("enrollNumber", "A-100")
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("admin@admin.com"));
        assert!(!is_valid_email("admin@admin"));
        assert!(!is_valid_email("ad min@admin.com"));
        assert!(!is_valid_email("@admin.com"));
    }

    #[test]
    fn test_registration_is_cleaned() {
        let request = registration_from_form(&registration()).unwrap();
        assert_eq!(request.name, "Juan Pérez");
        assert_eq!(request.enroll_number, "A-100");
    }

    #[test]
    fn test_all_problems_are_collected() {
        let form = FormData::new()
            .with("name", " ")
            .with("email", "not-an-email")
            .with("password", "123");
        let err = registration_from_form(&form).unwrap_err();
        let messages = match err {
            CourseDeskError::Validation(messages) => messages,
            other => panic!("unexpected error: {other:?}"),
        };
        assert!(messages.contains(&"Field name is required".to_string()));
        assert!(messages.contains(&"Field phone is required".to_string()));
        assert!(messages.contains(&"Field enrollNumber is required".to_string()));
        assert!(messages.contains(&"Email format is not valid".to_string()));
        assert!(messages.contains(&"Password must be at least 6 characters".to_string()));
    }

    #[test]
    fn test_update_user_blank_password_keeps_existing() {
        let form = registration().with("role", "admin").with("password", "   ");
        let request = update_user_from_form(&form).unwrap();
        assert_eq!(request.password, None);
        assert_eq!(request.role, Role::Admin);
    }

    #[test]
    fn test_create_user_requires_password_and_known_role() {
        let form = registration().with("password", "").with("role", "root");
        let err = create_user_from_form(&form).unwrap_err();
        assert_matches!(err, CourseDeskError::Validation(ref messages)
            if messages.iter().any(|m| m == "Field password is required")
            && messages.iter().any(|m| m == "Unknown role: root"));
    }

    #[test]
    fn test_course_capacity_bounds() {
        let base = FormData::new()
            .with("title", "Rust")
            .with("description", "Systems")
            .with("instructor", "Ferris")
            .with("startDate", "01-Mar-2025")
            .with("duration", "4 weeks");

        assert_eq!(course_from_form(&base.clone().with("capacity", "25")).unwrap().capacity, 25);
        assert_matches!(course_from_form(&base.clone().with("capacity", "0")), Err(CourseDeskError::Validation(_)));
        assert_matches!(course_from_form(&base.clone().with("capacity", "101")), Err(CourseDeskError::Validation(_)));
        assert_matches!(course_from_form(&base.with("capacity", "ten")), Err(CourseDeskError::Validation(_)));
    }
}
