//! Modal forms for creating and editing records

use crate::models::{Course, RecordId, Role, User};
use crate::views::markup::Markup;

/// Which form the modal holds and which record it edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    User { editing: Option<RecordId> },
    Course { editing: Option<RecordId> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub kind: ModalKind,
    pub title: String,
    pub body: Markup,
}

fn field(name: &str, label: &str, kind: &str, value: &str, required: bool) -> Markup {
    Markup::raw(format!(
        r#"<div class="mb-3"><label for="{name}" class="form-label">{label}</label><input type="{kind}" class="form-control" id="{name}" name="{name}" value="{value}"{required}></div>"#,
        name = name,
        label = label,
        kind = kind,
        value = Markup::text(value),
        required = if required { " required" } else { "" }
    ))
}

fn role_select(selected: Role) -> Markup {
    let mut options = Markup::new();
    for role in [Role::Visitor, Role::Admin] {
        options.push_raw(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            role.as_str(),
            if role == selected { " selected" } else { "" },
            role.label()
        ));
    }
    Markup::raw(format!(
        r#"<div class="mb-3"><label for="role" class="form-label">Role</label><select class="form-select" id="role" name="role">{}</select></div>"#,
        options
    ))
}

fn or_blank(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Create form when `existing` is `None`, pre-filled edit form otherwise
pub fn user_form(existing: Option<&User>) -> Modal {
    let editing = existing.map(|user| user.id);
    let name = or_blank(existing.map(|u| u.name.as_str()));
    let email = or_blank(existing.map(|u| u.email.as_str()));
    let phone = or_blank(existing.map(|u| u.phone.as_str()));
    let enroll_number = or_blank(existing.map(|u| u.enroll_number.as_str()));

    let mut body = Markup::raw(r#"<form id="userForm" data-action="save-user">"#);
    body.push(field("name", "Full name", "text", &name, true));
    body.push(field("email", "Email", "email", &email, true));
    match existing {
        Some(_) => body.push(field("password", "Password (leave blank to keep it)", "password", "", false)),
        None => body.push(field("password", "Password", "password", "", true)),
    }
    body.push(role_select(existing.map(|u| u.role).unwrap_or(Role::Visitor)));
    body.push(field("phone", "Phone", "tel", &phone, true));
    body.push(field("enrollNumber", "Enrollment number", "text", &enroll_number, true));
    body.push_raw(r#"<button type="submit" class="btn btn-primary">Save</button></form>"#);

    Modal {
        kind: ModalKind::User { editing },
        title: if editing.is_some() { "Edit user" } else { "New user" }.to_string(),
        body,
    }
}

pub fn course_form(existing: Option<&Course>) -> Modal {
    let editing = existing.map(|course| course.id);
    let title = or_blank(existing.map(|c| c.title.as_str()));
    let description = or_blank(existing.map(|c| c.description.as_str()));
    let instructor = or_blank(existing.map(|c| c.instructor.as_str()));
    let start_date = or_blank(existing.map(|c| c.start_date.as_str()));
    let duration = or_blank(existing.map(|c| c.duration.as_str()));
    let capacity = existing.map(|c| c.capacity.to_string()).unwrap_or_default();

    let mut body = Markup::raw(r#"<form id="courseForm" data-action="save-course">"#);
    body.push(field("title", "Title", "text", &title, true));
    body.push(field("description", "Description", "text", &description, true));
    body.push(field("instructor", "Instructor", "text", &instructor, true));
    body.push(field("startDate", "Start date", "date", &start_date, true));
    body.push(field("duration", "Duration", "text", &duration, true));
    body.push(field("capacity", "Capacity", "number", &capacity, true));
    body.push_raw(r#"<button type="submit" class="btn btn-primary">Save</button></form>"#);

    Modal {
        kind: ModalKind::Course { editing },
        title: if editing.is_some() { "Edit course" } else { "New course" }.to_string(),
        body,
    }
}
