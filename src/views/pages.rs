//! Page renderers
//!
//! One function per route. Pages that need data fetch it through the
//! services, concurrently when they need more than one list.

use std::collections::HashMap;

use futures::try_join;

use crate::models::{Course, Enrollment, RecordId, Role, User};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::helpers::truncate_text;
use crate::views::markup::{action_button, link, Markup};
use crate::views::View;

const CARD_DESCRIPTION_LENGTH: usize = 120;

fn input(name: &str, label: &str, kind: &str) -> Markup {
    Markup::raw(format!(
        r#"<div class="mb-3"><label for="{name}" class="form-label">{label}</label><input type="{kind}" class="form-control" id="{name}" name="{name}" required></div>"#,
        name = name,
        label = label,
        kind = kind
    ))
}

pub fn login() -> View {
    let mut body = Markup::raw(r#"<div class="auth-card"><h2>Log in</h2><form id="loginForm" data-action="login">"#);
    body.push(input("email", "Email", "email"));
    body.push(input("password", "Password", "password"));
    body.push_raw(r#"<button type="submit" class="btn btn-primary w-100">Log in</button></form><p class="mt-3">No account yet? "#);
    body.push(link("/register", "Register", ""));
    body.push_raw("</p></div>");
    View::new("Log in", body)
}

pub fn register() -> View {
    let mut body = Markup::raw(r#"<div class="auth-card"><h2>Register</h2><form id="registerForm" data-action="register">"#);
    body.push(input("name", "Full name", "text"));
    body.push(input("email", "Email", "email"));
    body.push(input("password", "Password", "password"));
    body.push(input("phone", "Phone", "tel"));
    body.push(input("enrollNumber", "Enrollment number", "text"));
    body.push_raw(r#"<button type="submit" class="btn btn-primary w-100">Register</button></form><p class="mt-3">Already registered? "#);
    body.push(link("/login", "Log in", ""));
    body.push_raw("</p></div>");
    View::new("Register", body)
}

fn stat_card(label: &str, value: usize) -> Markup {
    Markup::raw(format!(
        r#"<div class="col-md-4"><div class="card stat-card"><div class="card-body"><h5>{}</h5><p class="display-6">{}</p></div></div></div>"#,
        Markup::text(label),
        value
    ))
}

fn course_card(course: &Course, footer: Markup) -> Markup {
    Markup::raw(format!(
        r#"<div class="col-md-4"><div class="card course-card" data-course-id="{}"><div class="card-body"><h5 class="card-title">{}</h5><p class="card-text">{}</p><ul class="list-unstyled"><li>Instructor: {}</li><li>Start date: {}</li><li>Duration: {}</li></ul>{}</div></div></div>"#,
        course.id,
        Markup::text(&course.title),
        Markup::text(&truncate_text(&course.description, CARD_DESCRIPTION_LENGTH)),
        Markup::text(&course.instructor),
        Markup::text(&course.start_date),
        Markup::text(&course.duration),
        footer
    ))
}

/// Role-specific landing page
pub async fn dashboard(services: &ServiceFactory, user: &User) -> Result<View> {
    match user.role {
        Role::Admin => {
            let (users, courses, enrollments) = try_join!(
                services.user_service.list(),
                services.course_service.list(),
                services.enrollment_service.list(),
            )?;

            let mut body = Markup::raw(r#"<h2>Dashboard</h2><div class="row">"#);
            body.push(stat_card("Users", users.len()));
            body.push(stat_card("Courses", courses.len()));
            body.push(stat_card("Enrollments", enrollments.len()));
            body.push_raw(r#"</div><div class="quick-actions">"#);
            body.push(action_button("new-user", None, "Create user", "btn-primary"));
            body.push(action_button("new-course", None, "Create course", "btn-success"));
            body.push_raw("</div>");
            Ok(View::new("Dashboard", body))
        }
        Role::Visitor => {
            let (mine, courses) = try_join!(
                services.enrollment_service.for_user(user.id),
                services.course_service.list(),
            )?;

            let mut body = Markup::raw(r#"<h2>Dashboard</h2><div class="row">"#);
            body.push(stat_card("My enrollments", mine.len()));
            body.push(stat_card("Available courses", courses.len()));
            body.push_raw(r#"</div><h3>My courses</h3><div class="row">"#);

            let by_id: HashMap<RecordId, &Course> = courses.iter().map(|c| (c.id, c)).collect();
            let enrolled: Vec<&Course> = mine.iter().filter_map(|e| by_id.get(&e.course_id).copied()).collect();
            if enrolled.is_empty() {
                body.push_raw(r#"<p class="empty-state">You are not enrolled in any course yet.</p>"#);
            }
            for course in enrolled {
                body.push(course_card(course, Markup::new()));
            }
            body.push_raw("</div>");
            Ok(View::new("Dashboard", body))
        }
    }
}

/// Administrator's user table
pub async fn users(services: &ServiceFactory) -> Result<View> {
    let users = services.user_service.list().await?;

    let mut body = Markup::raw(r#"<div class="page-header"><h2>Users</h2>"#);
    body.push(action_button("new-user", None, "New user", "btn-primary"));
    body.push_raw(r#"</div><table class="table"><thead><tr><th>ID</th><th>Name</th><th>Email</th><th>Role</th><th>Phone</th><th>Actions</th></tr></thead><tbody>"#);
    for user in &users {
        body.push_raw(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>",
            user.id,
            Markup::text(&user.name),
            Markup::text(&user.email),
            user.role.label(),
            Markup::text(&user.phone)
        ));
        body.push(action_button("edit-user", Some(user.id), "Edit", "btn-sm btn-warning"));
        body.push(action_button("delete-user", Some(user.id), "Delete", "btn-sm btn-danger"));
        body.push_raw("</td></tr>");
    }
    body.push_raw("</tbody></table>");
    Ok(View::new("Users", body))
}

fn count_by_course(enrollments: &[Enrollment]) -> HashMap<RecordId, usize> {
    let mut counts = HashMap::new();
    for enrollment in enrollments {
        *counts.entry(enrollment.course_id).or_insert(0) += 1;
    }
    counts
}

/// Management table for administrators, enrollable cards for visitors
pub async fn courses(services: &ServiceFactory, user: &User) -> Result<View> {
    let (courses, enrollments) = try_join!(
        services.course_service.list(),
        services.enrollment_service.list(),
    )?;
    let counts = count_by_course(&enrollments);

    let body = match user.role {
        Role::Admin => {
            let mut body = Markup::raw(r#"<div class="page-header"><h2>Courses</h2>"#);
            body.push(action_button("new-course", None, "New course", "btn-primary"));
            body.push_raw(r#"</div><table class="table"><thead><tr><th>ID</th><th>Title</th><th>Instructor</th><th>Start date</th><th>Duration</th><th>Capacity</th><th>Enrolled</th><th>Actions</th></tr></thead><tbody>"#);
            for course in &courses {
                let enrolled = counts.get(&course.id).copied().unwrap_or(0);
                body.push_raw(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}/{}</td><td>",
                    course.id,
                    Markup::text(&course.title),
                    Markup::text(&course.instructor),
                    Markup::text(&course.start_date),
                    Markup::text(&course.duration),
                    course.capacity,
                    enrolled,
                    course.capacity
                ));
                body.push(action_button("edit-course", Some(course.id), "Edit", "btn-sm btn-warning"));
                body.push(action_button("delete-course", Some(course.id), "Delete", "btn-sm btn-danger"));
                body.push_raw("</td></tr>");
            }
            body.push_raw("</tbody></table>");
            body
        }
        Role::Visitor => {
            let mut body = Markup::raw(r#"<h2>Available courses</h2><div class="row">"#);
            for course in &courses {
                let enrolled = counts.get(&course.id).copied().unwrap_or(0);
                let mine = enrollments
                    .iter()
                    .any(|e| e.user_id == user.id && e.course_id == course.id);

                let mut footer = Markup::raw(format!(
                    r#"<p class="availability">Enrolled: {}/{}</p>"#,
                    enrolled, course.capacity
                ));
                if mine {
                    footer.push_raw(r#"<span class="badge bg-success">Already enrolled</span>"#);
                } else if enrolled >= course.capacity as usize {
                    footer.push_raw(r#"<span class="badge bg-secondary">Course full</span>"#);
                } else {
                    footer.push(action_button("enroll", Some(course.id), "Enroll", "btn-primary"));
                }
                body.push(course_card(course, footer));
            }
            body.push_raw("</div>");
            body
        }
    };

    Ok(View::new("Courses", body))
}

/// A visitor's own enrollments joined to their courses
pub async fn enrollments(services: &ServiceFactory, user: &User) -> Result<View> {
    let (mine, courses) = try_join!(
        services.enrollment_service.for_user(user.id),
        services.course_service.list(),
    )?;
    let by_id: HashMap<RecordId, &Course> = courses.iter().map(|c| (c.id, c)).collect();

    let mut body = Markup::raw("<h2>My enrollments</h2>");
    let rows: Vec<(&Enrollment, &Course)> = mine
        .iter()
        .filter_map(|e| by_id.get(&e.course_id).map(|course| (e, *course)))
        .collect();

    if rows.is_empty() {
        body.push_raw(r#"<p class="empty-state">You have no enrollments yet.</p>"#);
        return Ok(View::new("My enrollments", body));
    }

    body.push_raw(r#"<table class="table"><thead><tr><th>Course</th><th>Instructor</th><th>Enrollment date</th><th>Status</th><th>Actions</th></tr></thead><tbody>"#);
    for (enrollment, course) in rows {
        body.push_raw(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>",
            Markup::text(&course.title),
            Markup::text(&course.instructor),
            Markup::text(&enrollment.enrollment_date),
            enrollment.status.label()
        ));
        body.push(action_button("cancel-enrollment", Some(enrollment.id), "Cancel", "btn-sm btn-danger"));
        body.push_raw("</td></tr>");
    }
    body.push_raw("</tbody></table>");
    Ok(View::new("My enrollments", body))
}

pub fn not_found(path: &str) -> View {
    let mut body = Markup::raw(format!(
        r#"<div class="not-found"><h2>404</h2><p>Page not found: {}</p>"#,
        Markup::text(path)
    ));
    body.push(link("/", "Back to dashboard", "btn btn-primary"));
    body.push_raw("</div>");
    View::new("Not found", body)
}
