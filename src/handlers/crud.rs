//! Create, update and delete handlers
//!
//! User and course management is reserved to administrators; enrolling and
//! cancelling to visitors. Deletions ask for confirmation first and do
//! nothing when declined.

use tracing::debug;

use crate::handlers::Outcome;
use crate::middleware::auth::{require_admin, require_visitor};
use crate::models::{FormData, RecordId};
use crate::state::AppContext;
use crate::utils::errors::{CourseDeskError, Result};
use crate::utils::logging::{log_admin_action, log_user_action};
use crate::utils::validation::{course_from_form, create_user_from_form, update_user_from_form};

pub async fn save_user(ctx: &AppContext, user_id: Option<RecordId>, form: &FormData) -> Result<Outcome> {
    let admin = require_admin(&ctx.session.snapshot(), "manage users")?;
    let users = &ctx.services.user_service;

    match user_id {
        None => {
            let request = create_user_from_form(form)?;
            let user = users.create(request).await?;
            log_admin_action(admin.id, "create_user", Some(&user.email), None);
            ctx.notifier().success("User created successfully");
        }
        Some(id) => {
            let request = update_user_from_form(form)?;
            let user = users.update(id, request).await?;
            log_admin_action(admin.id, "update_user", Some(&user.email), None);
            ctx.notifier().success("User updated successfully");
        }
    }
    Ok(Outcome::CloseModal)
}

pub async fn delete_user(ctx: &AppContext, user_id: RecordId) -> Result<Outcome> {
    let admin = require_admin(&ctx.session.snapshot(), "manage users")?;

    if !ctx.confirm.confirm("Are you sure you want to delete this user?").await {
        debug!(user_id = user_id, "User deletion declined");
        return Ok(Outcome::Refresh);
    }

    ctx.services.user_service.delete(user_id).await?;
    log_admin_action(admin.id, "delete_user", Some(&user_id.to_string()), None);
    ctx.notifier().success("User deleted successfully");
    Ok(Outcome::Refresh)
}

pub async fn save_course(ctx: &AppContext, course_id: Option<RecordId>, form: &FormData) -> Result<Outcome> {
    let admin = require_admin(&ctx.session.snapshot(), "manage courses")?;
    let request = course_from_form(form)?;
    let courses = &ctx.services.course_service;

    match course_id {
        None => {
            let course = courses.create(request).await?;
            log_admin_action(admin.id, "create_course", Some(&course.title), None);
            ctx.notifier().success("Course created successfully");
        }
        Some(id) => {
            let course = courses.update(id, request).await?;
            log_admin_action(admin.id, "update_course", Some(&course.title), None);
            ctx.notifier().success("Course updated successfully");
        }
    }
    Ok(Outcome::CloseModal)
}

/// Remove a course after removing each of its enrollments
pub async fn delete_course(ctx: &AppContext, course_id: RecordId) -> Result<Outcome> {
    let admin = require_admin(&ctx.session.snapshot(), "manage courses")?;

    let question = "Are you sure you want to delete this course? Its enrollments will be deleted too.";
    if !ctx.confirm.confirm(question).await {
        debug!(course_id = course_id, "Course deletion declined");
        return Ok(Outcome::Refresh);
    }

    let removed = ctx.services.enrollment_service.delete_for_course(course_id).await?;
    ctx.services.course_service.delete(course_id).await?;

    let details = format!("{} enrollments removed", removed);
    log_admin_action(admin.id, "delete_course", Some(&course_id.to_string()), Some(&details));
    ctx.notifier().success(format!(
        "Course deleted successfully ({} enrollments removed)",
        removed
    ));
    Ok(Outcome::Refresh)
}

pub async fn enroll(ctx: &AppContext, course_id: RecordId) -> Result<Outcome> {
    let visitor = require_visitor(&ctx.session.snapshot(), "enroll in courses")?;
    let services = &ctx.services;

    services
        .enrollment_service
        .enroll_with_checks(visitor.id, course_id, &services.course_service)
        .await?;

    log_user_action(visitor.id, "enroll", Some(&course_id.to_string()));
    ctx.notifier().success("Enrollment completed successfully");
    Ok(Outcome::Refresh)
}

/// Cancel one of the signed-in visitor's own enrollments
pub async fn cancel_enrollment(ctx: &AppContext, enrollment_id: RecordId) -> Result<Outcome> {
    let visitor = require_visitor(&ctx.session.snapshot(), "cancel enrollments")?;
    let enrollments = &ctx.services.enrollment_service;

    let enrollment = enrollments
        .get_by_id(enrollment_id)
        .await?
        .ok_or(CourseDeskError::NotFound { resource: "Enrollment", id: enrollment_id })?;
    if enrollment.user_id != visitor.id {
        return Err(CourseDeskError::PermissionDenied(
            "You can only cancel your own enrollments".to_string(),
        ));
    }

    if !ctx.confirm.confirm("Are you sure you want to cancel this enrollment?").await {
        debug!(enrollment_id = enrollment_id, "Cancellation declined");
        return Ok(Outcome::Refresh);
    }

    enrollments.cancel(enrollment_id).await?;
    log_user_action(visitor.id, "cancel_enrollment", Some(&enrollment_id.to_string()));
    ctx.notifier().success("Enrollment cancelled successfully");
    Ok(Outcome::Refresh)
}
