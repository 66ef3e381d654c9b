//! Handlers that open the create and edit forms

use crate::handlers::Outcome;
use crate::middleware::auth::require_admin;
use crate::models::RecordId;
use crate::state::AppContext;
use crate::utils::errors::{CourseDeskError, Result};
use crate::views::modals::{course_form, user_form};

/// Empty form for `None`, the stored user otherwise
pub async fn open_user_form(ctx: &AppContext, user_id: Option<RecordId>) -> Result<Outcome> {
    require_admin(&ctx.session.snapshot(), "manage users")?;

    let modal = match user_id {
        None => user_form(None),
        Some(id) => {
            let user = ctx
                .services
                .user_service
                .get_by_id(id)
                .await?
                .ok_or(CourseDeskError::NotFound { resource: "User", id })?;
            user_form(Some(&user))
        }
    };
    Ok(Outcome::OpenModal(modal))
}

pub async fn open_course_form(ctx: &AppContext, course_id: Option<RecordId>) -> Result<Outcome> {
    require_admin(&ctx.session.snapshot(), "manage courses")?;

    let modal = match course_id {
        None => course_form(None),
        Some(id) => {
            let course = ctx
                .services
                .course_service
                .get_by_id(id)
                .await?
                .ok_or(CourseDeskError::NotFound { resource: "Course", id })?;
            course_form(Some(&course))
        }
    };
    Ok(Outcome::OpenModal(modal))
}
