//! Login, registration and logout handlers

use tracing::debug;

use crate::handlers::Outcome;
use crate::models::FormData;
use crate::router::{HOME_PATH, LOGIN_PATH};
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::validation::{ensure_valid, registration_from_form};

/// Sign in and land on the dashboard
pub async fn handle_login(ctx: &AppContext, email: &str, password: &str) -> Result<Outcome> {
    debug!(email = %email, "Handling login");

    // Credentials are matched verbatim, so only blank fields are rejected here
    let mut errors = Vec::new();
    if email.trim().is_empty() {
        errors.push("Field email is required".to_string());
    }
    if password.is_empty() {
        errors.push("Field password is required".to_string());
    }
    ensure_valid(errors)?;

    ctx.session_manager.login(email, password).await?;
    Ok(Outcome::Navigate(HOME_PATH.to_string()))
}

/// Create a visitor account and send the user to the login page
pub async fn handle_register(ctx: &AppContext, form: &FormData) -> Result<Outcome> {
    debug!("Handling registration");

    let request = registration_from_form(form)?;
    ctx.session_manager.register(request).await?;
    Ok(Outcome::Navigate(LOGIN_PATH.to_string()))
}

pub fn handle_logout(ctx: &AppContext) -> Result<Outcome> {
    ctx.session_manager.logout()?;
    Ok(Outcome::Navigate(LOGIN_PATH.to_string()))
}
