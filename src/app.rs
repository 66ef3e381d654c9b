//! Application shell
//!
//! `App` owns the router and the open modal. Each event goes through
//! `dispatch`, which runs the matching handler, reports any failure as an
//! alert and returns the next `Frame`. No failure ends the application.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::config::Settings;
use crate::handlers::{auth, crud, modals, report_error, Action, Confirm, Outcome};
use crate::models::RecordId;
use crate::router::{Route, Router};
use crate::state::{AppContext, PersistenceAdapter, SessionStore};
use crate::utils::errors::{CourseDeskError, Result};
use crate::views::{pages, Chrome, Frame, Markup, Modal, ModalKind, View};

pub struct App {
    ctx: AppContext,
    router: Router,
    modal: Option<Modal>,
}

impl App {
    pub fn new(ctx: AppContext) -> Self {
        let router = Router::new(ctx.session.clone());
        Self {
            ctx,
            router,
            modal: None,
        }
    }

    /// Build the whole application from settings
    pub fn from_settings(settings: Settings, confirm: Arc<dyn Confirm>) -> Result<Self> {
        let storage = PersistenceAdapter::from_path(settings.storage.durable_path.as_deref())?;
        let ctx = AppContext::new(settings, storage, confirm)?;
        Ok(Self::new(ctx))
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn session(&self) -> &SessionStore {
        &self.ctx.session
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    /// Restore any saved session and render the initial route
    pub async fn start(&mut self) -> Frame {
        let restored = self.ctx.session_manager.restore();
        let initial = self.ctx.settings.ui.initial_route.clone();
        info!(restored = restored, initial_route = %initial, "Application started");
        self.navigate(&initial).await
    }

    pub async fn navigate(&mut self, path: &str) -> Frame {
        self.modal = None;
        let route = self.router.navigate(path);
        self.render(route).await
    }

    pub async fn back(&mut self) -> Frame {
        match self.router.back() {
            Some(route) => {
                self.modal = None;
                self.render(route).await
            }
            None => self.render_current().await,
        }
    }

    pub async fn forward(&mut self) -> Frame {
        match self.router.forward() {
            Some(route) => {
                self.modal = None;
                self.render(route).await
            }
            None => self.render_current().await,
        }
    }

    /// Gate and render the current history entry again
    pub async fn render_current(&mut self) -> Frame {
        let route = self.router.refresh();
        self.render(route).await
    }

    fn open_form_id(&self, user_form: bool) -> Option<RecordId> {
        match self.modal.as_ref().map(|modal| modal.kind) {
            Some(ModalKind::User { editing }) if user_form => editing,
            Some(ModalKind::Course { editing }) if !user_form => editing,
            _ => None,
        }
    }

    /// Run one user event and render the result
    pub async fn dispatch(&mut self, action: Action) -> Frame {
        let name = action.name();
        debug!(action = name, "Dispatching action");

        let outcome = match action {
            Action::Navigate(path) => return self.navigate(&path).await,
            Action::Back => return self.back().await,
            Action::Forward => return self.forward().await,
            Action::CloseModal => Ok(Outcome::CloseModal),
            Action::Login { email, password } => auth::handle_login(&self.ctx, &email, &password).await,
            Action::Register(form) => auth::handle_register(&self.ctx, &form).await,
            Action::Logout => auth::handle_logout(&self.ctx),
            Action::NewUser => modals::open_user_form(&self.ctx, None).await,
            Action::EditUser(id) => modals::open_user_form(&self.ctx, Some(id)).await,
            Action::SaveUser { id, form } => {
                let id = id.or_else(|| self.open_form_id(true));
                crud::save_user(&self.ctx, id, &form).await
            }
            Action::DeleteUser(id) => crud::delete_user(&self.ctx, id).await,
            Action::NewCourse => modals::open_course_form(&self.ctx, None).await,
            Action::EditCourse(id) => modals::open_course_form(&self.ctx, Some(id)).await,
            Action::SaveCourse { id, form } => {
                let id = id.or_else(|| self.open_form_id(false));
                crud::save_course(&self.ctx, id, &form).await
            }
            Action::DeleteCourse(id) => crud::delete_course(&self.ctx, id).await,
            Action::Enroll(course_id) => crud::enroll(&self.ctx, course_id).await,
            Action::CancelEnrollment(id) => crud::cancel_enrollment(&self.ctx, id).await,
        };

        match outcome {
            Ok(Outcome::Refresh) => self.render_current().await,
            Ok(Outcome::Navigate(path)) => self.navigate(&path).await,
            Ok(Outcome::OpenModal(modal)) => {
                self.modal = Some(modal);
                self.render_current().await
            }
            Ok(Outcome::CloseModal) => {
                self.modal = None;
                self.render_current().await
            }
            Err(e) => {
                if e.is_recoverable() {
                    warn!(action = name, error = %e, "Action failed");
                } else {
                    error!(action = name, error = %e, "Action failed");
                }
                report_error(self.ctx.notifier(), &e);
                self.render_current().await
            }
        }
    }

    async fn render(&mut self, route: Route) -> Frame {
        let session = self.ctx.session.snapshot();
        let services = &self.ctx.services;

        let view = match (&route, session.current_user.as_ref()) {
            (Route::Login, _) => Ok(pages::login()),
            (Route::Register, _) => Ok(pages::register()),
            (Route::NotFound(path), _) => Ok(pages::not_found(path)),
            (Route::Dashboard, Some(user)) => pages::dashboard(services, user).await,
            (Route::Users, Some(_)) => pages::users(services).await,
            (Route::Courses, Some(user)) => pages::courses(services, user).await,
            (Route::Enrollments, Some(user)) => pages::enrollments(services, user).await,
            (_, None) => Err(CourseDeskError::NotAuthenticated),
        };

        let view = view.unwrap_or_else(|e| {
            warn!(route = %route, error = %e, "Could not render page");
            View::new(
                "Error",
                Markup::raw(r#"<div class="load-error"><p>This page could not be loaded.</p></div>"#),
            )
        });

        let notifier = self.ctx.notifier();
        Frame {
            path: session.current_route.clone(),
            chrome: Chrome::for_session(&session),
            view,
            modal: self.modal.clone(),
            alerts: notifier.active_alerts(),
            loading: notifier.is_loading(),
        }
    }
}
