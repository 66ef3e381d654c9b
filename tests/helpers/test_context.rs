//! Test context setup
//!
//! Builds a full `App` against a fake backend with in-memory storage and a
//! fixed confirmation answer.

use std::sync::{Arc, Once};

use CourseDesk::{
    handlers::Action,
    services::Alert,
    state::{AppContext, PersistenceAdapter},
    views::Frame,
    App, AutoConfirm, Settings,
};

use super::backend_mock::MockBackend;

static INIT: Once = Once::new();

/// Initialize logging for tests (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Settings pointing at a test backend, with nothing on disk
pub fn test_settings(base_url: &str) -> Settings {
    let mut settings = Settings::default();
    settings.api.base_url = base_url.to_string();
    settings.api.timeout_seconds = 5;
    settings.storage.durable_path = None;
    settings.ui.alert_ttl_seconds = 60;
    settings
}

/// Test context containing the application and its collaborators
pub struct TestContext {
    pub backend: MockBackend,
    pub app: App,
    pub storage: PersistenceAdapter,
    pub confirm: Arc<AutoConfirm>,
}

impl TestContext {
    /// Seeded backend, confirmations accepted
    pub async fn new() -> Self {
        Self::with_confirm(true).await
    }

    pub async fn with_confirm(answer: bool) -> Self {
        init_test_logging();
        let backend = MockBackend::seeded().await;
        let storage = PersistenceAdapter::in_memory();
        let confirm = Arc::new(AutoConfirm::new(answer));
        let app = build_app(&backend.uri(), storage.clone(), confirm.clone());
        Self {
            backend,
            app,
            storage,
            confirm,
        }
    }

    /// A second application over the same backend and storage, as after a reload
    pub fn reload(&self) -> App {
        build_app(&self.backend.uri(), self.storage.clone(), self.confirm.clone())
    }

    pub fn ctx(&self) -> &AppContext {
        self.app.context()
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Frame {
        self.app
            .dispatch(Action::Login {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
    }

    /// Take every alert raised so far
    pub fn take_alerts(&self) -> Vec<Alert> {
        self.ctx().notifier().drain()
    }
}

pub fn build_app(base_url: &str, storage: PersistenceAdapter, confirm: Arc<AutoConfirm>) -> App {
    let ctx = AppContext::new(test_settings(base_url), storage, confirm).unwrap();
    App::new(ctx)
}
