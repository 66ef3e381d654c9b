//! Application context
//!
//! Everything a handler needs, built once at startup and passed explicitly.

use std::sync::Arc;

use crate::config::Settings;
use crate::handlers::confirm::Confirm;
use crate::services::{Notifier, ServiceFactory, SessionManager};
use crate::state::session::SessionStore;
use crate::state::storage::PersistenceAdapter;
use crate::utils::errors::Result;

/// Application-wide context containing services and settings
#[derive(Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub services: Arc<ServiceFactory>,
    pub storage: PersistenceAdapter,
    pub session: SessionStore,
    pub session_manager: Arc<SessionManager>,
    pub confirm: Arc<dyn Confirm>,
}

impl AppContext {
    /// Wire the services over the given storage and confirmation capability
    pub fn new(settings: Settings, storage: PersistenceAdapter, confirm: Arc<dyn Confirm>) -> Result<Self> {
        let services = Arc::new(ServiceFactory::new(&settings)?);
        let session = SessionStore::new();
        let session_manager = Arc::new(SessionManager::new(
            services.user_service.clone(),
            storage.clone(),
            session.clone(),
            services.notifier.clone(),
        ));

        Ok(Self {
            settings,
            services,
            storage,
            session,
            session_manager,
            confirm,
        })
    }

    pub fn notifier(&self) -> &Notifier {
        &self.services.notifier
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("settings", &self.settings)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
