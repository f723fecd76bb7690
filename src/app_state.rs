// app_state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::repositories::contact_repository::ContactStore;
use crate::services::email_service::EmailService;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Accessor for the contact-message collection
    pub store: ContactStore,
    /// Outbound email notifier
    pub mailer: EmailService,
    /// Process configuration loaded at startup
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: ContactStore, mailer: EmailService, config: Arc<AppConfig>) -> Self {
        Self {
            store,
            mailer,
            config,
        }
    }
}
