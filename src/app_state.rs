use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::Config,
    constants::question_bank,
    errors::AppResult,
    models::domain::QuestionBank,
    repositories::InMemorySessionRepository,
    services::{SessionService, WebhookGateway},
};

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        Self::with_bank(config, question_bank().clone())
    }

    /// Same wiring with an explicit bank, used by tests that drive the
    /// API against small synthetic banks.
    pub fn with_bank(config: Config, bank: QuestionBank) -> AppResult<Self> {
        let repository = Arc::new(InMemorySessionRepository::new());
        let gateway = Arc::new(WebhookGateway::new(
            &config.webhook_url,
            Duration::from_secs(config.webhook_timeout_secs),
        )?);
        let session_service = Arc::new(SessionService::new(
            repository,
            gateway,
            Arc::new(bank),
            Duration::from_millis(config.result_hold_ms),
        ));

        Ok(Self {
            session_service,
            config: Arc::new(config),
        })
    }
}
