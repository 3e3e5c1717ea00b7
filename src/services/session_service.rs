use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{QuestionBank, QuizSession};
use crate::models::dto::request::LeadInput;
use crate::repositories::SessionRepository;
use crate::services::lead_gateway::{LeadGateway, LeadSubmission};
use crate::services::scoring_service::ScoringService;

/// Orchestrates a session's walk through the phases. Transition rules
/// live on `QuizSession`; this service adds persistence, scoring, webhook
/// delivery and the perceptual hold before results.
pub struct SessionService {
    repository: Arc<dyn SessionRepository>,
    gateway: Arc<dyn LeadGateway>,
    bank: Arc<QuestionBank>,
    result_hold: Duration,
}

impl SessionService {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        gateway: Arc<dyn LeadGateway>,
        bank: Arc<QuestionBank>,
        result_hold: Duration,
    ) -> Self {
        Self {
            repository,
            gateway,
            bank,
            result_hold,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub async fn create_session(&self) -> AppResult<QuizSession> {
        let session = QuizSession::new();
        log::info!("created session {}", session.id);
        self.repository.insert(session).await
    }

    pub async fn get_session(&self, id: &Uuid) -> AppResult<QuizSession> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session with id '{}' not found", id)))
    }

    pub async fn start(&self, id: &Uuid) -> AppResult<QuizSession> {
        let mut session = self.get_session(id).await?;
        session.start(&self.bank)?;
        self.repository.update(session).await
    }

    pub async fn record_answer(&self, id: &Uuid, score: i16) -> AppResult<QuizSession> {
        let mut session = self.get_session(id).await?;
        session.record_answer(score, &self.bank)?;
        self.repository.update(session).await
    }

    /// Lead capture plus the calculating flow, in contract order: score
    /// and store the result, attempt delivery, hold, then reveal. The
    /// result is on the session before the webhook fires, so a delivery
    /// failure can never lose it; an invalid lead is rejected up front and
    /// the session stays in lead capture.
    pub async fn submit_lead(&self, id: &Uuid, input: LeadInput) -> AppResult<QuizSession> {
        input.validate()?;

        let mut session = self.get_session(id).await?;
        session.capture_lead(input.into())?;

        let result = ScoringService::compute_result(&session.answers, &self.bank);
        session.record_result(result)?;
        // Persisted in Calculating: the session rejects further domain
        // events until it reaches Results
        let session = self.repository.update(session).await?;

        self.deliver_lead(&session).await;

        if !self.result_hold.is_zero() {
            tokio::time::sleep(self.result_hold).await;
        }

        let mut session = self.get_session(id).await?;
        session.finish()?;
        log::info!(
            "session {} finished with total {}",
            session.id,
            session.result.as_ref().map(|r| r.total_score).unwrap_or(0)
        );
        self.repository.update(session).await
    }

    /// Best-effort delivery. Failures are logged for the operator and
    /// swallowed: the respondent sees their results either way.
    async fn deliver_lead(&self, session: &QuizSession) {
        let (lead, result) = match (&session.lead, &session.result) {
            (Some(lead), Some(result)) => (lead, result),
            _ => return,
        };

        let submission = match LeadSubmission::build(lead, result) {
            Ok(submission) => submission,
            Err(err) => {
                log::error!(
                    "could not build lead submission for session {}: {}",
                    session.id,
                    err
                );
                return;
            }
        };

        match self.gateway.deliver(&submission).await {
            Ok(()) => log::info!("lead delivered for session {}", session.id),
            Err(err) => log::error!("lead delivery failed for session {}: {}", session.id, err),
        }
    }
}
