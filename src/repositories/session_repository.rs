use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::QuizSession;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: QuizSession) -> AppResult<QuizSession>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<QuizSession>>;
    async fn update(&self, session: QuizSession) -> AppResult<QuizSession>;
    async fn count(&self) -> AppResult<usize>;
}

/// Process-lifetime store. Sessions are keyed by id, so concurrent
/// respondents never see each other's state; nothing is written to disk
/// because the funnel has no resume-after-reload feature.
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, QuizSession>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: QuizSession) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<QuizSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn update(&self, session: QuizSession) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(&session.id) {
            return Err(AppError::NotFound(format!(
                "Session with id '{}' not found",
                session.id
            )));
        }
        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn count(&self) -> AppResult<usize> {
        let sessions = self.sessions.read().await;
        Ok(sessions.len())
    }
}
