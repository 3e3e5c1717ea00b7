use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::answer_set::AnswerSet;
use crate::models::domain::lead::Lead;
use crate::models::domain::question::{Question, QuestionBank};
use crate::models::domain::quiz_result::QuizResult;

/// Phases are strictly forward: Welcome → Questioning → LeadCapture →
/// Calculating → Results, with Questioning looping on itself while
/// unanswered questions remain. Results is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionPhase {
    Welcome,
    Questioning,
    LeadCapture,
    Calculating,
    Results,
}

/// One respondent's assessment session. Transition methods enforce the
/// phase order; orchestration (scoring, webhook delivery, timing) lives in
/// the session service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSession {
    pub id: Uuid,
    pub phase: SessionPhase,
    pub cursor: usize, // Flat index into the bank's question order
    pub answers: AnswerSet,
    pub lead: Option<Lead>,
    pub result: Option<QuizResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    pub fn new() -> Self {
        QuizSession {
            id: Uuid::new_v4(),
            phase: SessionPhase::Welcome,
            cursor: 0,
            answers: AnswerSet::new(),
            lead: None,
            result: None,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    /// Explicit start action. Repeating it mid-quiz is a no-op so a stray
    /// second click can never reset progress; an empty bank skips straight
    /// to lead capture.
    pub fn start(&mut self, bank: &QuestionBank) -> AppResult<()> {
        match self.phase {
            SessionPhase::Welcome => {
                self.cursor = 0;
                self.answers = AnswerSet::new();
                self.phase = if bank.question_count() == 0 {
                    SessionPhase::LeadCapture
                } else {
                    SessionPhase::Questioning
                };
                self.touch();
                Ok(())
            }
            SessionPhase::Questioning => Ok(()),
            phase => Err(AppError::InvalidTransition(format!(
                "cannot start a session in the {:?} phase",
                phase
            ))),
        }
    }

    pub fn current_question<'a>(&self, bank: &'a QuestionBank) -> Option<&'a Question> {
        match self.phase {
            SessionPhase::Questioning => bank.question_at(self.cursor),
            _ => None,
        }
    }

    /// Records an answer for the current question, then advances. The
    /// answer must be in the set before the cursor moves: the scoring
    /// engine only ever sees the answer set, not the cursor.
    pub fn record_answer(&mut self, score: i16, bank: &QuestionBank) -> AppResult<()> {
        if self.phase != SessionPhase::Questioning {
            return Err(AppError::InvalidTransition(format!(
                "answers are not accepted in the {:?} phase",
                self.phase
            )));
        }
        if !bank.is_valid_score(score) {
            return Err(AppError::ValidationError(format!(
                "score {} is not one of the answer options",
                score
            )));
        }

        let question = self.current_question(bank).ok_or_else(|| {
            AppError::InternalError(format!(
                "question cursor {} is out of range for the bank",
                self.cursor
            ))
        })?;

        self.answers.record(question.id, score);
        self.cursor += 1;
        if self.cursor >= bank.question_count() {
            self.phase = SessionPhase::LeadCapture;
        }
        self.touch();
        Ok(())
    }

    /// LeadCapture → Calculating. The lead arrives already validated at
    /// the request layer; an invalid submission never reaches this method.
    pub fn capture_lead(&mut self, lead: Lead) -> AppResult<()> {
        if self.phase != SessionPhase::LeadCapture {
            return Err(AppError::InvalidTransition(format!(
                "a lead cannot be captured in the {:?} phase",
                self.phase
            )));
        }

        self.lead = Some(lead);
        self.phase = SessionPhase::Calculating;
        self.touch();
        Ok(())
    }

    /// Stores the computed result while still in Calculating, ahead of the
    /// webhook attempt, so a delivery failure can never lose it.
    pub fn record_result(&mut self, result: QuizResult) -> AppResult<()> {
        if self.phase != SessionPhase::Calculating {
            return Err(AppError::InvalidTransition(format!(
                "a result cannot be recorded in the {:?} phase",
                self.phase
            )));
        }

        self.result = Some(result);
        self.touch();
        Ok(())
    }

    /// Calculating → Results. Terminal for the session.
    pub fn finish(&mut self) -> AppResult<()> {
        if self.phase != SessionPhase::Calculating {
            return Err(AppError::InvalidTransition(format!(
                "cannot finish a session in the {:?} phase",
                self.phase
            )));
        }
        if self.result.is_none() {
            return Err(AppError::InternalError(
                "finishing a session with no recorded result".to_string(),
            ));
        }

        self.phase = SessionPhase::Results;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.modified_at = Some(Utc::now());
    }
}
