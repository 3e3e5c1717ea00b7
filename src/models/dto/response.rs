use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::{
    Category, QuestionBank, QuizResult, QuizSession, ScoringOption, SessionPhase,
};

#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: i32,
    pub text: String,
    pub category_id: String,
    pub category_title: String,
}

/// Progress for the widget's "Question N of M" bar. `position` is
/// 1-based and only advances while questioning.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressDto {
    pub position: usize,
    pub total: usize,
    pub answered: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScoreDto {
    pub category: String,
    pub score: i16,
    pub max: i16,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultDto {
    pub total_score: i16,
    pub max_score: i16,
    pub tier: String,
    pub category_scores: Vec<CategoryScoreDto>, // Bank order, for display
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionDto {
    pub id: Uuid,
    pub phase: SessionPhase,
    pub progress: ProgressDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultDto>,
}

impl SessionDto {
    pub fn from_session(session: &QuizSession, bank: &QuestionBank) -> Self {
        let total = bank.question_count();
        let question = session.current_question(bank).map(|q| QuestionDto {
            id: q.id,
            text: q.text.clone(),
            category_id: q.category_id.clone(),
            category_title: bank
                .category_for(q)
                .map(|cat| cat.title.clone())
                .unwrap_or_default(),
        });

        let position = match session.phase {
            SessionPhase::Welcome => 0,
            SessionPhase::Questioning => session.cursor + 1,
            _ => total,
        };

        SessionDto {
            id: session.id,
            phase: session.phase,
            progress: ProgressDto {
                position,
                total,
                answered: session.answers.len(),
            },
            question,
            result: session
                .result
                .as_ref()
                .map(|result| ResultDto::from_result(result, bank)),
        }
    }
}

impl ResultDto {
    pub fn from_result(result: &QuizResult, bank: &QuestionBank) -> Self {
        let max_per_question = bank.max_option_value();
        let category_scores = bank
            .categories
            .iter()
            .map(|cat| CategoryScoreDto {
                category: cat.title.clone(),
                score: result.category_scores.get(&cat.title).copied().unwrap_or(0),
                max: cat.questions.len() as i16 * max_per_question,
            })
            .collect();

        ResultDto {
            total_score: result.total_score,
            max_score: bank.max_total(),
            tier: result.tier.label().to_string(),
            category_scores,
        }
    }
}

/// Everything the widget needs to render the quiz: ordered categories
/// with their questions, plus the answer scale.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentDto {
    pub categories: Vec<Category>,
    pub options: Vec<ScoringOption>,
    pub question_count: usize,
}

impl From<&QuestionBank> for AssessmentDto {
    fn from(bank: &QuestionBank) -> Self {
        AssessmentDto {
            categories: bank.categories.clone(),
            options: bank.options.clone(),
            question_count: bank.question_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::scoring_service::ScoringService;
    use crate::test_utils::fixtures::two_by_two_bank;

    #[test]
    fn test_session_dto_exposes_current_question_and_progress() {
        let bank = two_by_two_bank();
        let mut session = QuizSession::new();
        session.start(&bank).unwrap();
        session.record_answer(2, &bank).unwrap();

        let dto = SessionDto::from_session(&session, &bank);

        assert_eq!(dto.phase, SessionPhase::Questioning);
        assert_eq!(dto.progress.position, 2);
        assert_eq!(dto.progress.total, 4);
        assert_eq!(dto.progress.answered, 1);
        let question = dto.question.expect("a current question while questioning");
        assert_eq!(question.id, 2);
        assert_eq!(question.category_title, "Category A");
    }

    #[test]
    fn test_result_dto_keeps_bank_order_and_maxima() {
        let bank = two_by_two_bank();
        let mut session = QuizSession::new();
        session.start(&bank).unwrap();
        for score in [3, 3, 0, 0] {
            session.record_answer(score, &bank).unwrap();
        }

        let result = ScoringService::compute_result(&session.answers, &bank);
        let dto = ResultDto::from_result(&result, &bank);

        assert_eq!(dto.total_score, 6);
        assert_eq!(dto.max_score, 12);
        assert_eq!(dto.tier, "Not Yet Ready");
        assert_eq!(dto.category_scores[0].category, "Category A");
        assert_eq!(dto.category_scores[0].score, 6);
        assert_eq!(dto.category_scores[0].max, 6);
        assert_eq!(dto.category_scores[1].category, "Category B");
        assert_eq!(dto.category_scores[1].score, 0);
    }

    #[test]
    fn test_assessment_dto_mirrors_the_bank() {
        let bank = two_by_two_bank();
        let dto = AssessmentDto::from(&bank);

        assert_eq!(dto.categories.len(), 2);
        assert_eq!(dto.options.len(), 4);
        assert_eq!(dto.question_count, 4);
    }
}
