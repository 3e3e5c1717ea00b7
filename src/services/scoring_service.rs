use std::collections::BTreeMap;

use crate::models::domain::{AnswerSet, QuestionBank, QuizResult, ReadinessTier};

/// Minimum grand total for "You’re Ready".
pub const READY_THRESHOLD: i16 = 60;
/// Minimum grand total for "Almost There"; anything below is "Not Yet Ready".
pub const ALMOST_THERE_THRESHOLD: i16 = 40;

pub struct ScoringService;

impl ScoringService {
    /// Score a (possibly partial) answer set against the bank.
    ///
    /// Categories are walked in bank order; a question with no recorded
    /// answer contributes 0. Deterministic and side-effect free, with no
    /// error path.
    pub fn compute_result(answers: &AnswerSet, bank: &QuestionBank) -> QuizResult {
        let mut total_score: i16 = 0;
        let mut category_scores = BTreeMap::new();

        for category in &bank.categories {
            let mut subtotal: i16 = 0;
            for question in &category.questions {
                let score = answers.score_for(question.id);
                subtotal += score;
                total_score += score;
            }
            category_scores.insert(category.title.clone(), subtotal);
        }

        QuizResult {
            total_score,
            tier: Self::classify(total_score),
            category_scores,
        }
    }

    /// Tier bands are contiguous with inclusive lower bounds.
    pub fn classify(total_score: i16) -> ReadinessTier {
        if total_score >= READY_THRESHOLD {
            ReadinessTier::Ready
        } else if total_score >= ALMOST_THERE_THRESHOLD {
            ReadinessTier::AlmostThere
        } else {
            ReadinessTier::NotYetReady
        }
    }
}
