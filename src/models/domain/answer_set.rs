use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The respondent's recorded per-question scores. Grows one entry per
/// answered question and never shrinks; a question id that was never
/// recorded reads as 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerSet(HashMap<i32, i16>);

impl AnswerSet {
    pub fn new() -> Self {
        AnswerSet(HashMap::new())
    }

    pub fn record(&mut self, question_id: i32, score: i16) {
        self.0.insert(question_id, score);
    }

    /// Lenient default: unanswered questions contribute 0, by design.
    pub fn score_for(&self, question_id: i32) -> i16 {
        self.0.get(&question_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
