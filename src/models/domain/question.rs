use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i32,             // Unique across the whole bank
    pub text: String,
    pub category_id: String, // Back-reference to the owning category
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: String,    // Stable slug, e.g. "clinical"
    pub title: String, // Display title, keys the result breakdown
    pub image_url: String,
    pub questions: Vec<Question>,
}

/// One selectable answer option. The scale is configuration data the
/// engine consumes, not an engine constant.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoringOption {
    pub value: i16,
    pub label: String,
}

/// Ordered categories plus the answer scale. Read-only input to the
/// state machine and the scoring engine; built once at process start.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionBank {
    pub categories: Vec<Category>,
    pub options: Vec<ScoringOption>,
}

impl Question {
    pub fn new(id: i32, text: &str, category_id: &str) -> Self {
        Question {
            id,
            text: text.to_string(),
            category_id: category_id.to_string(),
        }
    }
}

impl QuestionBank {
    /// All questions in presentation order (category order, then question
    /// order within the category).
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.categories.iter().flat_map(|cat| cat.questions.iter())
    }

    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|cat| cat.questions.len()).sum()
    }

    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions().nth(index)
    }

    pub fn category_for(&self, question: &Question) -> Option<&Category> {
        self.categories
            .iter()
            .find(|cat| cat.id == question.category_id)
    }

    pub fn is_valid_score(&self, score: i16) -> bool {
        self.options.iter().any(|option| option.value == score)
    }

    pub fn max_option_value(&self) -> i16 {
        self.options
            .iter()
            .map(|option| option.value)
            .max()
            .unwrap_or(0)
    }

    /// Highest achievable grand total for this bank.
    pub fn max_total(&self) -> i16 {
        self.question_count() as i16 * self.max_option_value()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::fixtures::two_by_two_bank;

    #[test]
    fn questions_iterate_in_category_then_question_order() {
        let bank = two_by_two_bank();
        let ids: Vec<i32> = bank.questions().map(|q| q.id).collect();

        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(bank.question_count(), 4);
    }

    #[test]
    fn question_at_resolves_flat_index() {
        let bank = two_by_two_bank();

        assert_eq!(bank.question_at(0).map(|q| q.id), Some(1));
        assert_eq!(bank.question_at(3).map(|q| q.id), Some(4));
        assert!(bank.question_at(4).is_none());
    }

    #[test]
    fn category_for_follows_back_reference() {
        let bank = two_by_two_bank();
        let question = bank.question_at(2).expect("bank has four questions");

        let category = bank
            .category_for(question)
            .expect("question references a real category");
        assert_eq!(category.id, question.category_id);
    }

    #[test]
    fn score_validity_comes_from_the_scale() {
        let bank = two_by_two_bank();

        assert!(bank.is_valid_score(0));
        assert!(bank.is_valid_score(3));
        assert!(!bank.is_valid_score(4));
        assert!(!bank.is_valid_score(-1));
    }

    #[test]
    fn max_total_scales_with_bank_size() {
        let bank = two_by_two_bank();
        assert_eq!(bank.max_total(), 12); // 4 questions x max option 3
    }
}
