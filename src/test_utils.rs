#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{Category, Lead, Question, QuestionBank, ScoringOption};
    use crate::models::dto::request::LeadInput;

    /// Two categories of two questions each, on the standard 0-3 scale.
    /// Small enough that expected totals are easy to read in tests.
    pub fn two_by_two_bank() -> QuestionBank {
        QuestionBank {
            categories: vec![
                Category {
                    id: "cat-a".to_string(),
                    title: "Category A".to_string(),
                    image_url: "https://example.com/a.jpg".to_string(),
                    questions: vec![
                        Question::new(1, "First question in A?", "cat-a"),
                        Question::new(2, "Second question in A?", "cat-a"),
                    ],
                },
                Category {
                    id: "cat-b".to_string(),
                    title: "Category B".to_string(),
                    image_url: "https://example.com/b.jpg".to_string(),
                    questions: vec![
                        Question::new(3, "First question in B?", "cat-b"),
                        Question::new(4, "Second question in B?", "cat-b"),
                    ],
                },
            ],
            options: standard_options(),
        }
    }

    pub fn empty_bank() -> QuestionBank {
        QuestionBank {
            categories: vec![],
            options: standard_options(),
        }
    }

    pub fn standard_options() -> Vec<ScoringOption> {
        [(0, "Not at all"), (1, "Somewhat"), (2, "Mostly"), (3, "Absolutely")]
            .into_iter()
            .map(|(value, label)| ScoringOption {
                value,
                label: label.to_string(),
            })
            .collect()
    }

    pub fn test_lead() -> Lead {
        Lead::new("Dr. John Doe", "doctor@example.com", "555-123-4567")
    }

    pub fn valid_lead_input() -> LeadInput {
        LeadInput {
            name: "Dr. John Doe".to_string(),
            email: "doctor@example.com".to_string(),
            phone: "555-123-4567".to_string(),
        }
    }
}
