use once_cell::sync::Lazy;

use crate::models::domain::{Category, Question, QuestionBank, ScoringOption};

/// The sedation-readiness bank: five categories of five questions each.
/// The 5x5 shape is the current data set, not an engine invariant.
static QUESTION_BANK: Lazy<QuestionBank> = Lazy::new(|| QuestionBank {
    categories: vec![
        Category {
            id: "demand".to_string(),
            title: "Patient Demand".to_string(),
            image_url: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?auto=format&fit=crop&q=80&w=2070".to_string(),
            questions: vec![
                Question::new(1, "Do you regularly treat patients with dental anxiety or fear?", "demand"),
                Question::new(2, "Have you lost cases due to patients not wanting treatment while awake?", "demand"),
                Question::new(3, "Do patients ask if you offer sedation?", "demand"),
                Question::new(4, "Would offering IV sedation increase your case acceptance?", "demand"),
                Question::new(5, "Are you turning away complex procedures because of patient anxiety?", "demand"),
            ],
        },
        Category {
            id: "clinical".to_string(),
            title: "Clinical Readiness".to_string(),
            image_url: "https://images.unsplash.com/photo-1629909613654-28e377c37b09?auto=format&fit=crop&q=80&w=2068".to_string(),
            questions: vec![
                Question::new(6, "Are you comfortable with moderate sedation concepts?", "clinical"),
                Question::new(7, "Have you completed any sedation or anesthesia CE?", "clinical"),
                Question::new(8, "Would you feel confident managing a sedated patient with proper training?", "clinical"),
                Question::new(9, "Do you understand the difference between oral, nitrous, and IV sedation?", "clinical"),
                Question::new(10, "Are you personally motivated to perform sedation vs referring out?", "clinical"),
            ],
        },
        Category {
            id: "infrastructure".to_string(),
            title: "Team & Office Infrastructure".to_string(),
            image_url: "https://images.unsplash.com/photo-1519494026892-80bbd2d6fd0d?auto=format&fit=crop&q=80&w=2053".to_string(),
            questions: vec![
                Question::new(11, "Do you have 2+ team members open to ACLS training?", "infrastructure"),
                Question::new(12, "Is your office equipped for continuous patient monitoring?", "infrastructure"),
                Question::new(13, "Do you have a space suitable for post-op recovery?", "infrastructure"),
                Question::new(14, "Are your staff confident with emergency protocols?", "infrastructure"),
                Question::new(15, "Have you implemented any sedation protocols before?", "infrastructure"),
            ],
        },
        Category {
            id: "compliance".to_string(),
            title: "Licensing & Compliance".to_string(),
            image_url: "https://images.unsplash.com/photo-1554224155-6726b3ff858f?auto=format&fit=crop&q=80&w=2072".to_string(),
            questions: vec![
                Question::new(16, "Have you researched IV sedation permit requirements for your state?", "compliance"),
                Question::new(17, "Do you currently hold any sedation-related licenses?", "compliance"),
                Question::new(18, "Does your state allow general dentists to administer IV sedation?", "compliance"),
                Question::new(19, "Do you feel confident navigating the licensing and permit process?", "compliance"),
                Question::new(20, "Do you know what documentation and training hours are required?", "compliance"),
            ],
        },
        Category {
            id: "business".to_string(),
            title: "Business & Financial Readiness".to_string(),
            image_url: "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?auto=format&fit=crop&q=80&w=1932".to_string(),
            questions: vec![
                Question::new(21, "Are you looking to grow monthly production without adding more patients?", "business"),
                Question::new(22, "Would sedation help you fill downtime or open up new procedures?", "business"),
                Question::new(23, "Do you have $12K–$17K allocated for business-enhancing CE?", "business"),
                Question::new(24, "Are you interested in long-term ROI, not just CE credits?", "business"),
                Question::new(25, "Would you value support around billing/coding for sedation procedures?", "business"),
            ],
        },
    ],
    options: scoring_options(),
});

fn scoring_options() -> Vec<ScoringOption> {
    vec![
        ScoringOption { value: 0, label: "Not at all".to_string() },
        ScoringOption { value: 1, label: "Somewhat".to_string() },
        ScoringOption { value: 2, label: "Mostly".to_string() },
        ScoringOption { value: 3, label: "Absolutely".to_string() },
    ]
}

pub fn question_bank() -> &'static QuestionBank {
    &QUESTION_BANK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_has_twenty_five_questions_in_five_categories() {
        let bank = question_bank();

        assert_eq!(bank.categories.len(), 5);
        assert_eq!(bank.question_count(), 25);
        assert!(bank.categories.iter().all(|cat| cat.questions.len() == 5));
    }

    #[test]
    fn question_ids_are_unique_and_reference_their_category() {
        let bank = question_bank();

        let mut seen = std::collections::HashSet::new();
        for category in &bank.categories {
            for question in &category.questions {
                assert!(seen.insert(question.id), "duplicate id {}", question.id);
                assert_eq!(question.category_id, category.id);
            }
        }
    }

    #[test]
    fn scale_runs_from_zero_to_three() {
        let bank = question_bank();

        let values: Vec<i16> = bank.options.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![0, 1, 2, 3]);
        assert_eq!(bank.max_total(), 75);
    }
}
