use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::Lead;

// Same shape the widget has always enforced: something@something.tld.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\S+@\S+\.\S+$").expect("EMAIL_REGEX is a valid regex pattern")
});

/// Answer for the session's current question. The value is checked
/// against the bank's answer scale downstream, not here, because the
/// scale is configuration rather than a request-shape constant.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerInput {
    pub score: i16,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LeadInput {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(regex(path = *EMAIL_REGEX, message = "Valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, max = 40, message = "Phone number is required"))]
    pub phone: String,
}

impl From<LeadInput> for Lead {
    fn from(input: LeadInput) -> Self {
        Lead {
            name: input.name,
            email: input.email,
            phone: input.phone,
        }
    }
}
