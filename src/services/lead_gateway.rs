use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Lead, QuizResult};

/// Flat payload the collection endpoint expects. `category_scores` is the
/// breakdown serialized to a JSON string inside the outer JSON body; the
/// receiver parses the nested document itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub total_score: i16,
    pub result_tier: String,
    pub category_scores: String,
    pub timestamp: String,
}

impl LeadSubmission {
    pub fn build(lead: &Lead, result: &QuizResult) -> AppResult<Self> {
        Ok(LeadSubmission {
            name: lead.name.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            total_score: result.total_score,
            result_tier: result.tier.label().to_string(),
            category_scores: serde_json::to_string(&result.category_scores)?,
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}

/// Outbound integration point for finished lead+result data. At-most-once:
/// one attempt, no retry, no queue. The caller decides what a failure
/// means (for this funnel: log it and show results anyway).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadGateway: Send + Sync {
    async fn deliver(&self, submission: &LeadSubmission) -> AppResult<()>;
}

pub struct WebhookGateway {
    client: reqwest::Client,
    url: String,
}

impl WebhookGateway {
    pub fn new(url: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl LeadGateway for WebhookGateway {
    async fn deliver(&self, submission: &LeadSubmission) -> AppResult<()> {
        let response = self.client.post(&self.url).json(submission).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AppError::WebhookError(format!(
                "webhook responded with {}: {}",
                status, body
            )));
        }

        log::debug!("webhook accepted submission for {}", submission.email);
        Ok(())
    }
}
