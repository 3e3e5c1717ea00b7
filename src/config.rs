use std::env;

use crate::constants::DEFAULT_WEBHOOK_URL;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub webhook_url: String,
    pub webhook_timeout_secs: u64,
    pub result_hold_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            webhook_url: env::var("WEBHOOK_URL")
                .unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string()),
            webhook_timeout_secs: env::var("WEBHOOK_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(10),
            // The widget's "analyzing your responses" hold before results
            result_hold_ms: env::var("RESULT_HOLD_MS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(1500),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if the webhook target is unusable
    pub fn validate_for_production(&self) {
        if self.webhook_url.is_empty() || !self.webhook_url.starts_with("http") {
            panic!(
                "FATAL: WEBHOOK_URL '{}' is not a usable collection endpoint! Set WEBHOOK_URL to the lead collector's hook URL.",
                self.webhook_url
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            webhook_url: "http://localhost:9/hooks/test".to_string(),
            webhook_timeout_secs: 1,
            result_hold_ms: 0,
        }
    }
}
