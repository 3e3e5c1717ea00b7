pub mod lead_gateway;
pub mod scoring_service;
pub mod session_service;

pub use lead_gateway::{LeadGateway, LeadSubmission, WebhookGateway};
pub use scoring_service::ScoringService;
pub use session_service::SessionService;
