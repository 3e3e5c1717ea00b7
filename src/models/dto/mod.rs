pub mod request;
pub mod response;

pub use request::{AnswerInput, LeadInput};
pub use response::{AssessmentDto, ResultDto, SessionDto};
