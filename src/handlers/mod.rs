pub mod assessment_handler;
pub mod session_handler;

pub use assessment_handler::{get_assessment, health_check};
pub use session_handler::{
    create_session, get_session, start_session, submit_answer, submit_lead,
};
