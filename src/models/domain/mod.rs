pub mod answer_set;
pub mod lead;
pub mod question;
pub mod quiz_result;
pub mod session;

pub use answer_set::AnswerSet;
pub use lead::Lead;
pub use question::{Category, Question, QuestionBank, ScoringOption};
pub use quiz_result::{QuizResult, ReadinessTier};
pub use session::{QuizSession, SessionPhase};
