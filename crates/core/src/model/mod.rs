mod ids;
mod question;
mod session;

pub use ids::QuestionId;
pub use question::{normalize_label, AnswerOption, Question, QuestionError, QuestionPool};
pub use session::{AnswerOutcome, SessionEnd, SessionState, WRONG_ANSWER_LIMIT};
