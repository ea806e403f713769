mod answers;
mod ids;
mod question;
mod result;

pub use answers::{AnswerSheet, SubmitTrigger};
pub use ids::{QuestionId, StudentId};
pub use question::{DEFAULT_SECTION, Question, QuestionError, QuestionSet};
pub use result::QuizResult;
