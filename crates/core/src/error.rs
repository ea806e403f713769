use thiserror::Error;

use crate::model::QuestionId;

pub use crate::model::QuestionError;

/// Precondition failures raised by the quiz session controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session already submitted")]
    Submitted,

    #[error("question index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{option:?} is not an option of question {id}")]
    UnknownOption { id: QuestionId, option: String },

    #[error("quiz duration must be at least one second")]
    ZeroDuration,

    #[error(transparent)]
    Questions(#[from] QuestionError),
}
