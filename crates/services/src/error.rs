//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::error::SessionError;
use quiz_core::model::QuestionError;

/// Errors emitted by the quiz collaborators and the flow orchestrator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("no questions were returned")]
    NoQuestions,
    #[error("no answers found to re-analyze")]
    NothingToReanalyze,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("server reported an error: {0}")]
    Server(String),
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Questions(#[from] QuestionError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ServiceError {
    /// True for failures that came from talking to the server rather than from
    /// local validation.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            ServiceError::HttpStatus(_)
                | ServiceError::Server(_)
                | ServiceError::Decode(_)
                | ServiceError::Http(_)
        )
    }
}
