use services::ServiceError;

use crate::i18n::Labels;

/// User-facing failure shown in the blocking alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    MissingDetails,
    LoginFailed,
    NoQuestions,
    Connection,
    SessionUnavailable,
    SubmitFailed,
    NothingToReanalyze,
    ReanalyzeFailed,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self, labels: &Labels) -> &'static str {
        match self {
            ViewError::MissingDetails => labels.missing_details,
            ViewError::LoginFailed => labels.login_failed,
            ViewError::NoQuestions => labels.no_questions,
            ViewError::Connection => labels.connection_failed,
            ViewError::SessionUnavailable => labels.session_unavailable,
            ViewError::SubmitFailed => labels.submit_failed,
            ViewError::NothingToReanalyze => labels.nothing_to_reanalyze,
            ViewError::ReanalyzeFailed => labels.reanalyze_failed,
            ViewError::Unknown => labels.unknown_error,
        }
    }

    #[must_use]
    pub fn from_login(err: &ServiceError) -> Self {
        match err {
            ServiceError::MissingField { .. } => ViewError::MissingDetails,
            _ => ViewError::LoginFailed,
        }
    }

    /// Connectivity problems and bad question payloads read differently.
    #[must_use]
    pub fn from_load(err: &ServiceError) -> Self {
        match err {
            ServiceError::Http(_) | ServiceError::HttpStatus(_) => ViewError::Connection,
            _ => ViewError::NoQuestions,
        }
    }

    #[must_use]
    pub fn from_submit(_err: &ServiceError) -> Self {
        ViewError::SubmitFailed
    }

    #[must_use]
    pub fn from_reanalyze(err: &ServiceError) -> Self {
        match err {
            ServiceError::NothingToReanalyze => ViewError::NothingToReanalyze,
            _ => ViewError::ReanalyzeFailed,
        }
    }
}
