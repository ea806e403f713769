#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod contracts;
pub mod error;
pub mod http_api;
pub mod quiz_flow;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use config::{ApiStyle, QuizApiConfig};
pub use contracts::{
    Credentials, IdentityProvider, QuestionProvider, Student, SubmissionRequest, SubmissionService,
};
pub use error::ServiceError;
pub use http_api::HttpQuizApi;
pub use quiz_flow::{CompletedQuiz, QuizFlowService};
