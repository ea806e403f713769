use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use quiz_core::model::{Question, QuestionError, QuestionId, QuestionSet, QuizResult, StudentId};

use crate::config::QuizApiConfig;
use crate::contracts::{
    Credentials, IdentityProvider, QuestionProvider, Student, SubmissionRequest, SubmissionService,
};
use crate::error::ServiceError;

/// Subject label used when the question endpoint does not name one.
pub const DEFAULT_SUBJECT: &str = "Unified Test";

/// JSON-over-HTTP client for the quiz backend. Implements all three collaborator contracts.
#[derive(Clone)]
pub struct HttpQuizApi {
    client: Client,
    config: QuizApiConfig,
}

impl HttpQuizApi {
    /// # Errors
    ///
    /// Returns `ServiceError::Http` if the HTTP client cannot be built.
    pub fn new(config: QuizApiConfig) -> Result<Self, ServiceError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &QuizApiConfig {
        &self.config
    }
}

#[async_trait]
impl IdentityProvider for HttpQuizApi {
    async fn login(&self, credentials: &Credentials) -> Result<Student, ServiceError> {
        let url = self.config.endpoint(self.config.style().login_path())?;
        debug!(%url, "logging in");
        let response = self
            .client
            .post(url)
            .json(&LoginRequest {
                name: credentials.name(),
                roll_no: credentials.roll_no(),
            })
            .send()
            .await?;

        let body: LoginResponse = read_json(response).await?;
        let id = body
            .student_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ServiceError::Server("login response had no student_id".into()))?;

        Ok(Student {
            id: StudentId::new(id),
            name: body
                .name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| credentials.name().to_string()),
            roll_no: credentials.roll_no().to_string(),
        })
    }
}

#[async_trait]
impl QuestionProvider for HttpQuizApi {
    async fn fetch_questions(&self) -> Result<QuestionSet, ServiceError> {
        let url = self.config.endpoint(self.config.style().questions_path())?;
        debug!(%url, "fetching questions");
        let response = self.client.get(url).send().await?;
        let body: QuestionsResponse = read_json(response).await?;

        let wire = body.questions.unwrap_or_default();
        if wire.is_empty() {
            return Err(ServiceError::NoQuestions);
        }
        let questions = wire
            .into_iter()
            .map(WireQuestion::into_question)
            .collect::<Result<Vec<_>, _>>()?;
        let subject = body
            .subject
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());

        QuestionSet::new(subject, questions).map_err(|err| match err {
            QuestionError::EmptySet => ServiceError::NoQuestions,
            other => ServiceError::Questions(other),
        })
    }
}

#[async_trait]
impl SubmissionService for HttpQuizApi {
    async fn submit(&self, request: SubmissionRequest<'_>) -> Result<QuizResult, ServiceError> {
        let url = self.config.endpoint(self.config.style().submit_path())?;
        debug!(%url, answered = request.sheet.answered_count(), "submitting answers");
        let response = self
            .client
            .post(url)
            .json(&SubmitRequest {
                student_id: request.student_id.as_str(),
                subject: request.subject,
                answers: request.sheet.to_wire_map(),
            })
            .send()
            .await?;

        read_json(response).await
    }
}

/// Check status, surface `{"error": ...}` bodies, then decode.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let status = response.status();
    if !status.is_success() {
        warn!(%status, "quiz backend returned an error status");
        return Err(ServiceError::HttpStatus(status));
    }

    let body: Value = response.json().await?;
    if let Some(message) = body.get("error").and_then(Value::as_str) {
        warn!(error = message, "quiz backend reported an error");
        return Err(ServiceError::Server(message.to_string()));
    }
    Ok(serde_json::from_value(body)?)
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    name: &'a str,
    roll_no: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    student_id: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuestionsResponse {
    questions: Option<Vec<WireQuestion>>,
    subject: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireQuestion {
    id: QuestionId,
    question: String,
    options: WireOptions,
    section: Option<String>,
}

/// Options arrive as a list, or keyed by letter (`{"A": "3", "B": "4"}`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireOptions {
    List(Vec<String>),
    Keyed(BTreeMap<String, String>),
}

impl WireOptions {
    fn into_list(self) -> Vec<String> {
        match self {
            WireOptions::List(options) => options,
            WireOptions::Keyed(options) => options
                .into_iter()
                .map(|(key, value)| format!("{key}) {value}"))
                .collect(),
        }
    }
}

impl WireQuestion {
    fn into_question(self) -> Result<Question, QuestionError> {
        Question::new(self.id, self.question, self.options.into_list(), self.section)
    }
}

#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    student_id: &'a str,
    subject: &'a str,
    answers: BTreeMap<String, String>,
}
