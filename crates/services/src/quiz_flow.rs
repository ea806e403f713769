use std::sync::Arc;

use tracing::{debug, info, warn};

use quiz_core::model::{AnswerSheet, QuestionSet, QuizResult};
use quiz_core::{Clock, DEFAULT_QUIZ_SECONDS, QuizSession};

use crate::contracts::{
    Credentials, IdentityProvider, QuestionProvider, Student, SubmissionRequest, SubmissionService,
};
use crate::error::ServiceError;

/// A submitted sheet together with the latest result the server produced for it.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedQuiz {
    subject: String,
    sheet: AnswerSheet,
    result: QuizResult,
}

impl CompletedQuiz {
    #[must_use]
    pub fn new(subject: impl Into<String>, sheet: AnswerSheet, result: QuizResult) -> Self {
        let result = result.with_answered_fallback(sheet.answered_count());
        Self {
            subject: subject.into(),
            sheet,
            result,
        }
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn sheet(&self) -> &AnswerSheet {
        &self.sheet
    }

    #[must_use]
    pub fn result(&self) -> &QuizResult {
        &self.result
    }
}

/// Orchestrates login, quiz start, submission and re-analysis against the
/// three collaborators.
#[derive(Clone)]
pub struct QuizFlowService {
    identity: Arc<dyn IdentityProvider>,
    questions: Arc<dyn QuestionProvider>,
    submissions: Arc<dyn SubmissionService>,
    clock: Clock,
    duration_secs: u32,
}

impl QuizFlowService {
    #[must_use]
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        questions: Arc<dyn QuestionProvider>,
        submissions: Arc<dyn SubmissionService>,
        clock: Clock,
    ) -> Self {
        Self {
            identity,
            questions,
            submissions,
            clock,
            duration_secs: DEFAULT_QUIZ_SECONDS,
        }
    }

    #[must_use]
    pub fn with_duration_secs(mut self, duration_secs: u32) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Log in with a display name and roll number.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::MissingField` for blank input, or the identity
    /// provider's error.
    pub async fn login(&self, name: &str, roll_no: &str) -> Result<Student, ServiceError> {
        let credentials = Credentials::new(name, roll_no)?;
        match self.identity.login(&credentials).await {
            Ok(student) => {
                info!(student_id = %student.id, "student logged in");
                Ok(student)
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                Err(err)
            }
        }
    }

    /// Fetch the question set for a new attempt.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NoQuestions` when the provider returns nothing,
    /// or the provider's error.
    pub async fn load_questions(&self) -> Result<QuestionSet, ServiceError> {
        let set = self.questions.fetch_questions().await.inspect_err(|err| {
            warn!(error = %err, "could not load questions");
        })?;
        info!(subject = set.subject(), questions = set.len(), "questions loaded");
        Ok(set)
    }

    /// Open a timed session over an already loaded set.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Session` if the configured duration is zero.
    pub fn open_session(&self, set: QuestionSet) -> Result<QuizSession, ServiceError> {
        let session = QuizSession::new(set, self.duration_secs, self.clock)?;
        debug!(
            subject = session.subject(),
            duration_secs = self.duration_secs,
            "quiz session opened"
        );
        Ok(session)
    }

    /// Fetch questions and open a new timed session.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::load_questions`] and [`Self::open_session`].
    pub async fn start_quiz(&self) -> Result<QuizSession, ServiceError> {
        let set = self.load_questions().await?;
        self.open_session(set)
    }

    /// Hand a submitted sheet to the submission collaborator.
    ///
    /// # Errors
    ///
    /// Returns the submission collaborator's error.
    pub async fn submit(
        &self,
        student: &Student,
        subject: &str,
        sheet: AnswerSheet,
    ) -> Result<CompletedQuiz, ServiceError> {
        let result = self.request_result(student, subject, &sheet).await?;
        info!(
            student_id = %student.id,
            trigger = ?sheet.trigger(),
            answered = sheet.answered_count(),
            score = result.score,
            "quiz submitted"
        );
        Ok(CompletedQuiz::new(subject, sheet, result))
    }

    /// Ask for a fresh report on the same sheet. The sheet is carried over
    /// untouched; only the result changes.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NothingToReanalyze` if the sheet has no answers,
    /// or the submission collaborator's error.
    pub async fn reanalyze(
        &self,
        student: &Student,
        completed: &CompletedQuiz,
    ) -> Result<CompletedQuiz, ServiceError> {
        if completed.sheet.is_empty() {
            return Err(ServiceError::NothingToReanalyze);
        }
        let result = self
            .request_result(student, &completed.subject, &completed.sheet)
            .await?;
        info!(student_id = %student.id, score = result.score, "quiz re-analyzed");
        Ok(CompletedQuiz::new(
            completed.subject.clone(),
            completed.sheet.clone(),
            result,
        ))
    }

    async fn request_result(
        &self,
        student: &Student,
        subject: &str,
        sheet: &AnswerSheet,
    ) -> Result<QuizResult, ServiceError> {
        let request = SubmissionRequest {
            student_id: &student.id,
            subject,
            sheet,
        };
        self.submissions.submit(request).await.inspect_err(|err| {
            warn!(error = %err, "submission failed");
        })
    }
}
