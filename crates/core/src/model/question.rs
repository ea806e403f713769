use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::QuestionId;

/// Section label shown when a question does not carry one.
pub const DEFAULT_SECTION: &str = "General";

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question. Immutable once a session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    section: Option<String>,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the id or prompt is blank, there are fewer than
    /// two options, or any option is blank or repeated.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<String>,
        section: Option<String>,
    ) -> Result<Self, QuestionError> {
        if id.is_blank() {
            return Err(QuestionError::BlankId);
        }
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt { id });
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                id,
                len: options.len(),
            });
        }

        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if option.trim().is_empty() {
                return Err(QuestionError::BlankOption { id });
            }
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption {
                    id,
                    option: option.clone(),
                });
            }
        }

        let section = section
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            id,
            prompt,
            options,
            section,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Section label, falling back to [`DEFAULT_SECTION`].
    #[must_use]
    pub fn section(&self) -> &str {
        self.section.as_deref().unwrap_or(DEFAULT_SECTION)
    }

    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

//
// ─── QUESTION SET ──────────────────────────────────────────────────────────────
//

/// The ordered questions and subject label returned for one session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    subject: String,
    questions: Vec<Question>,
}

impl QuestionSet {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptySet` when no questions are given and
    /// `QuestionError::DuplicateId` when two questions share an identifier.
    /// Identifiers are compared in their wire form, so `7` and `"7"` collide.
    pub fn new(subject: impl Into<String>, questions: Vec<Question>) -> Result<Self, QuestionError> {
        if questions.is_empty() {
            return Err(QuestionError::EmptySet);
        }

        let mut ids = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !ids.insert(question.id().to_string()) {
                return Err(QuestionError::DuplicateId {
                    id: question.id().clone(),
                });
            }
        }

        Ok(Self {
            subject: subject.into(),
            questions,
        })
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn into_parts(self) -> (String, Vec<Question>) {
        (self.subject, self.questions)
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id is blank")]
    BlankId,

    #[error("question {id} has an empty prompt")]
    EmptyPrompt { id: QuestionId },

    #[error("question {id} has {len} options, at least 2 are required")]
    TooFewOptions { id: QuestionId, len: usize },

    #[error("question {id} has a blank option")]
    BlankOption { id: QuestionId },

    #[error("question {id} repeats option {option:?}")]
    DuplicateOption { id: QuestionId, option: String },

    #[error("question id {id} appears more than once")]
    DuplicateId { id: QuestionId },

    #[error("no questions were provided")]
    EmptySet,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
