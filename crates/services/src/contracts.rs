use async_trait::async_trait;

use quiz_core::model::{AnswerSheet, QuestionSet, QuizResult, StudentId};

use crate::error::ServiceError;

/// Display name and roll number as typed by the student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    name: String,
    roll_no: String,
}

impl Credentials {
    /// Trim both fields and require them to be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::MissingField` naming the first empty field.
    pub fn new(name: &str, roll_no: &str) -> Result<Self, ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::MissingField { field: "name" });
        }
        let roll_no = roll_no.trim();
        if roll_no.is_empty() {
            return Err(ServiceError::MissingField { field: "roll number" });
        }
        Ok(Self {
            name: name.to_string(),
            roll_no: roll_no.to_string(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn roll_no(&self) -> &str {
        &self.roll_no
    }
}

/// A logged-in student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub roll_no: String,
}

/// Everything the submission collaborator needs to score one sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest<'a> {
    pub student_id: &'a StudentId,
    pub subject: &'a str,
    pub sheet: &'a AnswerSheet,
}

/// Login collaborator contract.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns `ServiceError` when the login request fails.
    async fn login(&self, credentials: &Credentials) -> Result<Student, ServiceError>;
}

/// Question provider contract.
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns `ServiceError::NoQuestions` for an empty set, or other errors
    /// when the request fails.
    async fn fetch_questions(&self) -> Result<QuestionSet, ServiceError>;
}

/// Submission collaborator contract. Also serves re-analysis requests.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// # Errors
    ///
    /// Returns `ServiceError` when the submission fails.
    async fn submit(&self, request: SubmissionRequest<'_>) -> Result<QuizResult, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_trim_and_require_fields() {
        let creds = Credentials::new("  Asha  ", " 024 ").unwrap();
        assert_eq!(creds.name(), "Asha");
        assert_eq!(creds.roll_no(), "024");

        assert!(matches!(
            Credentials::new(" ", "24"),
            Err(ServiceError::MissingField { field: "name" })
        ));
        assert!(matches!(
            Credentials::new("Asha", ""),
            Err(ServiceError::MissingField { field: "roll number" })
        ));
    }
}
