use quiz_core::model::QuestionSet;
use services::{CompletedQuiz, Student};

/// Where the student is in one pass through the app.
///
/// Each stage carries exactly what its view needs, so a quiz without a
/// student or a result without a submission cannot be represented.
#[derive(Clone, Debug, PartialEq)]
pub enum FlowStage {
    Login,
    Instructions {
        student: Student,
    },
    Quiz {
        student: Student,
        questions: QuestionSet,
    },
    Result {
        student: Student,
        completed: CompletedQuiz,
    },
}

impl FlowStage {
    #[must_use]
    pub fn student(&self) -> Option<&Student> {
        match self {
            FlowStage::Login => None,
            FlowStage::Instructions { student }
            | FlowStage::Quiz { student, .. }
            | FlowStage::Result { student, .. } => Some(student),
        }
    }
}
