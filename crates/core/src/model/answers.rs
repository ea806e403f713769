use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::model::ids::QuestionId;

/// What caused a session to hand off its answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// The student pressed finish/submit.
    Manual,
    /// The countdown reached zero.
    Timer,
}

/// Immutable snapshot of a session's answers, taken once at submit time.
///
/// There is no way to mutate a sheet after it is built; re-analysis sends the
/// same sheet again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: BTreeMap<QuestionId, String>,
    total_questions: usize,
    submitted_at: DateTime<Utc>,
    trigger: SubmitTrigger,
}

impl AnswerSheet {
    pub(crate) fn new(
        answers: BTreeMap<QuestionId, String>,
        total_questions: usize,
        submitted_at: DateTime<Utc>,
        trigger: SubmitTrigger,
    ) -> Self {
        Self {
            answers,
            total_questions,
            submitted_at,
            trigger,
        }
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<QuestionId, String> {
        &self.answers
    }

    #[must_use]
    pub fn answer_for(&self, id: &QuestionId) -> Option<&str> {
        self.answers.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    #[must_use]
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    #[must_use]
    pub fn trigger(&self) -> SubmitTrigger {
        self.trigger
    }

    /// Answers keyed by the textual form of each question id, as sent on the wire.
    #[must_use]
    pub fn to_wire_map(&self) -> BTreeMap<String, String> {
        self.answers
            .iter()
            .map(|(id, option)| (id.to_string(), option.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn wire_map_uses_textual_ids() {
        let mut answers = BTreeMap::new();
        answers.insert(QuestionId::number(3), "B) 4".to_string());
        answers.insert(QuestionId::text("Science_2"), "A) Sun".to_string());
        let sheet = AnswerSheet::new(answers, 30, fixed_now(), SubmitTrigger::Manual);

        let wire = sheet.to_wire_map();
        assert_eq!(wire.get("3").map(String::as_str), Some("B) 4"));
        assert_eq!(wire.get("Science_2").map(String::as_str), Some("A) Sun"));
        assert_eq!(sheet.answered_count(), 2);
        assert_eq!(sheet.total_questions(), 30);
    }
}
