use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{DateTime, Utc};

use crate::countdown::{Countdown, TickOutcome};
use crate::error::SessionError;
use crate::model::{AnswerSheet, Question, QuestionId, QuestionSet, SubmitTrigger};
use crate::time::Clock;

//
// ─── DERIVED VIEWS ─────────────────────────────────────────────────────────────
//

/// Per-question status shown in the navigator grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStatus {
    Current,
    Answered,
    Unanswered,
}

/// A contiguous run of questions sharing one section label (1-based, inclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRange {
    pub label: String,
    pub first: usize,
    pub last: usize,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One student's timed attempt at a question set.
///
/// Accumulates answers until it is submitted, either by the student or by the
/// countdown reaching zero. The submitting call returns the [`AnswerSheet`]
/// snapshot exactly once; every later submit, finishing `go_next` or tick
/// returns `None`, and all mutators are frozen.
pub struct QuizSession {
    subject: String,
    questions: Vec<Question>,
    current: usize,
    answers: HashMap<QuestionId, String>,
    countdown: Countdown,
    clock: Clock,
    started_at: DateTime<Utc>,
    submitted: Option<SubmitTrigger>,
}

impl QuizSession {
    /// Start a session over a validated question set.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::ZeroDuration` if `duration_secs` is 0.
    pub fn new(set: QuestionSet, duration_secs: u32, clock: Clock) -> Result<Self, SessionError> {
        let countdown = Countdown::new(duration_secs)?;
        let (subject, questions) = set.into_parts();
        Ok(Self {
            subject,
            questions,
            current: 0,
            answers: HashMap::new(),
            countdown,
            clock,
            started_at: clock.now(),
            submitted: None,
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

    /// Always false: a `QuestionSet` cannot be empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn duration_seconds(&self) -> u32 {
        self.countdown.total()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted.is_some()
    }

    #[must_use]
    pub fn submit_trigger(&self) -> Option<SubmitTrigger> {
        self.submitted
    }

    #[must_use]
    pub fn answer_for(&self, id: &QuestionId) -> Option<&str> {
        self.answers.get(id).map(String::as_str)
    }

    /// Option chosen for the current question, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.answer_for(self.current_question().id())
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// `round(100 * answered / total)`.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        let total = self.questions.len();
        if total == 0 {
            return 0;
        }
        let rounded = (self.answers.len() * 200 + total) / (total * 2);
        u32::try_from(rounded).unwrap_or(100)
    }

    #[must_use]
    pub fn nav_status(&self, index: usize) -> Option<NavStatus> {
        let question = self.questions.get(index)?;
        if index == self.current {
            Some(NavStatus::Current)
        } else if self.answers.contains_key(question.id()) {
            Some(NavStatus::Answered)
        } else {
            Some(NavStatus::Unanswered)
        }
    }

    #[must_use]
    pub fn navigator(&self) -> Vec<NavStatus> {
        (0..self.questions.len())
            .filter_map(|index| self.nav_status(index))
            .collect()
    }

    /// Contiguous section runs in question order.
    #[must_use]
    pub fn sections(&self) -> Vec<SectionRange> {
        let mut ranges: Vec<SectionRange> = Vec::new();
        for (index, question) in self.questions.iter().enumerate() {
            let number = index + 1;
            match ranges.last_mut() {
                Some(range) if range.label == question.section() => range.last = number,
                _ => ranges.push(SectionRange {
                    label: question.section().to_string(),
                    first: number,
                    last: number,
                }),
            }
        }
        ranges
    }

    /// Record `option` as the answer to the current question. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Submitted` after submit and
    /// `SessionError::UnknownOption` when `option` is not one of the current
    /// question's options.
    pub fn select_option(&mut self, option: &str) -> Result<(), SessionError> {
        if self.is_submitted() {
            return Err(SessionError::Submitted);
        }
        let question = &self.questions[self.current];
        if !question.has_option(option) {
            return Err(SessionError::UnknownOption {
                id: question.id().clone(),
                option: option.to_string(),
            });
        }
        self.answers.insert(question.id().clone(), option.to_string());
        Ok(())
    }

    /// Advance one question; on the last question this submits instead.
    pub fn go_next(&mut self) -> Option<AnswerSheet> {
        if self.is_submitted() {
            return None;
        }
        if self.is_last() {
            return self.submit();
        }
        self.current += 1;
        None
    }

    pub fn go_previous(&mut self) {
        if self.is_submitted() {
            return;
        }
        self.current = self.current.saturating_sub(1);
    }

    /// Move directly to `index`, skipping linear order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::IndexOutOfRange` for an invalid index and
    /// `SessionError::Submitted` after submit.
    pub fn jump_to(&mut self, index: usize) -> Result<(), SessionError> {
        if self.is_submitted() {
            return Err(SessionError::Submitted);
        }
        if index >= self.questions.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.questions.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Submit on the student's behalf. Only the first call returns a sheet.
    pub fn submit(&mut self) -> Option<AnswerSheet> {
        self.finish(SubmitTrigger::Manual)
    }

    /// Advance the countdown by one second. Returns the sheet when this tick
    /// expires the countdown and the session was still open.
    pub fn tick(&mut self) -> Option<AnswerSheet> {
        if self.is_submitted() {
            return None;
        }
        match self.countdown.tick() {
            TickOutcome::Expired => self.finish(SubmitTrigger::Timer),
            TickOutcome::Running { .. } | TickOutcome::Halted => None,
        }
    }

    fn finish(&mut self, trigger: SubmitTrigger) -> Option<AnswerSheet> {
        if self.submitted.is_some() {
            return None;
        }
        self.submitted = Some(trigger);
        self.countdown.halt();

        let answers: BTreeMap<QuestionId, String> = self
            .answers
            .iter()
            .map(|(id, option)| (id.clone(), option.clone()))
            .collect();
        Some(AnswerSheet::new(
            answers,
            self.questions.len(),
            self.clock.now(),
            trigger,
        ))
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("subject", &self.subject)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("remaining", &self.countdown.remaining())
            .field("submitted", &self.submitted)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
