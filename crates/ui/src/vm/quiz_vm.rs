use quiz_core::model::AnswerSheet;
use quiz_core::{NavStatus, QuizSession, format_mmss};
use tracing::debug;

use crate::i18n::Labels;

/// Remaining time at or below which the timer is highlighted.
pub const LOW_TIME_SECS: u32 = 60;

/// Everything the quiz screen can ask of its session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    /// Pick the option at this position of the current question.
    Select(usize),
    Next,
    Previous,
    Jump(usize),
    Tick,
}

/// Apply one intent. Returns the answer sheet when this intent submitted the
/// session; that happens at most once per session.
pub fn apply_intent(session: &mut QuizSession, intent: QuizIntent) -> Option<AnswerSheet> {
    match intent {
        QuizIntent::Select(position) => {
            let option = session.current_question().options().get(position).cloned()?;
            if let Err(err) = session.select_option(&option) {
                debug!(error = %err, "option ignored");
            }
            None
        }
        QuizIntent::Next => session.go_next(),
        QuizIntent::Previous => {
            session.go_previous();
            None
        }
        QuizIntent::Jump(index) => {
            if let Err(err) = session.jump_to(index) {
                debug!(error = %err, "jump ignored");
            }
            None
        }
        QuizIntent::Tick => session.tick(),
    }
}

/// Map a key from the quiz keyboard shortcuts to an intent.
#[must_use]
pub fn intent_for_key(key: &str) -> Option<QuizIntent> {
    match key {
        "ArrowLeft" => Some(QuizIntent::Previous),
        "ArrowRight" => Some(QuizIntent::Next),
        digit => {
            let value = digit.parse::<usize>().ok()?;
            (1..=9)
                .contains(&value)
                .then(|| QuizIntent::Select(value - 1))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub position: usize,
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItemVm {
    pub index: usize,
    pub number: usize,
    pub status: NavStatus,
}

impl NavItemVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.status {
            NavStatus::Current => "nav-item nav-item--current",
            NavStatus::Answered => "nav-item nav-item--answered",
            NavStatus::Unanswered => "nav-item",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionVm {
    pub label: String,
    pub range: String,
}

/// Render-ready snapshot of a running quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub subject: String,
    pub progress_percent: u32,
    pub timer_label: String,
    pub timer_low: bool,
    pub heading: String,
    pub section: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub can_go_previous: bool,
    pub next_label: &'static str,
    pub navigator: Vec<NavItemVm>,
    pub sections: Vec<SectionVm>,
    pub submitted: bool,
}

#[must_use]
pub fn map_quiz(session: &QuizSession, labels: &Labels) -> QuizVm {
    let question = session.current_question();
    let selected = session.selected_option();
    let remaining = session.remaining_seconds();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(position, text)| OptionVm {
            position,
            text: text.clone(),
            selected: selected == Some(text.as_str()),
        })
        .collect();

    let navigator = session
        .navigator()
        .into_iter()
        .enumerate()
        .map(|(index, status)| NavItemVm {
            index,
            number: index + 1,
            status,
        })
        .collect();

    let sections = session
        .sections()
        .into_iter()
        .map(|range| SectionVm {
            range: if range.first == range.last {
                range.first.to_string()
            } else {
                format!("{}-{}", range.first, range.last)
            },
            label: range.label,
        })
        .collect();

    QuizVm {
        subject: session.subject().to_string(),
        progress_percent: session.progress_percent(),
        timer_label: format_mmss(remaining),
        timer_low: remaining <= LOW_TIME_SECS,
        heading: format!(
            "{} {} / {}",
            labels.question,
            session.current_index() + 1,
            session.len()
        ),
        section: question.section().to_string(),
        prompt: question.prompt().to_string(),
        options,
        can_go_previous: !session.is_first(),
        next_label: if session.is_last() {
            labels.finish
        } else {
            labels.next
        },
        navigator,
        sections,
        submitted: session.is_submitted(),
    }
}
