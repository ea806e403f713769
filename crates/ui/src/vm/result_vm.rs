use quiz_core::model::SubmitTrigger;
use services::CompletedQuiz;

use crate::vm::{format_submitted_at, markdown_to_html};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub subject: String,
    pub score: u32,
    pub total: u32,
    pub answered: u32,
    pub percentage_label: String,
    pub report_html: Option<String>,
    pub submitted_at: String,
    pub timed_out: bool,
    pub can_reanalyze: bool,
}

#[must_use]
pub fn map_result(completed: &CompletedQuiz) -> ResultVm {
    let result = completed.result();
    let sheet = completed.sheet();
    let report = result.report.trim();

    ResultVm {
        subject: completed.subject().to_string(),
        score: result.score,
        total: result.total,
        answered: result
            .answered
            .unwrap_or_else(|| u32::try_from(sheet.answered_count()).unwrap_or(u32::MAX)),
        percentage_label: format!("{}%", result.rounded_percentage()),
        report_html: (!report.is_empty()).then(|| markdown_to_html(report)),
        submitted_at: format_submitted_at(sheet.submitted_at()),
        timed_out: sheet.trigger() == SubmitTrigger::Timer,
        can_reanalyze: !sheet.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use quiz_core::QuizSession;
    use quiz_core::model::{Question, QuestionId, QuestionSet, QuizResult};
    use quiz_core::time::fixed_clock;

    use super::*;

    fn completed(answer: bool, report: &str) -> CompletedQuiz {
        let question = Question::new(
            QuestionId::text("Maths_1"),
            "2 + 2?",
            vec!["A) 3".into(), "B) 4".into()],
            Some("Maths".into()),
        )
        .unwrap();
        let set = QuestionSet::new("Unified Entrance Test", vec![question]).unwrap();
        let mut session = QuizSession::new(set, 1, fixed_clock()).unwrap();
        if answer {
            session.select_option("B) 4").unwrap();
        }
        let sheet = session.tick().unwrap();
        CompletedQuiz::new(
            "Unified Entrance Test",
            sheet,
            QuizResult {
                score: u32::from(answer),
                total: 1,
                answered: None,
                percentage: if answer { 100.0 } else { 0.0 },
                report: report.to_string(),
            },
        )
    }

    #[test]
    fn maps_scores_and_renders_report() {
        let vm = map_result(&completed(true, "**Great** work"));
        assert_eq!(vm.score, 1);
        assert_eq!(vm.total, 1);
        assert_eq!(vm.answered, 1);
        assert_eq!(vm.percentage_label, "100%");
        assert_eq!(
            vm.report_html.as_deref(),
            Some("<p><strong>Great</strong> work</p>\n")
        );
        assert!(vm.timed_out);
        assert!(vm.can_reanalyze);
        assert_eq!(vm.submitted_at, "14 Nov 2023, 22:13 UTC");
    }

    #[test]
    fn blank_report_and_empty_sheet() {
        let vm = map_result(&completed(false, "   "));
        assert_eq!(vm.report_html, None);
        assert_eq!(vm.answered, 0);
        assert_eq!(vm.percentage_label, "0%");
        assert!(!vm.can_reanalyze);
    }
}
