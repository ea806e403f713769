use std::time::Duration;

use quiz_core::model::{QuestionId, SubmitTrigger};

use super::test_harness::{
    HarnessOptions, completed_quiz, question_set, setup_view_harness, student_named,
    unanswered_quiz,
};
use crate::flow::FlowStage;
use crate::i18n::Locale;
use crate::vm::QuizIntent;

fn quiz_stage() -> FlowStage {
    FlowStage::Quiz {
        student: student_named("Asha"),
        questions: question_set(),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_form() {
    let mut harness = setup_view_harness(FlowStage::Login, HarnessOptions::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Student Name"), "missing name label in {html}");
    assert!(html.contains("Roll Number"), "missing roll label in {html}");
    assert!(html.contains("login-submit"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_marathi_labels() {
    let mut harness = setup_view_harness(
        FlowStage::Login,
        HarnessOptions {
            locale: Locale::Marathi,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("विद्यार्थ्याचे नाव"), "missing marathi label in {html}");
    assert!(!html.contains("Student Name"), "english leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn instructions_view_smoke_renders_student_and_time_limit() {
    let mut harness = setup_view_harness(
        FlowStage::Instructions {
            student: student_named("Asha"),
        },
        HarnessOptions {
            duration_secs: 1800,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Asha"), "missing student name in {html}");
    assert!(html.contains("30 minutes"), "missing time limit in {html}");
    assert!(html.contains("Start Test"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(quiz_stage(), HarnessOptions::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Unified Entrance Test"), "missing subject in {html}");
    assert!(html.contains("Question 1 / 3"), "missing heading in {html}");
    assert!(html.contains("Question number 1?"), "missing prompt in {html}");
    assert!(html.contains("00:30"), "missing timer in {html}");
    assert!(html.contains("C) three"), "missing option in {html}");
    assert!(html.contains("1-2"), "missing section range in {html}");
    assert!(html.contains("nav-item nav-item--current"), "missing navigator in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_intents_update_progress_and_navigator() {
    let mut harness = setup_view_harness(quiz_stage(), HarnessOptions::default());
    harness.rebuild();

    harness.dispatch(QuizIntent::Select(1));
    harness.dispatch(QuizIntent::Jump(2));
    let html = harness.render();
    assert!(html.contains("Question 3 / 3"), "jump not applied in {html}");
    assert!(html.contains("33%"), "progress not updated in {html}");
    assert!(html.contains("Finish"), "last question should offer finish in {html}");
    assert!(html.contains("nav-item nav-item--answered"), "missing answered marker in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn timer_expiry_submits_once_and_shows_result() {
    let mut harness = setup_view_harness(
        quiz_stage(),
        HarnessOptions {
            duration_secs: 3,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();

    harness.dispatch(QuizIntent::Select(1));
    harness.dispatch(QuizIntent::Jump(2));
    harness.dispatch(QuizIntent::Select(0));
    harness.dispatch(QuizIntent::Previous);
    harness.dispatch(QuizIntent::Tick);
    harness.dispatch(QuizIntent::Tick);
    harness.dispatch(QuizIntent::Tick);
    harness.settle().await;

    assert_eq!(harness.submission_count(), 1);
    {
        let submissions = harness.backend.submissions.lock().unwrap();
        let sheet = &submissions[0];
        assert_eq!(sheet.trigger(), SubmitTrigger::Timer);
        assert_eq!(sheet.answered_count(), 2);
        assert_eq!(sheet.answer_for(&QuestionId::number(1)), Some("B) two"));
        assert_eq!(sheet.answer_for(&QuestionId::number(3)), Some("A) one"));
        assert_eq!(sheet.answer_for(&QuestionId::number(2)), None);
    }

    let html = harness.render();
    assert!(html.contains("Test completed!"), "missing result title in {html}");
    assert!(html.contains("Time ran out"), "missing timeout note in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn countdown_ticker_hands_in_once_when_time_runs_out() {
    let mut harness = setup_view_harness(
        quiz_stage(),
        HarnessOptions {
            duration_secs: 2,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    harness.dispatch(QuizIntent::Select(1));

    for _ in 0..4 {
        tokio::time::advance(Duration::from_millis(1100)).await;
        harness.settle().await;
    }

    assert_eq!(harness.submission_count(), 1);
    assert_eq!(
        harness.backend.submissions.lock().unwrap()[0].trigger(),
        SubmitTrigger::Timer
    );
    let html = harness.render();
    assert!(html.contains("Time ran out"), "missing timeout note in {html}");

    for _ in 0..6 {
        tokio::time::advance(Duration::from_millis(1100)).await;
        harness.settle().await;
    }
    assert_eq!(harness.submission_count(), 1, "ticker kept submitting");
}

#[tokio::test(flavor = "current_thread")]
async fn finish_on_last_question_submits_manually() {
    let mut harness = setup_view_harness(quiz_stage(), HarnessOptions::default());
    harness.rebuild();

    harness.dispatch(QuizIntent::Jump(2));
    harness.dispatch(QuizIntent::Select(1));
    harness.dispatch(QuizIntent::Next);
    harness.settle().await;

    assert_eq!(harness.submission_count(), 1);
    assert_eq!(
        harness.backend.submissions.lock().unwrap()[0].trigger(),
        SubmitTrigger::Manual
    );
    let html = harness.render();
    assert!(html.contains("Your Score"), "missing score tile in {html}");
    assert!(!html.contains("Time ran out"), "unexpected timeout note in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_submission_raises_blocking_alert() {
    let mut harness = setup_view_harness(
        quiz_stage(),
        HarnessOptions {
            fail_submit: true,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();

    harness.dispatch(QuizIntent::Jump(2));
    harness.dispatch(QuizIntent::Next);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Error submitting quiz"), "missing alert in {html}");
    assert!(html.contains("alert-ok"), "missing alert button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn zero_duration_session_shows_alert_instead_of_quiz() {
    let mut harness = setup_view_harness(
        quiz_stage(),
        HarnessOptions {
            duration_secs: 0,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("could not be started"), "missing alert in {html}");
    assert!(!html.contains("Question 1 / 3"), "quiz rendered anyway in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_smoke_renders_scores_and_report() {
    let mut harness = setup_view_harness(
        FlowStage::Result {
            student: student_named("Asha"),
            completed: completed_quiz(),
        },
        HarnessOptions::default(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Asha"), "missing student in {html}");
    assert!(html.contains("33%"), "missing percentage in {html}");
    assert!(html.contains("<h2>Report 1</h2>"), "report not rendered in {html}");
    assert!(html.contains("<strong>Keep going</strong>"), "report not rendered in {html}");
    assert!(html.contains("Re-analyze"), "missing re-analyze in {html}");
    assert!(html.contains("Take another test"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_without_answers_offers_no_reanalysis() {
    let mut harness = setup_view_harness(
        FlowStage::Result {
            student: student_named("Asha"),
            completed: unanswered_quiz(),
        },
        HarnessOptions::default(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No answers found to re-analyze."), "missing hint in {html}");
    assert!(html.contains("Take another test"), "missing restart in {html}");
}
