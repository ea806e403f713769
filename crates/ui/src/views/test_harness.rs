use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::QuizSession;
use quiz_core::model::{AnswerSheet, Question, QuestionId, QuestionSet, QuizResult, StudentId};
use quiz_core::time::fixed_clock;
use services::{
    CompletedQuiz, Credentials, IdentityProvider, QuestionProvider, QuizFlowService, ServiceError,
    Student, SubmissionRequest, SubmissionService,
};

use crate::app::Flow;
use crate::context::{UiApp, build_app_context};
use crate::flow::FlowStage;
use crate::i18n::Locale;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

/// In-memory stand-in for the quiz backend.
#[derive(Default)]
pub struct FakeBackend {
    pub fail_submit: bool,
    pub submissions: Mutex<Vec<AnswerSheet>>,
}

#[async_trait]
impl IdentityProvider for FakeBackend {
    async fn login(&self, credentials: &Credentials) -> Result<Student, ServiceError> {
        Ok(student_named(credentials.name()))
    }
}

#[async_trait]
impl QuestionProvider for FakeBackend {
    async fn fetch_questions(&self) -> Result<QuestionSet, ServiceError> {
        Ok(question_set())
    }
}

#[async_trait]
impl SubmissionService for FakeBackend {
    async fn submit(&self, request: SubmissionRequest<'_>) -> Result<QuizResult, ServiceError> {
        if self.fail_submit {
            return Err(ServiceError::Server("scoring unavailable".into()));
        }
        let mut submissions = self.submissions.lock().unwrap();
        submissions.push(request.sheet.clone());
        Ok(scored(request.sheet, submissions.len()))
    }
}

#[derive(Clone)]
struct TestApp {
    locale: Locale,
    quiz_flow: Arc<QuizFlowService>,
}

impl UiApp for TestApp {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }
}

#[derive(Props, Clone)]
struct FlowHarnessProps {
    app: Arc<TestApp>,
    initial: FlowStage,
    quiz_handles: QuizTestHandles,
}

impl PartialEq for FlowHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn FlowHarness(props: FlowHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.quiz_handles.clone());
    rsx! { Flow { initial: props.initial.clone() } }
}

pub struct HarnessOptions {
    pub locale: Locale,
    pub duration_secs: u32,
    pub fail_submit: bool,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            locale: Locale::English,
            duration_secs: 30,
            fail_submit: false,
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub backend: Arc<FakeBackend>,
    quiz_handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let spawned submissions finish and the next stage render.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.quiz_handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn submission_count(&self) -> usize {
        self.backend.submissions.lock().unwrap().len()
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(initial: FlowStage, options: HarnessOptions) -> ViewHarness {
    let backend = Arc::new(FakeBackend {
        fail_submit: options.fail_submit,
        ..FakeBackend::default()
    });
    let quiz_flow = Arc::new(
        QuizFlowService::new(
            backend.clone(),
            backend.clone(),
            backend.clone(),
            fixed_clock(),
        )
        .with_duration_secs(options.duration_secs),
    );
    let quiz_handles = QuizTestHandles::default();
    let app = Arc::new(TestApp {
        locale: options.locale,
        quiz_flow,
    });

    let dom = VirtualDom::new_with_props(
        FlowHarness,
        FlowHarnessProps {
            app,
            initial,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        backend,
        quiz_handles,
    }
}

pub fn student_named(name: &str) -> Student {
    Student {
        id: StudentId::new("student-24"),
        name: name.to_string(),
        roll_no: "24".to_string(),
    }
}

/// Two Maths questions followed by one Science question.
pub fn question_set() -> QuestionSet {
    let questions = [(1, "Maths"), (2, "Maths"), (3, "Science")]
        .into_iter()
        .map(|(id, section)| {
            Question::new(
                QuestionId::number(id),
                format!("Question number {id}?"),
                vec![
                    "A) one".to_string(),
                    "B) two".to_string(),
                    "C) three".to_string(),
                    "D) four".to_string(),
                ],
                Some(section.to_string()),
            )
            .unwrap()
        })
        .collect();
    QuestionSet::new("Unified Entrance Test", questions).unwrap()
}

/// Scores every "B) two" answer as correct.
pub fn scored(sheet: &AnswerSheet, attempt: usize) -> QuizResult {
    let score = sheet
        .answers()
        .values()
        .filter(|answer| answer.as_str() == "B) two")
        .count() as u32;
    let total = sheet.total_questions() as u32;
    QuizResult {
        score,
        total,
        answered: Some(sheet.answered_count() as u32),
        percentage: f64::from(score) * 100.0 / f64::from(total),
        report: format!("## Report {attempt}\n\n**Keep going** with Science."),
    }
}

/// A completed attempt with the first question answered correctly.
pub fn completed_quiz() -> CompletedQuiz {
    let mut session = QuizSession::new(question_set(), 30, fixed_clock()).unwrap();
    session.select_option("B) two").unwrap();
    let sheet = session.submit().unwrap();
    let result = scored(&sheet, 1);
    CompletedQuiz::new("Unified Entrance Test", sheet, result)
}

/// A timed-out attempt with nothing answered.
pub fn unanswered_quiz() -> CompletedQuiz {
    let mut session = QuizSession::new(question_set(), 1, fixed_clock()).unwrap();
    let sheet = session.tick().unwrap();
    let result = scored(&sheet, 1);
    CompletedQuiz::new("Unified Entrance Test", sheet, result)
}
