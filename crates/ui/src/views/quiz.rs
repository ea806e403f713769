use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use quiz_core::model::{AnswerSheet, QuestionSet};
use services::{CompletedQuiz, Student};
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::context::AppContext;
use crate::views::{AlertDialog, ViewError};
use crate::vm::{QuizIntent, apply_intent, intent_for_key, map_quiz};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView(
    student: Student,
    questions: QuestionSet,
    on_finished: EventHandler<CompletedQuiz>,
    on_abort: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let labels = ctx.labels();
    let flow = ctx.quiz_flow();
    let subject = questions.subject().to_string();

    let mut session = use_signal(|| {
        flow.open_session(questions.clone()).map_err(|err| {
            warn!(error = %err, "could not open quiz session");
            ViewError::SessionUnavailable
        })
    });
    let mut submitting = use_signal(|| false);
    let mut alert = use_signal(|| None::<ViewError>);

    let hand_in = use_callback(move |sheet: AnswerSheet| {
        let flow = flow.clone();
        let student = student.clone();
        let subject = subject.clone();
        spawn(async move {
            submitting.set(true);
            match flow.submit(&student, &subject, sheet).await {
                Ok(completed) => on_finished.call(completed),
                Err(err) => {
                    submitting.set(false);
                    alert.set(Some(ViewError::from_submit(&err)));
                }
            }
        });
    });

    let dispatch = use_callback(move |intent: QuizIntent| {
        let sheet = match session.write().as_mut() {
            Ok(session) => apply_intent(session, intent),
            Err(_) => None,
        };
        if let Some(sheet) = sheet {
            info!(
                trigger = ?sheet.trigger(),
                answered = sheet.answered_count(),
                total = sheet.total_questions(),
                "answer sheet handed in"
            );
            hand_in.call(sheet);
        }
    });

    // Dropped with the component, so the ticker never outlives the quiz screen.
    use_future(move || async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let running = session
                .peek()
                .as_ref()
                .is_ok_and(|session| !session.is_submitted());
            if !running {
                break;
            }
            dispatch.call(QuizIntent::Tick);
        }
    });

    use_effect(|| {
        let _ = eval("document.getElementById(\"quiz-root\")?.focus();");
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let on_key = move |evt: KeyboardEvent| {
        if alert.peek().is_some() || *submitting.peek() {
            return;
        }
        if let Some(intent) = intent_for_key(&evt.data.key().to_string()) {
            evt.prevent_default();
            dispatch.call(intent);
        }
    };

    let vm = session
        .read()
        .as_ref()
        .map(|session| map_quiz(session, labels))
        .map_err(|err| *err);
    let vm = match vm {
        Ok(vm) => vm,
        Err(err) => {
            return rsx! {
                AlertDialog {
                    message: err.message(labels).to_string(),
                    ok_label: labels.ok.to_string(),
                    on_dismiss: move |()| on_abort.call(()),
                }
            };
        }
    };

    let timer_class = if vm.timer_low {
        "quiz-timer quiz-timer--low"
    } else {
        "quiz-timer"
    };
    let nav_items = vm
        .navigator
        .iter()
        .map(|item| (item.index, item.number, item.class()))
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "page quiz-page",
            id: "quiz-root",
            tabindex: "0",
            onkeydown: on_key,
            header { class: "quiz-header",
                h1 { class: "quiz-header__title", "{vm.subject}" }
                div { class: "quiz-progress",
                    div { class: "quiz-progress__labels",
                        span { "{labels.progress}" }
                        span { id: "quiz-progress-value", "{vm.progress_percent}%" }
                    }
                    div { class: "quiz-progress__track",
                        div {
                            class: "quiz-progress__bar",
                            style: "width: {vm.progress_percent}%;",
                        }
                    }
                }
                div { class: "{timer_class}", id: "quiz-timer", "{vm.timer_label}" }
            }
            div { class: "quiz-body",
                section { class: "card quiz-question",
                    div { class: "quiz-question__header",
                        h2 { class: "quiz-question__heading", "{vm.heading}" }
                        span { class: "quiz-question__section", "{vm.section}" }
                    }
                    h3 { class: "quiz-question__prompt", "{vm.prompt}" }
                    div { class: "quiz-options",
                        for option in vm.options.iter() {
                            OptionButton {
                                key: "{option.position}",
                                position: option.position,
                                text: option.text.clone(),
                                selected: option.selected,
                                on_intent: dispatch,
                            }
                        }
                    }
                    div { class: "quiz-controls",
                        button {
                            class: "btn btn-secondary",
                            id: "quiz-previous",
                            r#type: "button",
                            disabled: !vm.can_go_previous,
                            onclick: move |_| dispatch.call(QuizIntent::Previous),
                            "{labels.previous}"
                        }
                        button {
                            class: "btn btn-primary",
                            id: "quiz-next",
                            r#type: "button",
                            disabled: vm.submitted,
                            onclick: move |_| dispatch.call(QuizIntent::Next),
                            "{vm.next_label}"
                        }
                    }
                }
                aside { class: "card quiz-navigator",
                    h3 { class: "quiz-navigator__title", "{labels.navigator}" }
                    div { class: "quiz-navigator__grid",
                        for (index, number, class) in nav_items {
                            button {
                                key: "{index}",
                                class: "{class}",
                                r#type: "button",
                                onclick: move |_| dispatch.call(QuizIntent::Jump(index)),
                                "{number}"
                            }
                        }
                    }
                    ul { class: "quiz-legend",
                        li { span { class: "legend-swatch legend-swatch--answered" } "{labels.answered}" }
                        li { span { class: "legend-swatch" } "{labels.unanswered}" }
                        li { span { class: "legend-swatch legend-swatch--current" } "{labels.current}" }
                    }
                    h4 { class: "quiz-sections__title", "{labels.sections}" }
                    ul { class: "quiz-sections",
                        for section in vm.sections.iter() {
                            li { class: "quiz-sections__row",
                                span { "{section.label}" }
                                span { "{section.range}" }
                            }
                        }
                    }
                }
            }
            if submitting() {
                div { class: "alert-overlay",
                    div { class: "alert-dialog", role: "status",
                        p { class: "alert-dialog__message", "{labels.submitting}" }
                    }
                }
            }
            if let Some(err) = alert() {
                AlertDialog {
                    message: err.message(labels).to_string(),
                    ok_label: labels.ok.to_string(),
                    on_dismiss: move |()| on_abort.call(()),
                }
            }
        }
    }
}

#[component]
fn OptionButton(
    position: usize,
    text: String,
    selected: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let class = if selected {
        "quiz-option quiz-option--selected"
    } else {
        "quiz-option"
    };
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            aria_pressed: "{selected}",
            onclick: move |_| on_intent.call(QuizIntent::Select(position)),
            span { class: "quiz-option__marker" }
            span { class: "quiz-option__text", "{text}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
