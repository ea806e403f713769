use dioxus::prelude::*;
use tracing::info;

use crate::context::AppContext;
use crate::flow::FlowStage;
use crate::views::{InstructionsView, LoginView, QuizView, ResultView};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let labels = ctx.labels();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "{labels.app_title}" }

        div { class: "app-root", lang: "{ctx.locale()}",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Flow { initial: FlowStage::Login }
            }
        }
    }
}

/// Drives the student from login to results. The current stage is the only
/// state shared between screens; restarting drops it entirely.
#[component]
pub fn Flow(initial: FlowStage) -> Element {
    let mut stage = use_signal(move || initial);
    let current = stage.read().clone();

    match current {
        FlowStage::Login => rsx! {
            LoginView {
                on_login: move |student| stage.set(FlowStage::Instructions { student }),
            }
        },
        FlowStage::Instructions { student } => {
            let next_student = student.clone();
            rsx! {
                InstructionsView {
                    student,
                    on_start: move |questions| {
                        stage.set(FlowStage::Quiz {
                            student: next_student.clone(),
                            questions,
                        });
                    },
                }
            }
        }
        FlowStage::Quiz { student, questions } => {
            let next_student = student.clone();
            rsx! {
                QuizView {
                    student,
                    questions,
                    on_finished: move |completed| {
                        stage.set(FlowStage::Result {
                            student: next_student.clone(),
                            completed,
                        });
                    },
                    on_abort: move |()| restart(stage),
                }
            }
        }
        FlowStage::Result { student, completed } => {
            let next_student = student.clone();
            rsx! {
                ResultView {
                    student,
                    completed,
                    on_reanalyzed: move |completed| {
                        stage.set(FlowStage::Result {
                            student: next_student.clone(),
                            completed,
                        });
                    },
                    on_restart: move |()| restart(stage),
                }
            }
        }
    }
}

fn restart(mut stage: Signal<FlowStage>) {
    info!("flow restarted");
    stage.set(FlowStage::Login);
}
