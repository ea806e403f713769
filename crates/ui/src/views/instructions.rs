use dioxus::prelude::*;
use quiz_core::model::QuestionSet;
use services::Student;

use crate::context::AppContext;
use crate::views::{AlertDialog, ViewError};

#[component]
pub fn InstructionsView(student: Student, on_start: EventHandler<QuestionSet>) -> Element {
    let ctx = use_context::<AppContext>();
    let labels = ctx.labels();
    let flow = ctx.quiz_flow();
    let minutes = flow.duration_secs().div_ceil(60);

    let mut loading = use_signal(|| false);
    let mut alert = use_signal(|| None::<ViewError>);

    let start = use_callback(move |()| {
        if loading() {
            return;
        }
        let flow = flow.clone();
        spawn(async move {
            loading.set(true);
            let result = flow.load_questions().await;
            loading.set(false);
            match result {
                Ok(questions) => on_start.call(questions),
                Err(err) => alert.set(Some(ViewError::from_load(&err))),
            }
        });
    });

    let start_label = if loading() {
        labels.loading_questions
    } else {
        labels.start_button
    };

    rsx! {
        div { class: "page page--centered",
            div { class: "card instructions-card",
                div { class: "instructions-card__badge", "{labels.ready_badge}" }
                h2 { class: "instructions-card__title",
                    "{labels.instructions_title} "
                    span { class: "instructions-card__name", "{student.name}" }
                }
                ul { class: "instructions-list",
                    li { class: "instructions-list__item",
                        "{labels.time_limit}: "
                        b { "{minutes} {labels.minutes}" }
                        ". {labels.auto_submit_rule}"
                    }
                    li { class: "instructions-list__item", "{labels.pick_one_rule}" }
                    li { class: "instructions-list__item", "{labels.keyboard_rule}" }
                    li { class: "instructions-list__item", "{labels.report_rule}" }
                }
                button {
                    class: "btn btn-success btn-wide",
                    id: "instructions-start",
                    r#type: "button",
                    disabled: loading(),
                    onclick: move |_| start.call(()),
                    "{start_label}"
                }
            }
            if let Some(err) = alert() {
                AlertDialog {
                    message: err.message(labels).to_string(),
                    ok_label: labels.ok.to_string(),
                    on_dismiss: move |()| alert.set(None),
                }
            }
        }
    }
}
