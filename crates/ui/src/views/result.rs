use dioxus::prelude::*;
use services::{CompletedQuiz, Student};

use crate::context::AppContext;
use crate::views::{AlertDialog, ViewError};
use crate::vm::map_result;

#[component]
pub fn ResultView(
    student: Student,
    completed: CompletedQuiz,
    on_reanalyzed: EventHandler<CompletedQuiz>,
    on_restart: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let labels = ctx.labels();
    let flow = ctx.quiz_flow();

    let mut busy = use_signal(|| false);
    let mut alert = use_signal(|| None::<ViewError>);

    let vm = map_result(&completed);
    let student_name = student.name.clone();

    let reanalyze = use_callback(move |()| {
        if busy() {
            return;
        }
        let flow = flow.clone();
        let student = student.clone();
        let completed = completed.clone();
        spawn(async move {
            busy.set(true);
            let result = flow.reanalyze(&student, &completed).await;
            busy.set(false);
            match result {
                Ok(updated) => on_reanalyzed.call(updated),
                Err(err) => alert.set(Some(ViewError::from_reanalyze(&err))),
            }
        });
    });

    let reanalyze_label = if busy() {
        labels.reanalyzing
    } else {
        labels.reanalyze
    };

    rsx! {
        div { class: "page page--centered",
            div { class: "card result-card",
                h1 { class: "result-card__title", "{labels.result_title}" }
                p { class: "result-card__greeting",
                    "{labels.result_greeting}, "
                    span { class: "result-card__name", "{student_name}" }
                    "!"
                }
                p { class: "result-card__subject", "{vm.subject}" }
                div { class: "result-stats",
                    StatTile { value: vm.score.to_string(), label: labels.score }
                    StatTile { value: vm.total.to_string(), label: labels.total_questions }
                    StatTile { value: vm.answered.to_string(), label: labels.answered_count }
                    StatTile { value: vm.percentage_label.clone(), label: labels.percentage }
                }
                if vm.timed_out {
                    p { class: "result-card__note", id: "result-timeout", "{labels.timer_submitted_note}" }
                }
                p { class: "result-card__meta", "{labels.submitted_at}: {vm.submitted_at}" }
                section { class: "result-report",
                    h3 { class: "result-report__title", "{labels.report_title}" }
                    if let Some(html) = vm.report_html.as_deref() {
                        div { class: "result-report__body", dangerous_inner_html: "{html}" }
                    } else {
                        p { class: "result-report__empty", "{labels.report_empty}" }
                    }
                }
                if !vm.can_reanalyze {
                    p { class: "result-card__meta", id: "result-reanalyze-hint", "{labels.nothing_to_reanalyze}" }
                }
                div { class: "result-actions",
                    button {
                        class: "btn btn-secondary",
                        id: "result-reanalyze",
                        r#type: "button",
                        disabled: busy() || !vm.can_reanalyze,
                        onclick: move |_| reanalyze.call(()),
                        "{reanalyze_label}"
                    }
                    button {
                        class: "btn btn-primary",
                        id: "result-restart",
                        r#type: "button",
                        disabled: busy(),
                        onclick: move |_| on_restart.call(()),
                        "{labels.restart}"
                    }
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

#[component]
fn StatTile(value: String, label: &'static str) -> Element {
    rsx! {
        div { class: "stat-tile",
            div { class: "stat-tile__value", "{value}" }
            div { class: "stat-tile__label", "{label}" }
        }
    }
}
