use dioxus::prelude::*;
use services::Student;

use crate::context::AppContext;
use crate::views::{AlertDialog, ViewError};

#[component]
pub fn LoginView(on_login: EventHandler<Student>) -> Element {
    let ctx = use_context::<AppContext>();
    let labels = ctx.labels();
    let flow = ctx.quiz_flow();

    let mut name = use_signal(String::new);
    let mut roll_no = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut alert = use_signal(|| None::<ViewError>);

    let submit = use_callback(move |()| {
        if busy() {
            return;
        }
        let flow = flow.clone();
        let name = name.peek().clone();
        let roll_no = roll_no.peek().clone();
        spawn(async move {
            busy.set(true);
            let result = flow.login(&name, &roll_no).await;
            busy.set(false);
            match result {
                Ok(student) => on_login.call(student),
                Err(err) => alert.set(Some(ViewError::from_login(&err))),
            }
        });
    });

    let button_label = if busy() {
        labels.please_wait
    } else {
        labels.continue_button
    };

    rsx! {
        div { class: "page page--centered",
            div { class: "card login-card",
                h1 { class: "login-card__title", "{labels.app_title}" }
                p { class: "login-card__subtitle", "{labels.class_subtitle}" }
                form {
                    class: "login-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        submit.call(());
                    },
                    label { class: "field",
                        span { class: "field__label", "{labels.name_label}" }
                        input {
                            id: "login-name",
                            r#type: "text",
                            required: true,
                            placeholder: "{labels.name_placeholder}",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    label { class: "field",
                        span { class: "field__label", "{labels.roll_label}" }
                        input {
                            id: "login-roll",
                            r#type: "text",
                            required: true,
                            placeholder: "{labels.roll_placeholder}",
                            value: "{roll_no}",
                            oninput: move |evt| roll_no.set(evt.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary btn-wide",
                        id: "login-submit",
                        r#type: "submit",
                        disabled: busy(),
                        "{button_label}"
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
