use dioxus::prelude::*;

/// Modal alert with a single acknowledge button. Nothing behind it is
/// clickable until it is dismissed.
#[component]
pub fn AlertDialog(message: String, ok_label: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "alert-overlay",
            div {
                class: "alert-dialog",
                role: "alertdialog",
                aria_modal: "true",
                aria_labelledby: "alert-message",
                p { class: "alert-dialog__message", id: "alert-message", "{message}" }
                button {
                    class: "btn btn-primary",
                    id: "alert-ok",
                    r#type: "button",
                    autofocus: true,
                    onclick: move |_| on_dismiss.call(()),
                    "{ok_label}"
                }
            }
        }
    }
}
