use dioxus::prelude::*;

use crate::client::components::{modal::Modal, ErrorLabel};

/// Confirmation for destructive actions.
///
/// With `require_password` the user must type their password, which is
/// handed to `on_confirm`; otherwise `on_confirm` receives an empty string.
#[component]
pub fn ConfirmDeleteModal(
    title: String,
    message: String,
    require_password: Option<bool>,
    error: Option<String>,
    on_confirm: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let mut password = use_signal(String::new);
    let require_password = require_password.unwrap_or(false);

    rsx!(
        Modal { title, on_close,
            p { "{message}" }
            if require_password {
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            ErrorLabel { message: error }
            div { class: "modal-actions",
                button { class: "btn", onclick: move |_| on_close.call(()), "Cancel" }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_confirm.call(password()),
                    "Delete"
                }
            }
        }
    )
}
