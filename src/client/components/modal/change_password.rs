use dioxus::prelude::*;
use pokedex::{
    backend::{controller, model::app::AppState},
    model::user::ChangePasswordForm,
};

use crate::client::{
    components::{error_label::SuccessLabel, modal::Modal, ErrorLabel},
    store::session::SessionState,
    util::session::active_session,
};

#[component]
pub fn ChangePasswordModal(on_close: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<Signal<SessionState>>();
    let nav = navigator();

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let state = state.clone();
        let Some(session) = active_session(session, &state, nav) else {
            return;
        };
        let form = ChangePasswordForm {
            current_password: current_password(),
            new_password: new_password(),
            confirm_password: confirm_password(),
        };

        spawn(async move {
            match controller::profile::change_password(&state, &session, form).await {
                Ok(reply) => {
                    error.set(None);
                    success.set(Some(reply.message));
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err.error));
                }
            }
        });
    };

    rsx!(
        Modal { title: "Change password", on_close,
            form { class: "form", onsubmit: on_submit,
                label { "Current password" }
                input {
                    class: "input",
                    r#type: "password",
                    value: "{current_password}",
                    oninput: move |evt| current_password.set(evt.value()),
                }
                label { "New password" }
                input {
                    class: "input",
                    r#type: "password",
                    value: "{new_password}",
                    oninput: move |evt| new_password.set(evt.value()),
                }
                label { "Confirm new password" }
                input {
                    class: "input",
                    r#type: "password",
                    value: "{confirm_password}",
                    oninput: move |evt| confirm_password.set(evt.value()),
                }
                ErrorLabel { message: error() }
                SuccessLabel { message: success() }
                button { class: "btn btn-primary", r#type: "submit", "Change password" }
            }
        }
    )
}
