use std::time::Instant;

use dioxus::prelude::*;
use pokedex::{
    backend::{controller, model::app::AppState},
    model::user::{LoginForm, RegisterForm},
};

use crate::client::{components::ErrorLabel, router::Route, store::session::SessionState};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Login,
    Register,
}

/// Login and registration tabs.
#[component]
pub fn Login() -> Element {
    let state = use_context::<AppState>();
    let mut tab = use_signal(|| Tab::Login);

    rsx!(
        div { class: "splash",
            div { class: "card auth-card",
                h1 { class: "page-title", "{state.config.app.title}" }
                div { class: "tabs", role: "tablist",
                    button {
                        class: if tab() == Tab::Login { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(Tab::Login),
                        "Login"
                    }
                    button {
                        class: if tab() == Tab::Register { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(Tab::Register),
                        "Register"
                    }
                }
                {match tab() {
                    Tab::Login => rsx!(LoginTab {}),
                    Tab::Register => rsx!(RegisterTab {}),
                }}
            }
        }
    )
}

#[component]
fn LoginTab() -> Element {
    let state = use_context::<AppState>();
    let mut session = use_context::<Signal<SessionState>>();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let state = state.clone();
        let form = LoginForm {
            username: username(),
            password: password(),
        };
        pending.set(true);

        spawn(async move {
            match controller::auth::login(&state, form).await {
                Ok(reply) => {
                    session.write().start(reply.data, Instant::now());
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    password.set(String::new());
                    error.set(Some(err.error));
                    pending.set(false);
                }
            }
        });
    };

    rsx!(
        form { class: "form", onsubmit: on_submit,
            label { "Username" }
            input {
                class: "input",
                value: "{username}",
                oninput: move |evt| username.set(evt.value()),
            }
            label { "Password" }
            input {
                class: "input",
                r#type: "password",
                value: "{password}",
                oninput: move |evt| password.set(evt.value()),
            }
            ErrorLabel { message: error() }
            button { class: "btn btn-primary", r#type: "submit", disabled: pending(), "Login" }
        }
    )
}

#[component]
fn RegisterTab() -> Element {
    let state = use_context::<AppState>();
    let mut session = use_context::<Signal<SessionState>>();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let min_length = state.config.security.min_password_length;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let state = state.clone();
        let form = RegisterForm {
            username: username(),
            email: email(),
            password: password(),
        };

        spawn(async move {
            match controller::auth::register(&state, form).await {
                Ok(reply) => {
                    session.write().start(reply.data, Instant::now());
                    nav.replace(Route::Profile {});
                }
                Err(err) => error.set(Some(err.error)),
            }
        });
    };

    rsx!(
        form { class: "form", onsubmit: on_submit,
            label { "Username" }
            input {
                class: "input",
                value: "{username}",
                oninput: move |evt| username.set(evt.value()),
            }
            label { "Email" }
            input {
                class: "input",
                r#type: "email",
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }
            label { "Password" }
            input {
                class: "input",
                r#type: "password",
                value: "{password}",
                oninput: move |evt| password.set(evt.value()),
            }
            p { class: "muted",
                "At least {min_length} characters with upper and lower case letters, a digit and a special character."
            }
            ErrorLabel { message: error() }
            button { class: "btn btn-primary", r#type: "submit", "Create account" }
        }
    )
}
