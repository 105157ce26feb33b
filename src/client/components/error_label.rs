use dioxus::prelude::*;

/// In-window error message; renders nothing when there is no error.
#[component]
pub fn ErrorLabel(message: Option<String>) -> Element {
    rsx!(
        if let Some(message) = message {
            div { class: "alert alert-error", role: "alert", "{message}" }
        }
    )
}

/// In-window confirmation message.
#[component]
pub fn SuccessLabel(message: Option<String>) -> Element {
    rsx!(
        if let Some(message) = message {
            div { class: "alert alert-success", "{message}" }
        }
    )
}
