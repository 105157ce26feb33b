use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        div { class: "splash",
            p { "Nothing at /{path}" }
            Link { to: Route::Login {}, class: "btn", "Back" }
        }
    )
}
