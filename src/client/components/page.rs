use dioxus::prelude::*;

#[component]
pub fn Page(title: String, class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or("");

    rsx!(
        div {
            class: "page {class}",
            h1 { class: "page-title", "{title}" }
            {children}
        }
    )
}
