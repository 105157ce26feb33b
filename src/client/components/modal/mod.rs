pub mod change_password;
pub mod confirm_delete;
pub mod edit_nickname;

pub use change_password::ChangePasswordModal;
pub use confirm_delete::ConfirmDeleteModal;
pub use edit_nickname::EditNicknameModal;

use dioxus::prelude::*;

#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx!(
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog",
                div { class: "modal-header",
                    h3 { "{title}" }
                    button { class: "btn btn-ghost", onclick: move |_| on_close.call(()), "✕" }
                }
                {children}
            }
        }
    )
}
