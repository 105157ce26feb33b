use dioxus::prelude::*;
use pokedex::{
    backend::{controller, model::app::AppState},
    model::team::TeamEntryDto,
};

use crate::client::{
    components::{modal::Modal, ErrorLabel},
    store::session::SessionState,
    util::session::active_session,
};

#[component]
pub fn EditNicknameModal(
    entry: TeamEntryDto,
    on_saved: EventHandler<TeamEntryDto>,
    on_close: EventHandler<()>,
) -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<Signal<SessionState>>();
    let nav = navigator();

    let entry_id = entry.id;
    let mut nickname = use_signal(|| entry.nickname.clone().unwrap_or_default());
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let state = state.clone();
        let Some(session) = active_session(session, &state, nav) else {
            return;
        };

        spawn(async move {
            match controller::team::update_nickname(&state, &session, entry_id, &nickname()).await
            {
                Ok(reply) => on_saved.call(reply.data),
                Err(err) => error.set(Some(err.error)),
            }
        });
    };

    rsx!(
        Modal { title: "Nickname for {entry.pokemon_name}", on_close,
            form { class: "form", onsubmit: on_submit,
                input {
                    class: "input",
                    maxlength: 50,
                    value: "{nickname}",
                    oninput: move |evt| nickname.set(evt.value()),
                }
                ErrorLabel { message: error() }
                button { class: "btn btn-primary", r#type: "submit", "Save" }
            }
        }
    )
}
