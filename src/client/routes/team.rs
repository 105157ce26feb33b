use dioxus::prelude::*;
use pokedex::{
    backend::{controller, model::app::AppState},
    model::team::TeamEntryDto,
};

use crate::client::{
    components::{
        modal::{ConfirmDeleteModal, EditNicknameModal},
        ErrorLabel, Page, Sprite, TypeBadges,
    },
    router::Route,
    store::session::SessionState,
    util::{
        format::datetime,
        session::{active_session, session_for_load},
    },
};

#[component]
pub fn Team() -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<Signal<SessionState>>();
    let nav = navigator();

    let mut filter = use_signal(String::new);
    let mut refresh = use_signal(|| 0_u32);
    let mut editing = use_signal(|| None::<TeamEntryDto>);
    let mut removing = use_signal(|| None::<TeamEntryDto>);
    let mut remove_error = use_signal(|| None::<String>);
    let max_team_size = state.config.app.max_team_size;

    let team = {
        let state = state.clone();
        use_resource(move || {
            let state = state.clone();
            let term = filter();
            let _ = refresh();

            async move {
                let session = session_for_load(session, &state)?;
                if term.trim().is_empty() {
                    controller::team::get_team(&state, &session).await
                } else {
                    controller::team::search_team(&state, &session, &term).await
                }
            }
        })
    };

    let on_remove = move |_password: String| {
        let state = state.clone();
        let Some(entry) = removing() else {
            return;
        };
        let Some(session) = active_session(session, &state, nav) else {
            return;
        };

        spawn(async move {
            match controller::team::remove_pokemon(&state, &session, entry.id).await {
                Ok(_) => {
                    removing.set(None);
                    remove_error.set(None);
                    refresh += 1;
                }
                Err(err) => remove_error.set(Some(err.error)),
            }
        });
    };

    rsx!(
        Page { title: "Team",
            input {
                class: "input",
                placeholder: "Filter by name or nickname",
                value: "{filter}",
                oninput: move |evt| filter.set(evt.value()),
            }
            {match &*team.read_unchecked() {
                None => rsx!(div { class: "skeleton" }),
                Some(Err(err)) => rsx!(
                    ErrorLabel { message: err.error.clone() }
                    Link { to: Route::Profile {}, class: "btn", "Open profile" }
                ),
                Some(Ok(reply)) if reply.data.is_empty() => rsx!(
                    p { class: "muted", "No Pokémon yet. Add some from the search view." }
                ),
                Some(Ok(reply)) => rsx!(
                    p { class: "muted", "{reply.data.len()} / {max_team_size}" }
                    table { class: "table",
                        thead {
                            tr {
                                th {}
                                th { "Name" }
                                th { "Types" }
                                th { "Total stats" }
                                th { "Joined" }
                                th {}
                            }
                        }
                        tbody {
                            for entry in reply.data.iter().cloned() {
                                TeamRow {
                                    key: "{entry.id}",
                                    entry: entry.clone(),
                                    on_edit: move |entry| editing.set(Some(entry)),
                                    on_remove: move |entry| {
                                        remove_error.set(None);
                                        removing.set(Some(entry));
                                    },
                                }
                            }
                        }
                    }
                ),
            }}
            if let Some(entry) = editing() {
                EditNicknameModal {
                    entry,
                    on_saved: move |_| {
                        editing.set(None);
                        refresh += 1;
                    },
                    on_close: move |_| editing.set(None),
                }
            }
            if let Some(message) = removing().map(|entry| format!("Remove {} from your team?", entry.display_name())) {
                ConfirmDeleteModal {
                    title: "Remove from team",
                    message,
                    error: remove_error(),
                    on_confirm: on_remove,
                    on_close: move |_| removing.set(None),
                }
            }
        }
    )
}

#[component]
fn TeamRow(
    entry: TeamEntryDto,
    on_edit: EventHandler<TeamEntryDto>,
    on_remove: EventHandler<TeamEntryDto>,
) -> Element {
    let joined = datetime(&entry.joined_at);
    let total = entry.stats.total();
    let name = entry.display_name().to_string();
    let edit_entry = entry.clone();
    let remove_entry = entry.clone();

    rsx!(
        tr {
            td {
                Sprite { url: entry.sprite_url.clone(), alt: entry.pokemon_name.clone(), size: 48 }
            }
            td {
                p { "{name}" }
                if entry.nickname.is_some() {
                    p { class: "muted", "{entry.pokemon_name}" }
                }
            }
            td {
                TypeBadges { types: entry.types.clone() }
            }
            td { "{total}" }
            td { "{joined}" }
            td {
                button { class: "btn btn-ghost", onclick: move |_| on_edit.call(edit_entry.clone()), "Nickname" }
                button { class: "btn btn-danger", onclick: move |_| on_remove.call(remove_entry.clone()), "Remove" }
            }
        }
    )
}
