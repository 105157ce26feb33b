use dioxus::prelude::*;
use pokedex::{
    backend::{controller, model::app::AppState},
    model::pokemon::{PokemonDto, PokemonSummaryDto},
};

use crate::client::{
    components::{error_label::SuccessLabel, ErrorLabel, Page, PokemonCard, PokemonDetail},
    store::session::SessionState,
    util::session::active_session,
};

#[component]
pub fn Search() -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<Signal<SessionState>>();
    let nav = navigator();

    let mut query = use_signal(String::new);
    let mut results = use_signal(Vec::<PokemonSummaryDto>::new);
    let mut message = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);
    let mut searching = use_signal(|| false);
    let mut selected = use_signal(|| None::<PokemonDto>);

    let types = {
        let state = state.clone();
        use_resource(move || {
            let state = state.clone();
            async move { controller::pokemon::get_types(&state).await }
        })
    };

    let on_search = {
        let state = state.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let state = state.clone();
            let Some(session) = active_session(session, &state, nav) else {
                return;
            };
            searching.set(true);
            selected.set(None);

            spawn(async move {
                match controller::pokemon::search(&state, &session, &query()).await {
                    Ok(reply) => {
                        error.set(None);
                        message.set(reply.data.is_empty().then_some(reply.message));
                        results.set(reply.data);
                    }
                    Err(err) => {
                        results.set(Vec::new());
                        message.set(None);
                        error.set(Some(err.error));
                    }
                }
                searching.set(false);
            });
        }
    };

    let on_select = EventHandler::new(move |id: i32| {
        let state = state.clone();

        spawn(async move {
            match controller::pokemon::get_pokemon(&state, &id.to_string()).await {
                Ok(reply) => selected.set(Some(reply.data)),
                Err(err) => error.set(Some(err.error)),
            }
        });
    });

    let type_list = match &*types.read_unchecked() {
        Some(Ok(reply)) => Some(reply.data.join(", ")),
        _ => None,
    };

    rsx!(
        Page { title: "Search",
            form { class: "search-bar", onsubmit: on_search,
                input {
                    class: "input",
                    placeholder: "Name or Pokédex number",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", disabled: searching(), "Search" }
            }
            if let Some(type_list) = type_list {
                p { class: "muted", "Types: {type_list}" }
            }
            ErrorLabel { message: error() }
            if let Some(message) = message() {
                p { class: "muted", "{message}" }
            }
            if searching() {
                div { class: "skeleton" }
            }
            if let Some(pokemon) = selected() {
                PokemonDetail { pokemon: pokemon.clone(),
                    AddToTeam { pokemon }
                }
            }
            div { class: "card-grid",
                for pokemon in results() {
                    PokemonCard { key: "{pokemon.id}", pokemon: pokemon.clone(), on_select }
                }
            }
        }
    )
}

#[component]
fn AddToTeam(pokemon: PokemonDto) -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<Signal<SessionState>>();
    let nav = navigator();

    let mut nickname = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);
    let identifier = pokemon.id.to_string();

    let on_add = move |evt: FormEvent| {
        evt.prevent_default();
        let state = state.clone();
        let identifier = identifier.clone();
        let Some(session) = active_session(session, &state, nav) else {
            return;
        };

        spawn(async move {
            let nickname = nickname();
            let nickname = Some(nickname.as_str()).filter(|n| !n.trim().is_empty());

            match controller::team::add_pokemon(&state, &session, &identifier, nickname).await {
                Ok(reply) => {
                    error.set(None);
                    success.set(Some(reply.message));
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err.error));
                }
            }
        });
    };

    rsx!(
        form { class: "form-inline", onsubmit: on_add,
            input {
                class: "input",
                placeholder: "Nickname (optional)",
                maxlength: 50,
                value: "{nickname}",
                oninput: move |evt| nickname.set(evt.value()),
            }
            button { class: "btn btn-primary", r#type: "submit", "Add {pokemon.name} to team" }
        }
        ErrorLabel { message: error() }
        SuccessLabel { message: success() }
    )
}
