use dioxus::prelude::*;
use dioxus_logger::tracing;
use pokedex::backend::{
    config::Config,
    model::app::AppState,
    startup::{build_pokeapi_client, connect_to_database},
};

use crate::client::{router::Route, store::session::SessionState};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root component.
///
/// Connects to the database (running migrations) on the UI runtime, then
/// hands the assembled [`AppState`] to the router. Startup failures are shown
/// in the window.
#[component]
pub fn App() -> Element {
    let config = use_context::<Config>();

    let startup = use_resource(move || {
        let config = config.clone();

        async move {
            let pokeapi = build_pokeapi_client(&config)?;
            let db = connect_to_database(&config).await?;

            Ok::<_, pokedex::backend::error::Error>(AppState::new(db, pokeapi, config))
        }
    });

    let body = match &*startup.read_unchecked() {
        None => rsx!(
            div { class: "splash", "Connecting to the database..." }
        ),
        Some(Err(err)) => {
            tracing::error!("Startup failed: {}", err);

            rsx!(
                div { class: "splash",
                    div { class: "alert alert-error",
                        p { "Could not start the application." }
                        p { "{err}" }
                    }
                }
            )
        }
        Some(Ok(state)) => rsx!(
            Ready { state: state.clone() }
        ),
    };

    rsx!(
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {body}
    )
}

#[component]
fn Ready(state: AppState) -> Element {
    use_context_provider(|| state.clone());
    use_context_provider(|| Signal::new(SessionState::default()));

    rsx!(
        document::Title { "{state.config.app.title}" }
        div { "data-theme": "{state.config.app.theme}",
            Router::<Route> {}
        }
    )
}
