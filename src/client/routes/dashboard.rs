use dioxus::prelude::*;
use pokedex::{
    backend::{controller, model::app::AppState},
    model::team::TeamStatsDto,
};

use crate::client::{
    components::{ErrorLabel, Page, Sprite},
    router::Route,
    store::session::SessionState,
    util::{format::datetime, session::session_for_load},
};

#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<Signal<SessionState>>();

    let stats = {
        let state = state.clone();
        use_resource(move || {
            let state = state.clone();
            async move {
                let session = session_for_load(session, &state)?;
                controller::team::get_team_stats(&state, &session).await
            }
        })
    };

    let recent = {
        let state = state.clone();
        use_resource(move || {
            let state = state.clone();
            async move {
                let session = session_for_load(session, &state)?;
                controller::pokemon::recent_searches(&state, &session).await
            }
        })
    };

    let popular = use_resource(move || {
        let state = state.clone();
        async move { controller::pokemon::popular_searches(&state).await }
    });

    rsx!(
        Page { title: "Dashboard",
            {match &*stats.read_unchecked() {
                None => rsx!(div { class: "skeleton" }),
                Some(Ok(reply)) => rsx!(TeamSummary { stats: reply.data.clone() }),
                Some(Err(err)) => rsx!(
                    ErrorLabel { message: err.error.clone() }
                    Link { to: Route::Profile {}, class: "btn", "Open profile" }
                ),
            }}
            div { class: "grid-2",
                div { class: "card",
                    h2 { class: "card-title", "Recent searches" }
                    {match &*recent.read_unchecked() {
                        Some(Ok(reply)) => rsx!(
                            ul {
                                for search in reply.data.iter() {
                                    li { key: "{search.term}{search.searched_at}",
                                        "{search.term} "
                                        span { class: "muted", "{datetime(&search.searched_at)}" }
                                    }
                                }
                            }
                        ),
                        Some(Err(err)) => rsx!(ErrorLabel { message: err.error.clone() }),
                        None => rsx!(div { class: "skeleton" }),
                    }}
                }
                div { class: "card",
                    h2 { class: "card-title", "Popular searches" }
                    {match &*popular.read_unchecked() {
                        Some(Ok(reply)) => rsx!(
                            ol {
                                for search in reply.data.iter() {
                                    li { key: "{search.term}", "{search.term} ({search.count})" }
                                }
                            }
                        ),
                        Some(Err(err)) => rsx!(ErrorLabel { message: err.error.clone() }),
                        None => rsx!(div { class: "skeleton" }),
                    }}
                }
            }
        }
    )
}

#[component]
fn TeamSummary(stats: TeamStatsDto) -> Element {
    let averages = [
        ("HP", stats.average_stats.hp),
        ("Attack", stats.average_stats.attack),
        ("Defense", stats.average_stats.defense),
        ("Sp. Attack", stats.average_stats.sp_attack),
        ("Sp. Defense", stats.average_stats.sp_defense),
        ("Speed", stats.average_stats.speed),
    ];

    rsx!(
        div { class: "grid-3",
            div { class: "card stat",
                p { class: "muted", "Team size" }
                p { class: "stat-value", "{stats.total}" }
            }
            div { class: "card stat",
                p { class: "muted", "Strongest" }
                if let Some(entry) = stats.strongest.clone() {
                    Sprite { url: entry.sprite_url.clone(), alt: entry.pokemon_name.clone(), size: 64 }
                    p { class: "stat-value", "{entry.display_name()}" }
                    p { class: "muted", "Attack {entry.stats.attack}" }
                } else {
                    p { "-" }
                }
            }
            div { class: "card stat",
                p { class: "muted", "Fastest" }
                if let Some(entry) = stats.fastest.clone() {
                    Sprite { url: entry.sprite_url.clone(), alt: entry.pokemon_name.clone(), size: 64 }
                    p { class: "stat-value", "{entry.display_name()}" }
                    p { class: "muted", "Speed {entry.stats.speed}" }
                } else {
                    p { "-" }
                }
            }
        }
        div { class: "grid-2",
            div { class: "card",
                h2 { class: "card-title", "Types" }
                for (type_name, count) in stats.types.iter() {
                    p { key: "{type_name}", "{type_name}: {count}" }
                }
            }
            div { class: "card",
                h2 { class: "card-title", "Average stats" }
                for (label, value) in averages {
                    p { key: "{label}", "{label}: {value:.2}" }
                }
            }
        }
    )
}
