use dioxus::prelude::*;
use pokedex::{
    backend::{controller, model::app::AppState},
    model::admin::SystemStatsDto,
};

use crate::client::{
    components::{ErrorLabel, Page},
    store::session::SessionState,
    util::{format::datetime, session::session_for_load},
};

#[component]
pub fn AdminDashboard() -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<Signal<SessionState>>();

    let stats = use_resource(move || {
        let state = state.clone();
        async move {
            let session = session_for_load(session, &state)?;
            controller::admin::get_system_stats(&state, &session).await
        }
    });

    rsx!(
        Page { title: "Administration",
            {match &*stats.read_unchecked() {
                None => rsx!(div { class: "skeleton" }),
                Some(Err(err)) => rsx!(ErrorLabel { message: err.error.clone() }),
                Some(Ok(reply)) => rsx!(Overview { stats: reply.data.clone() }),
            }}
        }
    )
}

#[component]
fn Overview(stats: SystemStatsDto) -> Element {
    let totals = [
        ("Users", stats.total_users),
        ("Trainers", stats.total_trainers),
        ("Pokémon on teams", stats.total_pokemon),
        ("Searches", stats.total_searches),
    ];

    rsx!(
        div { class: "grid-3",
            for (label, value) in totals {
                div { key: "{label}", class: "card stat",
                    p { class: "stat-value", "{value}" }
                    p { class: "muted", "{label}" }
                }
            }
        }
        div { class: "card",
            h2 { class: "card-title", "Newest users" }
            if stats.recent_users.is_empty() {
                p { class: "muted", "No users yet" }
            }
            table { class: "table",
                tbody {
                    for user in stats.recent_users {
                        tr { key: "{user.username}",
                            td { "{user.username}" }
                            td { "{user.email}" }
                            td { {datetime(&user.created_at)} }
                        }
                    }
                }
            }
        }
    )
}
