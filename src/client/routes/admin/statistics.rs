use dioxus::prelude::*;
use pokedex::{
    backend::{controller, model::app::AppState},
    model::admin::{CountDto, SystemStatsDto},
};

use crate::client::{
    components::{ErrorLabel, Page},
    store::session::SessionState,
    util::session::session_for_load,
};

#[component]
pub fn AdminStatistics() -> Element {
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
        Page { title: "Statistics",
            {match &*stats.read_unchecked() {
                None => rsx!(div { class: "skeleton" }),
                Some(Err(err)) => rsx!(ErrorLabel { message: err.error.clone() }),
                Some(Ok(reply)) => rsx!(Charts { stats: reply.data.clone() }),
            }}
        }
    )
}

#[component]
fn Charts(stats: SystemStatsDto) -> Element {
    let by_day = stats
        .searches_by_day
        .iter()
        .map(|(day, count)| CountDto {
            name: day.format("%a %d").to_string(),
            count: *count,
        })
        .collect::<Vec<_>>();
    let by_role = stats
        .users_by_role
        .iter()
        .map(|(name, count)| CountDto {
            name: name.clone(),
            count: *count,
        })
        .collect::<Vec<_>>();

    rsx!(
        div { class: "grid-2",
            BarList { title: "Searches over the last seven days", rows: by_day }
            BarList { title: "Users by role", rows: by_role }
            BarList { title: "Most popular Pokémon", rows: stats.popular_pokemon }
            BarList { title: "Most popular regions", rows: stats.popular_regions }
        }
    )
}

/// Horizontal bars scaled to the largest count.
#[component]
fn BarList(title: String, rows: Vec<CountDto>) -> Element {
    let max = rows.iter().map(|row| row.count).max().unwrap_or(0).max(1);
    let bars = rows
        .into_iter()
        .map(|row| {
            let width = format!("width: {}%", row.count * 100 / max);
            (row, width)
        })
        .collect::<Vec<_>>();

    rsx!(
        div { class: "card",
            h2 { class: "card-title", "{title}" }
            if bars.is_empty() {
                p { class: "muted", "No data yet" }
            }
            for (row, width) in bars {
                div { key: "{row.name}", class: "stat-bar",
                    span { "{row.name}" }
                    div { style: "{width}" }
                    span { class: "muted", "{row.count}" }
                }
            }
        }
    )
}
