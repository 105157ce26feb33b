use dioxus::prelude::*;
use pokedex::{
    backend::{controller, model::app::AppState},
    model::admin::ActivityKind,
};

use crate::client::{
    components::{ErrorLabel, Page},
    store::session::SessionState,
    util::{format::datetime, session::session_for_load},
};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Activity,
    Searches,
}

#[component]
pub fn AdminActivity() -> Element {
    let mut tab = use_signal(|| Tab::Activity);

    rsx!(
        Page { title: "Activity",
            div { class: "tabs",
                button {
                    class: if tab() == Tab::Activity { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(Tab::Activity),
                    "Recent activity"
                }
                button {
                    class: if tab() == Tab::Searches { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(Tab::Searches),
                    "Search logs"
                }
            }
            {match tab() {
                Tab::Activity => rsx!(ActivityTable {}),
                Tab::Searches => rsx!(SearchLogTable {}),
            }}
        }
    )
}

#[component]
fn ActivityTable() -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<Signal<SessionState>>();

    let logs = use_resource(move || {
        let state = state.clone();
        async move {
            let session = session_for_load(session, &state)?;
            controller::admin::get_activity_logs(&state, &session).await
        }
    });

    rsx!(
        {match &*logs.read_unchecked() {
            None => rsx!(div { class: "skeleton" }),
            Some(Err(err)) => rsx!(ErrorLabel { message: err.error.clone() }),
            Some(Ok(reply)) => rsx!(
                table { class: "table",
                    thead {
                        tr {
                            th { "When" }
                            th { "User" }
                            th { "Event" }
                        }
                    }
                    tbody {
                        for (index, log) in reply.data.iter().enumerate() {
                            tr { key: "{index}",
                                td { {datetime(&log.timestamp)} }
                                td { "{log.username}" }
                                td {
                                    span { class: "badge",
                                        {match log.kind {
                                            ActivityKind::Search => "search",
                                            ActivityKind::TeamAddition => "team",
                                        }}
                                    }
                                    " {log.description}"
                                }
                            }
                        }
                    }
                }
            ),
        }}
    )
}

#[component]
fn SearchLogTable() -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<Signal<SessionState>>();

    let logs = use_resource(move || {
        let state = state.clone();
        async move {
            let session = session_for_load(session, &state)?;
            controller::admin::get_search_logs(&state, &session).await
        }
    });

    rsx!(
        {match &*logs.read_unchecked() {
            None => rsx!(div { class: "skeleton" }),
            Some(Err(err)) => rsx!(ErrorLabel { message: err.error.clone() }),
            Some(Ok(reply)) => rsx!(
                table { class: "table",
                    thead {
                        tr {
                            th { "When" }
                            th { "User" }
                            th { "Email" }
                            th { "Term" }
                        }
                    }
                    tbody {
                        for log in reply.data.iter() {
                            tr { key: "{log.id}",
                                td { {datetime(&log.searched_at)} }
                                td { "{log.username}" }
                                td { "{log.email}" }
                                td { "{log.search_term}" }
                            }
                        }
                    }
                }
            ),
        }}
    )
}
