use dioxus::prelude::*;
use pokedex::backend::model::app::AppState;

use crate::client::{
    router::Route, store::session::SessionState, util::session::current_session,
};

/// Layout of the admin dashboard; non-admin sessions are sent back to the app.
#[component]
pub fn AdminShell() -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<Signal<SessionState>>();
    let nav = navigator();

    match current_session(session, &state) {
        None => {
            nav.replace(Route::Login {});
            return rsx!();
        }
        Some(current) if !current.is_admin() => {
            nav.replace(Route::Dashboard {});
            return rsx!();
        }
        Some(_) => {}
    }

    rsx! {
        div { class: "shell",
            nav { class: "sidebar",
                div { class: "sidebar-header",
                    p { class: "sidebar-title", "Administration" }
                }
                Link { to: Route::AdminDashboard {}, class: "sidebar-link", active_class: "active", "Dashboard" }
                Link { to: Route::AdminUsers {}, class: "sidebar-link", active_class: "active", "Users" }
                Link { to: Route::AdminActivity {}, class: "sidebar-link", active_class: "active", "Activity" }
                Link { to: Route::AdminStatistics {}, class: "sidebar-link", active_class: "active", "Statistics" }
                Link { to: Route::Dashboard {}, class: "sidebar-link", "Back to app" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
