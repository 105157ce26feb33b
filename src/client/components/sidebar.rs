use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaChartPie, FaMagnifyingGlass, FaRightFromBracket, FaScrewdriverWrench, FaUser, FaUsers,
};
use dioxus_free_icons::Icon;
use pokedex::backend::{controller, model::app::AppState};

use crate::client::{
    router::Route, store::session::SessionState, util::session::current_session,
};

/// Layout of the logged-in window: sidebar navigation and the active view.
#[component]
pub fn AppShell() -> Element {
    let state = use_context::<AppState>();
    let mut session = use_context::<Signal<SessionState>>();
    let nav = navigator();

    let Some(current) = current_session(session, &state) else {
        nav.replace(Route::Login {});
        return rsx!();
    };

    let on_logout = move |_| {
        if let Some(ended) = session.write().end() {
            spawn(async move {
                let _ = controller::auth::logout(ended).await;
            });
        }
        nav.replace(Route::Login {});
    };

    rsx! {
        div { class: "shell",
            nav { class: "sidebar",
                div { class: "sidebar-header",
                    p { class: "sidebar-title", "{state.config.app.title}" }
                    p { class: "muted", "{current.username}" }
                }
                Link { to: Route::Dashboard {}, class: "sidebar-link", active_class: "active",
                    Icon { width: 16, height: 16, icon: FaChartPie }
                    "Dashboard"
                }
                Link { to: Route::Search {}, class: "sidebar-link", active_class: "active",
                    Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                    "Search"
                }
                Link { to: Route::Team {}, class: "sidebar-link", active_class: "active",
                    Icon { width: 16, height: 16, icon: FaUsers }
                    "Team"
                }
                Link { to: Route::Profile {}, class: "sidebar-link", active_class: "active",
                    Icon { width: 16, height: 16, icon: FaUser }
                    "Profile"
                }
                if current.is_admin() {
                    Link { to: Route::AdminDashboard {}, class: "sidebar-link",
                        Icon { width: 16, height: 16, icon: FaScrewdriverWrench }
                        "Admin"
                    }
                }
                button { class: "btn btn-ghost sidebar-logout", onclick: on_logout,
                    Icon { width: 16, height: 16, icon: FaRightFromBracket }
                    "Logout"
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
