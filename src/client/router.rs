use dioxus::prelude::*;

use crate::client::{
    components::{AdminShell, AppShell},
    routes::{
        admin::{AdminActivity, AdminDashboard, AdminStatistics, AdminUsers},
        Dashboard, Login, NotFound, Profile, Search, Team,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Login {},

    #[nest("/app")]

        #[layout(AppShell)]

        #[route("/")]
        Dashboard {},

        #[route("/search")]
        Search {},

        #[route("/team")]
        Team {},

        #[route("/profile")]
        Profile {},

        #[end_layout]

    #[end_nest]

    #[nest("/admin")]

        #[layout(AdminShell)]

        #[route("/")]
        AdminDashboard {},

        #[route("/users")]
        AdminUsers {},

        #[route("/activity")]
        AdminActivity {},

        #[route("/statistics")]
        AdminStatistics {},

        #[end_layout]

    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
