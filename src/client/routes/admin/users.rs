use dioxus::prelude::*;
use pokedex::{
    backend::{controller, model::app::AppState},
    model::{
        admin::{AdminUserDto, UserDetailsDto},
        user::Role,
    },
};

use crate::client::{
    components::{error_label::SuccessLabel, modal::ConfirmDeleteModal, ErrorLabel, Page},
    store::session::SessionState,
    util::{
        format::datetime,
        session::{active_session, session_for_load},
    },
};

#[component]
pub fn AdminUsers() -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<Signal<SessionState>>();
    let nav = navigator();

    let mut refresh = use_signal(|| 0_u32);
    let mut selected = use_signal(|| None::<i32>);
    let mut deleting = use_signal(|| None::<AdminUserDto>);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);

    let users = {
        let state = state.clone();
        use_resource(move || {
            let state = state.clone();
            let _ = refresh();
            async move {
                let session = session_for_load(session, &state)?;
                controller::admin::list_users(&state, &session).await
            }
        })
    };

    let on_role = {
        let state = state.clone();
        EventHandler::new(move |(user_id, role): (i32, String)| {
            let state = state.clone();
            let Some(session) = active_session(session, &state, nav) else {
                return;
            };

            spawn(async move {
                match controller::admin::update_role(&state, &session, user_id, &role).await {
                    Ok(reply) => {
                        error.set(None);
                        success.set(Some(reply.message));
                        refresh += 1;
                    }
                    Err(err) => {
                        success.set(None);
                        error.set(Some(err.error));
                    }
                }
            });
        })
    };

    let on_delete = move |_: String| {
        let state = state.clone();
        let Some(user) = deleting() else {
            return;
        };
        let Some(session) = active_session(session, &state, nav) else {
            return;
        };

        spawn(async move {
            match controller::admin::delete_user(&state, &session, user.id).await {
                Ok(reply) => {
                    deleting.set(None);
                    error.set(None);
                    success.set(Some(reply.message));
                    if selected() == Some(user.id) {
                        selected.set(None);
                    }
                    refresh += 1;
                }
                Err(err) => {
                    deleting.set(None);
                    success.set(None);
                    error.set(Some(err.error));
                }
            }
        });
    };

    rsx!(
        Page { title: "Users",
            ErrorLabel { message: error() }
            SuccessLabel { message: success() }
            {match &*users.read_unchecked() {
                None => rsx!(div { class: "skeleton" }),
                Some(Err(err)) => rsx!(ErrorLabel { message: err.error.clone() }),
                Some(Ok(reply)) => rsx!(
                    table { class: "table",
                        thead {
                            tr {
                                th { "Username" }
                                th { "Email" }
                                th { "Role" }
                                th { "Trainer" }
                                th { "Pokémon" }
                                th { "Searches" }
                                th { "Joined" }
                                th {}
                            }
                        }
                        tbody {
                            for user in reply.data.iter().cloned() {
                                UserRow {
                                    key: "{user.id}",
                                    user,
                                    on_select: move |id| selected.set(Some(id)),
                                    on_role,
                                    on_delete: move |user| deleting.set(Some(user)),
                                }
                            }
                        }
                    }
                ),
            }}
            if let Some(user_id) = selected() {
                UserDetails { key: "{user_id}-{refresh}", user_id }
            }
            if let Some(message) = deleting().map(|user| format!("Delete {} and all of their data?", user.username)) {
                ConfirmDeleteModal {
                    title: "Delete user",
                    message,
                    on_confirm: on_delete,
                    on_close: move |_| deleting.set(None),
                }
            }
        }
    )
}

#[component]
fn UserRow(
    user: AdminUserDto,
    on_select: EventHandler<i32>,
    on_role: EventHandler<(i32, String)>,
    on_delete: EventHandler<AdminUserDto>,
) -> Element {
    let id = user.id;
    let joined = datetime(&user.created_at);
    let trainer = user.trainer_name.clone().unwrap_or_else(|| "-".to_string());
    let toggled = match user.role {
        Role::Admin => Role::User,
        Role::User => Role::Admin,
    };
    let toggle_label = format!("Make {toggled}");
    let delete_user = user.clone();

    rsx!(
        tr {
            td {
                button { class: "btn btn-ghost", onclick: move |_| on_select.call(id), "{user.username}" }
            }
            td { "{user.email}" }
            td {
                span { class: "badge", "{user.role}" }
            }
            td { "{trainer}" }
            td { "{user.total_pokemon}" }
            td { "{user.total_searches}" }
            td { "{joined}" }
            td {
                button {
                    class: "btn",
                    onclick: move |_| on_role.call((id, toggled.to_string())),
                    "{toggle_label}"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_delete.call(delete_user.clone()),
                    "Delete"
                }
            }
        }
    )
}

#[component]
fn UserDetails(user_id: i32) -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<Signal<SessionState>>();

    let details = use_resource(move || {
        let state = state.clone();
        async move {
            let session = session_for_load(session, &state)?;
            controller::admin::get_user_details(&state, &session, user_id).await
        }
    });

    rsx!(
        {match &*details.read_unchecked() {
            None => rsx!(div { class: "skeleton" }),
            Some(Err(err)) => rsx!(ErrorLabel { message: err.error.clone() }),
            Some(Ok(reply)) => rsx!(DetailsCard { details: reply.data.clone() }),
        }}
    )
}

#[component]
fn DetailsCard(details: UserDetailsDto) -> Element {
    let trainer = details.user.trainer_name.clone().unwrap_or_else(|| "No trainer".to_string());
    let age = details
        .trainer_age
        .map(|age| age.to_string())
        .unwrap_or_else(|| "-".to_string());
    let region = details.trainer_region.clone().unwrap_or_else(|| "-".to_string());

    rsx!(
        div { class: "card",
            h2 { class: "card-title", "{details.user.username}" }
            p { "{trainer}, age {age}, region {region}" }
            h3 { "Recent searches" }
            if details.recent_searches.is_empty() {
                p { class: "muted", "No searches yet" }
            }
            ul {
                for (index, term) in details.recent_searches.iter().enumerate() {
                    li { key: "{index}", "{term}" }
                }
            }
        }
    )
}
