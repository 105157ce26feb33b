use dioxus::prelude::*;
use pokedex::{
    backend::{controller, model::app::AppState},
    model::{
        team::TrainerStatsDto,
        user::{ProfileDto, ProfileForm},
    },
};

use crate::client::{
    components::{
        error_label::SuccessLabel,
        modal::{ChangePasswordModal, ConfirmDeleteModal},
        ErrorLabel, Page,
    },
    router::Route,
    store::session::SessionState,
    util::{
        format::datetime,
        session::{active_session, session_for_load},
    },
};

#[component]
pub fn Profile() -> Element {
    let state = use_context::<AppState>();
    let mut session = use_context::<Signal<SessionState>>();
    let nav = navigator();

    let mut refresh = use_signal(|| 0_u32);
    let mut changing_password = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<String>);

    let profile = {
        let state = state.clone();
        use_resource(move || {
            let state = state.clone();
            let _ = refresh();
            async move {
                let session = session_for_load(session, &state)?;
                controller::profile::get_profile(&state, &session).await
            }
        })
    };

    let stats = {
        let state = state.clone();
        use_resource(move || {
            let state = state.clone();
            let _ = refresh();
            async move {
                let session = session_for_load(session, &state)?;
                controller::profile::get_trainer_stats(&state, &session).await
            }
        })
    };

    let on_delete = move |password: String| {
        let state = state.clone();
        let Some(current) = active_session(session, &state, nav) else {
            return;
        };

        spawn(async move {
            match controller::profile::delete_account(&state, current, &password).await {
                Ok(_) => {
                    session.write().end();
                    nav.replace(Route::Login {});
                }
                Err(err) => delete_error.set(Some(err.error)),
            }
        });
    };

    rsx!(
        Page { title: "Profile",
            {match &*profile.read_unchecked() {
                None => rsx!(div { class: "skeleton" }),
                Some(Err(err)) => rsx!(ErrorLabel { message: err.error.clone() }),
                Some(Ok(reply)) => rsx!(
                    div { class: "grid-2",
                        Account { profile: reply.data.clone() }
                        ProfileEditor {
                            profile: reply.data.clone(),
                            on_saved: move |_| refresh += 1,
                        }
                    }
                ),
            }}
            {match &*stats.read_unchecked() {
                Some(Ok(reply)) => rsx!(TrainerSummary { stats: reply.data.clone() }),
                Some(Err(err)) => rsx!(p { class: "muted", "{err.error}" }),
                None => rsx!(),
            }}
            div { class: "card",
                h2 { class: "card-title", "Security" }
                button { class: "btn", onclick: move |_| changing_password.set(true), "Change password" }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| {
                        delete_error.set(None);
                        deleting.set(true);
                    },
                    "Delete account"
                }
            }
            if changing_password() {
                ChangePasswordModal { on_close: move |_| changing_password.set(false) }
            }
            if deleting() {
                ConfirmDeleteModal {
                    title: "Delete account",
                    message: "This removes your account, trainer, team and search history. Enter your password to confirm.",
                    require_password: true,
                    error: delete_error(),
                    on_confirm: on_delete,
                    on_close: move |_| deleting.set(false),
                }
            }
        }
    )
}

#[component]
fn Account(profile: ProfileDto) -> Element {
    let created = datetime(&profile.created_at);

    rsx!(
        div { class: "card",
            h2 { class: "card-title", "{profile.username}" }
            p { "{profile.email}" }
            p { class: "muted", "Role: {profile.role}" }
            p { class: "muted", "Member since {created}" }
            if let Some(trainer) = profile.trainer {
                p { "Trainer {trainer.name}, {trainer.pokemon_count} Pokémon on the team" }
            } else {
                p { class: "muted", "Create your trainer to start building a team." }
            }
        }
    )
}

/// Edits email and trainer fields. Blank inputs are sent as `None`.
#[component]
fn ProfileEditor(profile: ProfileDto, on_saved: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<Signal<SessionState>>();
    let nav = navigator();

    let trainer = profile.trainer.clone();
    let mut email = use_signal(|| profile.email.clone());
    let mut trainer_name = {
        let trainer = trainer.clone();
        use_signal(move || trainer.map(|t| t.name).unwrap_or_default())
    };
    let mut age = {
        let trainer = trainer.clone();
        use_signal(move || {
            trainer
                .and_then(|t| t.age)
                .map(|age| age.to_string())
                .unwrap_or_default()
        })
    };
    let mut region = use_signal(move || trainer.and_then(|t| t.region).unwrap_or_default());
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let state = state.clone();
        let Some(session) = active_session(session, &state, nav) else {
            return;
        };

        let age = match age().trim() {
            "" => None,
            value => match value.parse::<i32>() {
                Ok(age) => Some(age),
                Err(_) => {
                    error.set(Some("Age must be a number".to_string()));
                    return;
                }
            },
        };
        let form = ProfileForm {
            email: Some(email()),
            trainer_name: Some(trainer_name()),
            age,
            region: Some(region()),
        };

        spawn(async move {
            match controller::profile::update_profile(&state, &session, form).await {
                Ok(reply) => {
                    error.set(None);
                    success.set(Some(reply.message));
                    on_saved.call(());
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err.error));
                }
            }
        });
    };

    rsx!(
        form { class: "card form", onsubmit: on_submit,
            h2 { class: "card-title", "Edit profile" }
            label { "Email" }
            input {
                class: "input",
                r#type: "email",
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }
            label { "Trainer name" }
            input {
                class: "input",
                value: "{trainer_name}",
                oninput: move |evt| trainer_name.set(evt.value()),
            }
            label { "Age" }
            input {
                class: "input",
                r#type: "number",
                min: 8,
                max: 100,
                value: "{age}",
                oninput: move |evt| age.set(evt.value()),
            }
            label { "Region" }
            input {
                class: "input",
                value: "{region}",
                oninput: move |evt| region.set(evt.value()),
            }
            ErrorLabel { message: error() }
            SuccessLabel { message: success() }
            button { class: "btn btn-primary", r#type: "submit", "Save" }
        }
    )
}

#[component]
fn TrainerSummary(stats: TrainerStatsDto) -> Element {
    let favorites = stats
        .favorite_types
        .iter()
        .map(|(name, count)| format!("{name} ({count})"))
        .collect::<Vec<_>>()
        .join(", ");
    let average_attack = format!("{:.2}", stats.average_stats.attack);

    rsx!(
        div { class: "card",
            h2 { class: "card-title", "Trainer statistics" }
            div { class: "grid-3",
                div { class: "stat",
                    p { class: "stat-value", "{stats.total_pokemon}" }
                    p { class: "muted", "Pokémon" }
                }
                div { class: "stat",
                    p { class: "stat-value", "{stats.total_base_experience}" }
                    p { class: "muted", "Base experience" }
                }
                div { class: "stat",
                    p { class: "stat-value", "{average_attack}" }
                    p { class: "muted", "Average attack" }
                }
            }
            if !favorites.is_empty() {
                p { "Favorite types: {favorites}" }
            }
            if let Some(strongest) = stats.strongest {
                p {
                    "Strongest: {strongest.name}"
                    if let Some(total) = strongest.total_stats {
                        " ({total})"
                    }
                }
            }
            if let Some(newest) = stats.newest {
                p { "Newest: {newest.name}" }
            }
        }
    )
}
