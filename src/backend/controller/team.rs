use crate::{
    backend::{
        controller::util::get_trainer::get_trainer_id, model::app::AppState,
        service::team::TeamService, util::logging::log_user_activity,
    },
    model::{
        api::{ApiResult, Reply},
        team::{TeamEntryDto, TeamStatsDto},
        user::Session,
    },
};

pub async fn get_team(state: &AppState, session: &Session) -> ApiResult<Vec<TeamEntryDto>> {
    let trainer_id = get_trainer_id(state, session).await?;
    let team_service = TeamService::new(&state.db, &state.pokeapi, &state.config);

    let team = team_service.get_team(trainer_id).await?;

    Ok(Reply::new("Team retrieved successfully", team))
}

/// Add a Pokémon by name or id, optionally with a nickname
pub async fn add_pokemon(
    state: &AppState,
    session: &Session,
    identifier: &str,
    nickname: Option<&str>,
) -> ApiResult<TeamEntryDto> {
    let trainer_id = get_trainer_id(state, session).await?;
    let team_service = TeamService::new(&state.db, &state.pokeapi, &state.config);

    let entry = team_service
        .add_pokemon(trainer_id, identifier, nickname)
        .await?;

    log_user_activity(
        session.user_id,
        "add_pokemon",
        &format!("Added {} to team", entry.pokemon_name),
    );

    Ok(Reply::new(
        format!("{} added to your team", entry.display_name()),
        entry,
    ))
}

pub async fn remove_pokemon(state: &AppState, session: &Session, entry_id: i32) -> ApiResult<()> {
    let trainer_id = get_trainer_id(state, session).await?;
    let team_service = TeamService::new(&state.db, &state.pokeapi, &state.config);

    team_service.remove_pokemon(entry_id, trainer_id).await?;

    log_user_activity(
        session.user_id,
        "remove_pokemon",
        &format!("Removed team entry {entry_id}"),
    );

    Ok(Reply::new("Pokémon removed from your team", ()))
}

pub async fn update_nickname(
    state: &AppState,
    session: &Session,
    entry_id: i32,
    nickname: &str,
) -> ApiResult<TeamEntryDto> {
    let trainer_id = get_trainer_id(state, session).await?;
    let team_service = TeamService::new(&state.db, &state.pokeapi, &state.config);

    let entry = team_service
        .update_nickname(entry_id, trainer_id, nickname)
        .await?;

    Ok(Reply::new("Nickname updated", entry))
}

pub async fn search_team(
    state: &AppState,
    session: &Session,
    term: &str,
) -> ApiResult<Vec<TeamEntryDto>> {
    let trainer_id = get_trainer_id(state, session).await?;
    let team_service = TeamService::new(&state.db, &state.pokeapi, &state.config);

    let team = team_service.search_team(trainer_id, term).await?;

    Ok(Reply::new("Team search complete", team))
}

/// Team summary; only a missing trainer is reported as an error
pub async fn get_team_stats(state: &AppState, session: &Session) -> ApiResult<TeamStatsDto> {
    let trainer_id = get_trainer_id(state, session).await?;
    let team_service = TeamService::new(&state.db, &state.pokeapi, &state.config);

    let stats = team_service.get_team_stats(trainer_id).await;

    Ok(Reply::new("Team statistics", stats))
}
