use crate::{
    backend::{
        error::{pokemon::PokemonError, Error},
        model::app::AppState,
        service::pokemon::PokemonService,
    },
    model::{
        api::{ApiResult, ErrorDto, Reply},
        pokemon::{PokemonDto, PokemonSummaryDto, PopularSearchDto, SearchTermDto},
        user::Session,
    },
};

/// Entries shown in the recent and popular search lists.
pub const HISTORY_LIMIT: u64 = 10;

/// Detail record for a name or numeric id
pub async fn get_pokemon(state: &AppState, identifier: &str) -> ApiResult<PokemonDto> {
    let pokemon_service = PokemonService::new(&state.db, &state.pokeapi, &state.config);

    let Some(pokemon) = pokemon_service.get_pokemon(identifier).await? else {
        return Err(ErrorDto::from(Error::from(PokemonError::NotFound(
            identifier.trim().to_string(),
        ))));
    };

    Ok(Reply::new("Data retrieved successfully", pokemon))
}

/// Search the index and record the query in the user's history
pub async fn search(
    state: &AppState,
    session: &Session,
    query: &str,
) -> ApiResult<Vec<PokemonSummaryDto>> {
    let pokemon_service = PokemonService::new(&state.db, &state.pokeapi, &state.config);

    let results = pokemon_service
        .search(session.user_id, query, state.config.app.search_limit)
        .await?;

    let message = if results.is_empty() {
        "No Pokémon match your search"
    } else {
        "Search successful"
    };

    Ok(Reply::new(message, results))
}

pub async fn get_types(state: &AppState) -> ApiResult<Vec<String>> {
    let pokemon_service = PokemonService::new(&state.db, &state.pokeapi, &state.config);

    let types = pokemon_service.get_types().await?;

    Ok(Reply::new("Types retrieved successfully", types))
}

pub async fn recent_searches(state: &AppState, session: &Session) -> ApiResult<Vec<SearchTermDto>> {
    let pokemon_service = PokemonService::new(&state.db, &state.pokeapi, &state.config);

    let searches = pokemon_service
        .recent_searches(session.user_id, HISTORY_LIMIT)
        .await?;

    Ok(Reply::new("Recent searches", searches))
}

pub async fn popular_searches(state: &AppState) -> ApiResult<Vec<PopularSearchDto>> {
    let pokemon_service = PokemonService::new(&state.db, &state.pokeapi, &state.config);

    let searches = pokemon_service.popular_searches(HISTORY_LIMIT).await?;

    Ok(Reply::new("Popular searches", searches))
}
