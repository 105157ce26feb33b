//! Creature lookup, search and search history.

use std::time::Duration;

use chrono::Utc;
use dioxus_logger::tracing;
use futures::{stream, StreamExt};
use pokeapi::model::{evolution::EvolutionChain, pokemon::Pokemon, species::Species};
use sea_orm::DatabaseConnection;

use crate::{
    backend::{
        config::{ApiConfig, Config},
        data::search::SearchRepository,
        error::{pokemon::PokemonError, Error},
        service::retry::RetryContext,
        util::{
            logging::log_user_activity,
            text::{capitalize, clean_flavor_text, move_title},
        },
    },
    model::pokemon::{
        PokemonDto, PokemonSummaryDto, PopularSearchDto, SearchTermDto, SpritesDto, StatsDto,
    },
};

/// Size of the index page fetched for substring matching.
pub const LIST_LIMIT: u32 = 1000;
/// Shown when no flavor text exists in the configured language.
pub const NO_DESCRIPTION: &str = "Description not available.";
const MAX_MOVES: usize = 4;
/// Detail lookups in flight at once while building a result page.
const LOOKUP_CONCURRENCY: usize = 4;

/// Upstream records kept between retry attempts of one lookup.
#[derive(Clone, Default)]
struct LookupCache {
    pokemon: Option<Pokemon>,
    species: Option<Species>,
}

pub(crate) fn retry_context<T: Clone + Default>(config: &ApiConfig) -> RetryContext<T> {
    RetryContext::new()
        .with_max_attempts(config.max_retries.saturating_add(1))
        .with_initial_backoff(Duration::from_millis(config.retry_backoff_ms))
}

pub struct PokemonService<'a> {
    db: &'a DatabaseConnection,
    client: &'a pokeapi::Client,
    config: &'a Config,
}

impl<'a> PokemonService<'a> {
    /// Creates a new instance of [`PokemonService`]
    pub fn new(db: &'a DatabaseConnection, client: &'a pokeapi::Client, config: &'a Config) -> Self {
        Self { db, client, config }
    }

    /// Full detail record for a name or numeric id
    ///
    /// Fetches the pokemon, its species and its evolution chain. A failure of
    /// the first request, including 404, is logged and yields `Ok(None)`;
    /// failures further down the chain are returned as errors.
    pub async fn get_pokemon(&self, identifier: &str) -> Result<Option<PokemonDto>, Error> {
        let identifier = identifier.trim().to_lowercase();
        if identifier.is_empty() {
            return Err(PokemonError::EmptyQuery.into());
        }

        let mut ctx: RetryContext<LookupCache> = retry_context(&self.config.api);
        let client = self.client;
        let id = identifier.as_str();

        let result = ctx
            .execute_with_retry(&format!("lookup of {identifier}"), |cache| {
                let client = client.clone();
                let identifier = id.to_string();

                Box::pin(async move {
                    let pokemon = match cache.pokemon.clone() {
                        Some(pokemon) => pokemon,
                        None => {
                            let pokemon = client.pokemon().get_pokemon(&identifier).await?;
                            cache.pokemon = Some(pokemon.clone());
                            pokemon
                        }
                    };

                    let species = match cache.species.clone() {
                        Some(species) => species,
                        None => {
                            let species = client.species().get_species(&pokemon.species.url).await?;
                            cache.species = Some(species.clone());
                            species
                        }
                    };

                    let chain_url = species
                        .evolution_chain
                        .as_ref()
                        .map(|chain| chain.url.clone())
                        .ok_or_else(|| PokemonError::MissingEvolutionChain(pokemon.name.clone()))?;
                    let chain = client.evolution().get_evolution_chain(&chain_url).await?;

                    Ok((pokemon, species, chain))
                })
            })
            .await;
        let primary_failed = ctx.into_cache().pokemon.is_none();

        match result {
            Ok((pokemon, species, chain)) => Ok(Some(flatten(
                &pokemon,
                &species,
                &chain,
                &self.config.app.language,
            )?)),
            Err(Error::PokeApiError(pokeapi::Error::NotFound(resource))) if primary_failed => {
                tracing::debug!("No Pokémon at {}", resource);
                Ok(None)
            }
            Err(err) if primary_failed => {
                tracing::error!("Lookup of {:?} failed: {}", identifier, err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Substring search over the Pokémon index
    ///
    /// Every non-empty query is recorded in the user's history. Matches are
    /// truncated to `limit` and each is resolved through [`Self::get_pokemon`];
    /// lookups that fail are left out of the page.
    pub async fn search(
        &self,
        user_id: i32,
        query: &str,
        limit: usize,
    ) -> Result<Vec<PokemonSummaryDto>, Error> {
        let query = query.trim();
        if query.is_empty() {
            return Err(PokemonError::EmptyQuery.into());
        }

        SearchRepository::new(self.db)
            .add(user_id, query, Utc::now().naive_utc())
            .await?;
        log_user_activity(user_id, "search", &format!("Query: {query}"));

        let names = self.matching_names(query, limit).await?;

        let lookups = stream::iter(names)
            .map(|name| async move {
                let result = self.get_pokemon(&name).await;
                (name, result)
            })
            .buffered(LOOKUP_CONCURRENCY)
            .collect::<Vec<_>>()
            .await;

        Ok(lookups
            .into_iter()
            .filter_map(|(name, result)| match result {
                Ok(Some(pokemon)) => Some(PokemonSummaryDto {
                    id: pokemon.id,
                    name: pokemon.name,
                    types: pokemon.types,
                    sprite: pokemon.sprites.front_default,
                }),
                Ok(None) => None,
                Err(err) => {
                    tracing::warn!("Skipping {} in search results: {}", name, err);
                    None
                }
            })
            .collect())
    }

    async fn matching_names(&self, query: &str, limit: usize) -> Result<Vec<String>, Error> {
        let needle = query.to_lowercase();
        let client = self.client;

        let list = retry_context::<()>(&self.config.api)
            .execute_with_retry("pokemon index", |_| {
                let client = client.clone();
                Box::pin(async move { Ok(client.pokemon().get_pokemon_list(LIST_LIMIT).await?) })
            })
            .await?;

        Ok(list
            .results
            .into_iter()
            .map(|entry| entry.name)
            .filter(|name| name.to_lowercase().contains(&needle))
            .take(limit)
            .collect())
    }

    /// All type names known upstream
    pub async fn get_types(&self) -> Result<Vec<String>, Error> {
        let client = self.client;

        retry_context::<()>(&self.config.api)
            .execute_with_retry("type list", |_| {
                let client = client.clone();
                Box::pin(async move { Ok(client.types().get_types().await?) })
            })
            .await
    }

    pub async fn recent_searches(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<SearchTermDto>, Error> {
        let searches = SearchRepository::new(self.db)
            .get_recent_for_user(user_id, limit)
            .await?;

        Ok(searches
            .into_iter()
            .map(|s| SearchTermDto {
                term: s.search_term,
                searched_at: s.searched_at,
            })
            .collect())
    }

    pub async fn popular_searches(&self, limit: u64) -> Result<Vec<PopularSearchDto>, Error> {
        let popular = SearchRepository::new(self.db).get_popular(limit).await?;

        Ok(popular
            .into_iter()
            .map(|(term, count)| PopularSearchDto { term, count })
            .collect())
    }
}

/// Flatten the three upstream records into one detail record.
///
/// Stats are looked up by name; an absent stat is an error rather than a
/// silently shifted value.
pub fn flatten(
    pokemon: &Pokemon,
    species: &Species,
    chain: &EvolutionChain,
    language: &str,
) -> Result<PokemonDto, PokemonError> {
    let stat = |name: &str| {
        pokemon
            .base_stat(name)
            .ok_or_else(|| PokemonError::MissingStat {
                pokemon: pokemon.name.clone(),
                stat: name.to_string(),
            })
    };

    let stats = StatsDto {
        hp: stat("hp")?,
        attack: stat("attack")?,
        defense: stat("defense")?,
        sp_attack: stat("special-attack")?,
        sp_defense: stat("special-defense")?,
        speed: stat("speed")?,
    };

    Ok(PokemonDto {
        id: pokemon.id,
        name: capitalize(&pokemon.name),
        height: f64::from(pokemon.height) / 10.0,
        weight: f64::from(pokemon.weight) / 10.0,
        types: pokemon.types.iter().map(|t| t.type_.name.clone()).collect(),
        stats,
        sprites: SpritesDto {
            front_default: pokemon.sprites.front_default.clone(),
            back_default: pokemon.sprites.back_default.clone(),
            official_artwork: pokemon.sprites.official_artwork().map(str::to_string),
        },
        moves: pokemon
            .moves
            .iter()
            .take(MAX_MOVES)
            .map(|m| move_title(&m.move_.name))
            .collect(),
        evolution_chain: chain
            .chain
            .species_names()
            .into_iter()
            .map(capitalize)
            .collect(),
        description: species
            .flavor_text(language)
            .map(clean_flavor_text)
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        base_experience: pokemon.base_experience.unwrap_or(0),
    })
}
