//! Team mutations and summaries.

pub mod stats;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    backend::{
        config::Config,
        data::team::TeamRepository,
        error::{pokemon::PokemonError, team::TeamError, Error},
        service::pokemon::PokemonService,
    },
    model::team::{TeamEntryDto, TeamStatsDto, TrainerStatsDto},
};

/// Longest nickname accepted, in characters.
pub const MAX_NICKNAME_LENGTH: usize = 50;

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
    client: &'a pokeapi::Client,
    config: &'a Config,
}

impl<'a> TeamService<'a> {
    /// Creates a new instance of [`TeamService`]
    pub fn new(db: &'a DatabaseConnection, client: &'a pokeapi::Client, config: &'a Config) -> Self {
        Self { db, client, config }
    }

    /// Look up `identifier` upstream and store a snapshot on the team
    ///
    /// Rejected when the team already holds `app.max_team_size` entries or
    /// the lookup finds nothing.
    pub async fn add_pokemon(
        &self,
        trainer_id: i32,
        identifier: &str,
        nickname: Option<&str>,
    ) -> Result<TeamEntryDto, Error> {
        let nickname = match nickname.map(str::trim) {
            Some("") | None => None,
            Some(nickname) => Some(validate_nickname(nickname)?),
        };

        let team_repo = TeamRepository::new(self.db);

        let max = self.config.app.max_team_size;
        if team_repo.count(trainer_id).await? >= max {
            return Err(TeamError::TeamFull { max }.into());
        }

        let Some(pokemon) = PokemonService::new(self.db, self.client, self.config)
            .get_pokemon(identifier)
            .await?
        else {
            return Err(PokemonError::NotFound(identifier.trim().to_string()).into());
        };

        let entry = team_repo.add(trainer_id, &pokemon, nickname).await?;

        entry.try_into()
    }

    /// Remove an entry owned by `trainer_id`; the last entry cannot be removed
    pub async fn remove_pokemon(&self, entry_id: i32, trainer_id: i32) -> Result<(), Error> {
        let team_repo = TeamRepository::new(self.db);

        if team_repo
            .get_by_id_for_trainer(entry_id, trainer_id)
            .await?
            .is_none()
        {
            return Err(TeamError::NotInTeam.into());
        }

        if team_repo.count(trainer_id).await? <= 1 {
            return Err(TeamError::LastPokemon.into());
        }

        let result = team_repo.remove(entry_id, trainer_id).await?;
        if result.rows_affected == 0 {
            return Err(TeamError::NotInTeam.into());
        }

        Ok(())
    }

    /// Set the nickname of an entry owned by `trainer_id`
    ///
    /// The nickname is trimmed; empty or longer than
    /// [`MAX_NICKNAME_LENGTH`] characters is rejected.
    pub async fn update_nickname(
        &self,
        entry_id: i32,
        trainer_id: i32,
        nickname: &str,
    ) -> Result<TeamEntryDto, Error> {
        let nickname = validate_nickname(nickname.trim())?;

        let team_repo = TeamRepository::new(self.db);

        if team_repo
            .get_by_id_for_trainer(entry_id, trainer_id)
            .await?
            .is_none()
        {
            return Err(TeamError::NotInTeam.into());
        }

        team_repo
            .update_nickname(entry_id, trainer_id, nickname)
            .await?;

        let Some(entry) = team_repo.get_by_id_for_trainer(entry_id, trainer_id).await? else {
            return Err(TeamError::NotInTeam.into());
        };

        entry.try_into()
    }

    /// The team, most recently joined first
    pub async fn get_team(&self, trainer_id: i32) -> Result<Vec<TeamEntryDto>, Error> {
        TeamRepository::new(self.db)
            .get_by_trainer(trainer_id)
            .await?
            .into_iter()
            .map(TeamEntryDto::try_from)
            .collect()
    }

    /// Entries whose species name or nickname contains `term`
    pub async fn search_team(&self, trainer_id: i32, term: &str) -> Result<Vec<TeamEntryDto>, Error> {
        let term = term.trim();
        if term.is_empty() {
            return self.get_team(trainer_id).await;
        }

        TeamRepository::new(self.db)
            .search_by_name(trainer_id, term)
            .await?
            .into_iter()
            .map(TeamEntryDto::try_from)
            .collect()
    }

    /// Team summary; any failure is logged and yields the empty summary
    pub async fn get_team_stats(&self, trainer_id: i32) -> TeamStatsDto {
        match self.get_team(trainer_id).await {
            Ok(entries) => stats::team_stats(&entries),
            Err(err) => {
                tracing::error!("Failed to compute team stats for trainer {}: {}", trainer_id, err);
                TeamStatsDto::default()
            }
        }
    }

    pub async fn get_trainer_stats(&self, trainer_id: i32) -> Result<TrainerStatsDto, Error> {
        let entries = self.get_team(trainer_id).await?;

        Ok(stats::trainer_stats(&entries))
    }
}

fn validate_nickname(nickname: &str) -> Result<&str, TeamError> {
    if nickname.is_empty() {
        return Err(TeamError::EmptyNickname);
    }
    if nickname.chars().count() > MAX_NICKNAME_LENGTH {
        return Err(TeamError::NicknameTooLong {
            max: MAX_NICKNAME_LENGTH,
        });
    }

    Ok(nickname)
}
