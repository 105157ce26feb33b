use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn team<'a>(&'a mut self) -> TeamFixtures<'a> {
        TeamFixtures { setup: self }
    }
}

pub struct TeamFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> TeamFixtures<'a> {
    /// Insert a team entry joined now, typed `normal` with every base stat at 50.
    pub async fn insert_entry(
        &self,
        trainer_id: i32,
        pokemon_id: i32,
        name: &str,
    ) -> Result<entity::team_pokemon::Model, TestError> {
        Ok(
            entity::prelude::TeamPokemon::insert(entity::team_pokemon::ActiveModel {
                trainer_id: ActiveValue::Set(trainer_id),
                pokemon_id: ActiveValue::Set(pokemon_id),
                nickname: ActiveValue::Set(None),
                pokemon_name: ActiveValue::Set(name.to_string()),
                types: ActiveValue::Set(serde_json::json!(["normal"])),
                height: ActiveValue::Set(0.4),
                weight: ActiveValue::Set(6.0),
                base_experience: ActiveValue::Set(64),
                sprite_url: ActiveValue::Set(None),
                stats_hp: ActiveValue::Set(50),
                stats_attack: ActiveValue::Set(50),
                stats_defense: ActiveValue::Set(50),
                stats_sp_attack: ActiveValue::Set(50),
                stats_sp_defense: ActiveValue::Set(50),
                stats_speed: ActiveValue::Set(50),
                moves: ActiveValue::Set(serde_json::json!(["Tackle"])),
                joined_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Record a search for `user_id` at the given time.
    pub async fn insert_search(
        &self,
        user_id: i32,
        term: &str,
        searched_at: NaiveDateTime,
    ) -> Result<entity::search_history::Model, TestError> {
        Ok(
            entity::prelude::SearchHistory::insert(entity::search_history::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                search_term: ActiveValue::Set(term.to_string()),
                searched_at: ActiveValue::Set(searched_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
