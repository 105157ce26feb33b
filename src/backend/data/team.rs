use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, DeleteResult, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{backend::util::logging::log_database_operation, model::pokemon::PokemonDto};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Team of a trainer, most recently joined first
    pub async fn get_by_trainer(
        &self,
        trainer_id: i32,
    ) -> Result<Vec<entity::team_pokemon::Model>, DbErr> {
        entity::prelude::TeamPokemon::find()
            .filter(entity::team_pokemon::Column::TrainerId.eq(trainer_id))
            .order_by_desc(entity::team_pokemon::Column::JoinedAt)
            .order_by_desc(entity::team_pokemon::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self, trainer_id: i32) -> Result<u64, DbErr> {
        entity::prelude::TeamPokemon::find()
            .filter(entity::team_pokemon::Column::TrainerId.eq(trainer_id))
            .count(self.db)
            .await
    }

    /// Team entry only if it belongs to `trainer_id`
    pub async fn get_by_id_for_trainer(
        &self,
        entry_id: i32,
        trainer_id: i32,
    ) -> Result<Option<entity::team_pokemon::Model>, DbErr> {
        entity::prelude::TeamPokemon::find_by_id(entry_id)
            .filter(entity::team_pokemon::Column::TrainerId.eq(trainer_id))
            .one(self.db)
            .await
    }

    /// Stores a snapshot of `pokemon` on the trainer's team
    ///
    /// Later changes to the upstream record are never reflected in the row.
    pub async fn add(
        &self,
        trainer_id: i32,
        pokemon: &PokemonDto,
        nickname: Option<&str>,
    ) -> Result<entity::team_pokemon::Model, DbErr> {
        let entry = entity::team_pokemon::ActiveModel {
            trainer_id: ActiveValue::Set(trainer_id),
            pokemon_id: ActiveValue::Set(pokemon.id),
            nickname: ActiveValue::Set(nickname.map(str::to_string)),
            pokemon_name: ActiveValue::Set(pokemon.name.clone()),
            types: ActiveValue::Set(serde_json::json!(pokemon.types)),
            height: ActiveValue::Set(pokemon.height),
            weight: ActiveValue::Set(pokemon.weight),
            base_experience: ActiveValue::Set(pokemon.base_experience),
            sprite_url: ActiveValue::Set(pokemon.sprites.front_default.clone()),
            stats_hp: ActiveValue::Set(pokemon.stats.hp),
            stats_attack: ActiveValue::Set(pokemon.stats.attack),
            stats_defense: ActiveValue::Set(pokemon.stats.defense),
            stats_sp_attack: ActiveValue::Set(pokemon.stats.sp_attack),
            stats_sp_defense: ActiveValue::Set(pokemon.stats.sp_defense),
            stats_speed: ActiveValue::Set(pokemon.stats.speed),
            moves: ActiveValue::Set(serde_json::json!(pokemon.moves)),
            joined_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let entry = entry.insert(self.db).await?;

        log_database_operation(
            "INSERT",
            "team_pokemon",
            &format!("Added {} to trainer {}", entry.pokemon_name, trainer_id),
        );

        Ok(entry)
    }

    /// Deletes an entry scoped by both id and trainer
    pub async fn remove(&self, entry_id: i32, trainer_id: i32) -> Result<DeleteResult, DbErr> {
        let result = entity::prelude::TeamPokemon::delete_many()
            .filter(entity::team_pokemon::Column::Id.eq(entry_id))
            .filter(entity::team_pokemon::Column::TrainerId.eq(trainer_id))
            .exec(self.db)
            .await?;

        log_database_operation(
            "DELETE",
            "team_pokemon",
            &format!(
                "Removed entry {} of trainer {} ({} rows)",
                entry_id, trainer_id, result.rows_affected
            ),
        );

        Ok(result)
    }

    /// Sets the nickname of an entry scoped by both id and trainer
    ///
    /// Returns whether a row was updated.
    pub async fn update_nickname(
        &self,
        entry_id: i32,
        trainer_id: i32,
        nickname: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::TeamPokemon::update_many()
            .col_expr(
                entity::team_pokemon::Column::Nickname,
                Expr::value(nickname.to_string()),
            )
            .filter(entity::team_pokemon::Column::Id.eq(entry_id))
            .filter(entity::team_pokemon::Column::TrainerId.eq(trainer_id))
            .exec(self.db)
            .await?;

        log_database_operation(
            "UPDATE",
            "team_pokemon",
            &format!("Renamed entry {entry_id} of trainer {trainer_id}"),
        );

        Ok(result.rows_affected > 0)
    }

    /// Entries whose name or nickname contains `term`
    pub async fn search_by_name(
        &self,
        trainer_id: i32,
        term: &str,
    ) -> Result<Vec<entity::team_pokemon::Model>, DbErr> {
        entity::prelude::TeamPokemon::find()
            .filter(entity::team_pokemon::Column::TrainerId.eq(trainer_id))
            .filter(
                Condition::any()
                    .add(entity::team_pokemon::Column::PokemonName.contains(term))
                    .add(entity::team_pokemon::Column::Nickname.contains(term)),
            )
            .order_by_desc(entity::team_pokemon::Column::JoinedAt)
            .order_by_desc(entity::team_pokemon::Column::Id)
            .all(self.db)
            .await
    }
}
