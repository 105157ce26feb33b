use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionSession, TransactionTrait,
};

use crate::backend::util::logging::log_database_operation;

/// Partial trainer update; `None` leaves the column untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrainerUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub region: Option<String>,
}

impl TrainerUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.region.is_none()
    }
}

pub struct TrainerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainerRepository<'a, C> {
    /// Creates a new instance of [`TrainerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the trainer profile of a user
    ///
    /// A user owns at most one trainer; a second insert fails on the unique
    /// `user_id` constraint.
    pub async fn create(
        &self,
        user_id: i32,
        name: &str,
        age: Option<i32>,
        region: Option<&str>,
    ) -> Result<entity::trainer::Model, DbErr> {
        let trainer = entity::trainer::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            age: ActiveValue::Set(age),
            region: ActiveValue::Set(region.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let trainer = trainer.insert(self.db).await?;

        log_database_operation(
            "INSERT",
            "trainers",
            &format!("Created trainer {} for user {}", trainer.id, user_id),
        );

        Ok(trainer)
    }

    /// Trainer of a user along with the size of its team
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<(entity::trainer::Model, u64)>, DbErr> {
        let Some(trainer) = entity::prelude::Trainer::find()
            .filter(entity::trainer::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let pokemon_count = entity::prelude::TeamPokemon::find()
            .filter(entity::team_pokemon::Column::TrainerId.eq(trainer.id))
            .count(self.db)
            .await?;

        Ok(Some((trainer, pokemon_count)))
    }

    pub async fn get_by_id(
        &self,
        trainer_id: i32,
    ) -> Result<Option<(entity::trainer::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Trainer::find_by_id(trainer_id)
            .find_also_related(entity::user::Entity)
            .one(self.db)
            .await
    }

    /// Applies the set fields of `update`
    ///
    /// Returns `Ok(None)` when the trainer does not exist and an error when
    /// `update` has no field set.
    pub async fn update(
        &self,
        trainer_id: i32,
        update: TrainerUpdate,
    ) -> Result<Option<entity::trainer::Model>, DbErr> {
        if update.is_empty() {
            return Err(DbErr::Custom("No trainer fields to update".to_string()));
        }

        let Some(trainer) = entity::prelude::Trainer::find_by_id(trainer_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut trainer_am = trainer.into_active_model();
        if let Some(name) = update.name {
            trainer_am.name = ActiveValue::Set(name);
        }
        if let Some(age) = update.age {
            trainer_am.age = ActiveValue::Set(Some(age));
        }
        if let Some(region) = update.region {
            trainer_am.region = ActiveValue::Set(Some(region));
        }

        let trainer = trainer_am.update(self.db).await?;

        log_database_operation(
            "UPDATE",
            "trainers",
            &format!("Updated trainer {trainer_id}"),
        );

        Ok(Some(trainer))
    }

    /// Trainers of a region with their user accounts, oldest first
    pub async fn get_by_region(
        &self,
        region: &str,
    ) -> Result<Vec<(entity::trainer::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Trainer::find()
            .filter(entity::trainer::Column::Region.eq(region))
            .find_also_related(entity::user::Entity)
            .order_by_asc(entity::trainer::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Distinct, non-empty regions in alphabetical order
    pub async fn get_all_regions(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Trainer::find()
            .select_only()
            .column(entity::trainer::Column::Region)
            .filter(entity::trainer::Column::Region.is_not_null())
            .filter(entity::trainer::Column::Region.ne(""))
            .distinct()
            .order_by_asc(entity::trainer::Column::Region)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}

impl<'a, C: ConnectionTrait + TransactionTrait> TrainerRepository<'a, C> {
    /// Deletes a trainer and its team in one transaction
    ///
    /// Returns whether a trainer row was deleted.
    pub async fn delete_with_team(&self, trainer_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let team = entity::prelude::TeamPokemon::delete_many()
            .filter(entity::team_pokemon::Column::TrainerId.eq(trainer_id))
            .exec(&txn)
            .await?;

        let trainer = entity::prelude::Trainer::delete_by_id(trainer_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        log_database_operation(
            "DELETE",
            "trainers",
            &format!(
                "Deleted trainer {} and {} team entries",
                trainer_id, team.rows_affected
            ),
        );

        Ok(trainer.rows_affected > 0)
    }
}
