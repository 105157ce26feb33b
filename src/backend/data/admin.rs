use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, NaiveDateTime};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionSession, TransactionTrait,
};

use crate::{
    backend::{
        data::user::UserRepository,
        util::logging::log_database_operation,
    },
    model::{
        admin::{
            ActivityKind, ActivityLogDto, AdminUserDto, CountDto, RecentUserDto, SystemStatsDto,
            UserDetailsDto,
        },
        user::Role,
    },
};

const RECENT_USERS: u64 = 5;
const POPULAR_LIMIT: u64 = 5;
const DETAIL_SEARCHES: u64 = 10;
const STATS_WINDOW_DAYS: i64 = 7;

pub struct AdminRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdminRepository<'a, C> {
    /// Creates a new instance of [`AdminRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every user with role, trainer name and activity totals, newest account first
    pub async fn get_all_users(&self) -> Result<Vec<AdminUserDto>, DbErr> {
        let users = entity::prelude::User::find()
            .find_also_related(entity::role::Entity)
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        let trainers: HashMap<i32, entity::trainer::Model> = entity::prelude::Trainer::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(|t| (t.user_id, t))
            .collect();
        let searches = self.search_counts_by_user().await?;
        let team_sizes = self.team_counts_by_trainer().await?;

        users
            .into_iter()
            .map(|(user, role)| {
                let trainer = trainers.get(&user.id);
                admin_user(user, role, trainer, &searches, &team_sizes)
            })
            .collect()
    }

    /// One user with trainer details and the ten latest search terms
    pub async fn get_user_details(&self, user_id: i32) -> Result<Option<UserDetailsDto>, DbErr> {
        let Some((user, role)) = UserRepository::new(self.db).get_by_id(user_id).await? else {
            return Ok(None);
        };

        let trainer = entity::prelude::Trainer::find()
            .filter(entity::trainer::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;
        let searches = self.search_counts_by_user().await?;
        let team_sizes = self.team_counts_by_trainer().await?;

        let recent_searches = entity::prelude::SearchHistory::find()
            .filter(entity::search_history::Column::UserId.eq(user_id))
            .order_by_desc(entity::search_history::Column::SearchedAt)
            .order_by_desc(entity::search_history::Column::Id)
            .limit(DETAIL_SEARCHES)
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| s.search_term)
            .collect();

        let dto = admin_user(user, role, trainer.as_ref(), &searches, &team_sizes)?;

        Ok(Some(UserDetailsDto {
            user: dto,
            trainer_age: trainer.as_ref().and_then(|t| t.age),
            trainer_region: trainer.and_then(|t| t.region),
            recent_searches,
        }))
    }

    /// Assigns `role` to a user
    ///
    /// Returns `Ok(None)` when the user does not exist.
    pub async fn update_role(
        &self,
        user_id: i32,
        role: Role,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user_repo = UserRepository::new(self.db);

        let Some(role_model) = user_repo.find_role(role).await? else {
            return Err(DbErr::RecordNotFound(format!("role {role}")));
        };

        user_repo.update_role(user_id, role_model.id).await
    }

    /// Totals and rankings for the admin dashboard
    ///
    /// `searches_by_day` covers the seven days before `now`, oldest day first,
    /// and only lists days with at least one search.
    pub async fn get_system_stats(&self, now: NaiveDateTime) -> Result<SystemStatsDto, DbErr> {
        let total_users = entity::prelude::User::find().count(self.db).await? as i64;
        let total_trainers = entity::prelude::Trainer::find().count(self.db).await? as i64;
        let total_pokemon = entity::prelude::TeamPokemon::find().count(self.db).await? as i64;
        let total_searches = entity::prelude::SearchHistory::find().count(self.db).await? as i64;

        let role_names: HashMap<i32, String> = entity::prelude::Role::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| (r.id, r.name))
            .collect();
        let users_by_role = entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::RoleId)
            .column_as(entity::user::Column::Id.count(), "count")
            .group_by(entity::user::Column::RoleId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(role_id, count)| role_names.get(&role_id).map(|n| (n.clone(), count)))
            .collect::<BTreeMap<_, _>>();

        let since = (now - Duration::days(STATS_WINDOW_DAYS))
            .date()
            .and_hms_opt(0, 0, 0)
            .unwrap_or(now);
        let mut by_day = BTreeMap::new();
        for searched_at in entity::prelude::SearchHistory::find()
            .select_only()
            .column(entity::search_history::Column::SearchedAt)
            .filter(entity::search_history::Column::SearchedAt.gte(since))
            .into_tuple::<NaiveDateTime>()
            .all(self.db)
            .await?
        {
            *by_day.entry(searched_at.date()).or_insert(0i64) += 1;
        }

        let recent_users = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .limit(RECENT_USERS)
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| RecentUserDto {
                username: u.username,
                email: u.email,
                created_at: u.created_at,
            })
            .collect();

        let popular_pokemon = entity::prelude::TeamPokemon::find()
            .select_only()
            .column(entity::team_pokemon::Column::PokemonName)
            .column_as(entity::team_pokemon::Column::Id.count(), "count")
            .group_by(entity::team_pokemon::Column::PokemonName)
            .order_by_desc(entity::team_pokemon::Column::Id.count())
            .order_by_asc(entity::team_pokemon::Column::PokemonName)
            .limit(POPULAR_LIMIT)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await?;

        let popular_regions = entity::prelude::Trainer::find()
            .select_only()
            .column(entity::trainer::Column::Region)
            .column_as(entity::trainer::Column::Id.count(), "count")
            .filter(entity::trainer::Column::Region.is_not_null())
            .filter(entity::trainer::Column::Region.ne(""))
            .group_by(entity::trainer::Column::Region)
            .order_by_desc(entity::trainer::Column::Id.count())
            .order_by_asc(entity::trainer::Column::Region)
            .limit(POPULAR_LIMIT)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await?;

        Ok(SystemStatsDto {
            total_users,
            total_trainers,
            total_pokemon,
            total_searches,
            users_by_role,
            searches_by_day: by_day.into_iter().collect(),
            recent_users,
            popular_pokemon: counts(popular_pokemon),
            popular_regions: counts(popular_regions),
        })
    }

    /// Searches and team additions of all users merged, newest first
    pub async fn get_activity_logs(&self, limit: u64) -> Result<Vec<ActivityLogDto>, DbErr> {
        let mut logs: Vec<ActivityLogDto> = entity::prelude::SearchHistory::find()
            .find_also_related(entity::user::Entity)
            .order_by_desc(entity::search_history::Column::SearchedAt)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(search, user)| {
                Some(ActivityLogDto {
                    kind: ActivityKind::Search,
                    username: user?.username,
                    description: search.search_term,
                    timestamp: search.searched_at,
                })
            })
            .collect();

        let additions = entity::prelude::TeamPokemon::find()
            .find_also_related(entity::trainer::Entity)
            .order_by_desc(entity::team_pokemon::Column::JoinedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        let user_ids: Vec<i32> = additions
            .iter()
            .filter_map(|(_, trainer)| trainer.as_ref().map(|t| t.user_id))
            .collect();
        let usernames: HashMap<i32, String> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u.username))
            .collect();

        logs.extend(additions.into_iter().filter_map(|(entry, trainer)| {
            let username = usernames.get(&trainer?.user_id)?.clone();
            let description = match &entry.nickname {
                Some(nickname) => format!("{} ({}) added to team", entry.pokemon_name, nickname),
                None => format!("{} added to team", entry.pokemon_name),
            };

            Some(ActivityLogDto {
                kind: ActivityKind::TeamAddition,
                username,
                description,
                timestamp: entry.joined_at,
            })
        }));

        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        logs.truncate(limit as usize);

        Ok(logs)
    }

    async fn search_counts_by_user(&self) -> Result<HashMap<i32, i64>, DbErr> {
        Ok(entity::prelude::SearchHistory::find()
            .select_only()
            .column(entity::search_history::Column::UserId)
            .column_as(entity::search_history::Column::Id.count(), "count")
            .group_by(entity::search_history::Column::UserId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect())
    }

    async fn team_counts_by_trainer(&self) -> Result<HashMap<i32, i64>, DbErr> {
        Ok(entity::prelude::TeamPokemon::find()
            .select_only()
            .column(entity::team_pokemon::Column::TrainerId)
            .column_as(entity::team_pokemon::Column::Id.count(), "count")
            .group_by(entity::team_pokemon::Column::TrainerId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect())
    }
}

impl<'a, C: ConnectionTrait + TransactionTrait> AdminRepository<'a, C> {
    /// Deletes a user with search history, team and trainer in one transaction
    ///
    /// Returns whether the user row was deleted.
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::SearchHistory::delete_many()
            .filter(entity::search_history::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        if let Some(trainer) = entity::prelude::Trainer::find()
            .filter(entity::trainer::Column::UserId.eq(user_id))
            .one(&txn)
            .await?
        {
            entity::prelude::TeamPokemon::delete_many()
                .filter(entity::team_pokemon::Column::TrainerId.eq(trainer.id))
                .exec(&txn)
                .await?;

            entity::prelude::Trainer::delete_by_id(trainer.id)
                .exec(&txn)
                .await?;
        }

        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        log_database_operation(
            "DELETE",
            "users",
            &format!("Deleted user {user_id} with all dependent rows"),
        );

        Ok(result.rows_affected > 0)
    }
}

fn admin_user(
    user: entity::user::Model,
    role: Option<entity::role::Model>,
    trainer: Option<&entity::trainer::Model>,
    searches: &HashMap<i32, i64>,
    team_sizes: &HashMap<i32, i64>,
) -> Result<AdminUserDto, DbErr> {
    let role = match role {
        Some(role) => role.name.parse::<Role>().map_err(DbErr::Custom)?,
        None => {
            return Err(DbErr::RecordNotFound(format!(
                "role {} of user {}",
                user.role_id, user.id
            )))
        }
    };

    Ok(AdminUserDto {
        total_searches: searches.get(&user.id).copied().unwrap_or(0),
        total_pokemon: trainer
            .and_then(|t| team_sizes.get(&t.id))
            .copied()
            .unwrap_or(0),
        trainer_name: trainer.map(|t| t.name.clone()),
        id: user.id,
        username: user.username,
        email: user.email,
        role,
        created_at: user.created_at,
    })
}

fn counts(rows: Vec<(String, i64)>) -> Vec<CountDto> {
    rows.into_iter()
        .map(|(name, count)| CountDto { name, count })
        .collect()
}
