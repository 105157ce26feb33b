use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{backend::util::logging::log_database_operation, model::admin::SearchLogDto};

pub struct SearchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SearchRepository<'a, C> {
    /// Creates a new instance of [`SearchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a search term for a user
    pub async fn add(
        &self,
        user_id: i32,
        search_term: &str,
        searched_at: NaiveDateTime,
    ) -> Result<entity::search_history::Model, DbErr> {
        let search = entity::search_history::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            search_term: ActiveValue::Set(search_term.to_string()),
            searched_at: ActiveValue::Set(searched_at),
            ..Default::default()
        };

        let search = search.insert(self.db).await?;

        log_database_operation(
            "INSERT",
            "search_history",
            &format!("User {user_id} searched {search_term:?}"),
        );

        Ok(search)
    }

    /// Latest searches of a user, newest first
    pub async fn get_recent_for_user(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::search_history::Model>, DbErr> {
        entity::prelude::SearchHistory::find()
            .filter(entity::search_history::Column::UserId.eq(user_id))
            .order_by_desc(entity::search_history::Column::SearchedAt)
            .order_by_desc(entity::search_history::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Most searched terms across all users as `(term, count)`, most frequent first
    pub async fn get_popular(&self, limit: u64) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::SearchHistory::find()
            .select_only()
            .column(entity::search_history::Column::SearchTerm)
            .column_as(entity::search_history::Column::Id.count(), "count")
            .group_by(entity::search_history::Column::SearchTerm)
            .order_by_desc(entity::search_history::Column::Id.count())
            .order_by_asc(entity::search_history::Column::SearchTerm)
            .limit(limit)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }

    /// Latest searches of all users with the searching account
    pub async fn get_logs(&self, limit: u64) -> Result<Vec<SearchLogDto>, DbErr> {
        let rows = entity::prelude::SearchHistory::find()
            .find_also_related(entity::user::Entity)
            .order_by_desc(entity::search_history::Column::SearchedAt)
            .order_by_desc(entity::search_history::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(search, user)| {
                let user = user?;
                Some(SearchLogDto {
                    id: search.id,
                    username: user.username,
                    email: user.email,
                    search_term: search.search_term,
                    searched_at: search.searched_at,
                })
            })
            .collect())
    }
}
