use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000002_users::User;

static IDX_SEARCH_HISTORY_USER_ID: &str = "idx-search_history-user_id";
static FK_SEARCH_HISTORY_USER_ID: &str = "fk-search_history-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SearchHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(SearchHistory::Id))
                    .col(integer(SearchHistory::UserId))
                    .col(string(SearchHistory::SearchTerm))
                    .col(timestamp(SearchHistory::SearchedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SEARCH_HISTORY_USER_ID)
                            .from(SearchHistory::Table, SearchHistory::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SEARCH_HISTORY_USER_ID)
                    .table(SearchHistory::Table)
                    .col(SearchHistory::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SEARCH_HISTORY_USER_ID)
                    .table(SearchHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SearchHistory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SearchHistory {
    Table,
    Id,
    UserId,
    SearchTerm,
    SearchedAt,
}
