use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000002_users::User;

static IDX_TRAINERS_REGION: &str = "idx-trainers-region";
static FK_TRAINERS_USER_ID: &str = "fk-trainers-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trainer::Table)
                    .if_not_exists()
                    .col(pk_auto(Trainer::Id))
                    .col(integer_uniq(Trainer::UserId))
                    .col(string(Trainer::Name))
                    .col(integer_null(Trainer::Age))
                    .col(string_null(Trainer::Region))
                    .col(timestamp(Trainer::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAINERS_USER_ID)
                            .from(Trainer::Table, Trainer::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRAINERS_REGION)
                    .table(Trainer::Table)
                    .col(Trainer::Region)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRAINERS_REGION)
                    .table(Trainer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Trainer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Trainer {
    #[sea_orm(iden = "trainers")]
    Table,
    Id,
    UserId,
    Name,
    Age,
    Region,
    CreatedAt,
}
