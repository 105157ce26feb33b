use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000003_trainers::Trainer;

static IDX_TEAM_POKEMON_TRAINER_ID: &str = "idx-team_pokemon-trainer_id";
static FK_TEAM_POKEMON_TRAINER_ID: &str = "fk-team_pokemon-trainer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamPokemon::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamPokemon::Id))
                    .col(integer(TeamPokemon::TrainerId))
                    .col(integer(TeamPokemon::PokemonId))
                    .col(string_null(TeamPokemon::Nickname))
                    .col(string(TeamPokemon::PokemonName))
                    .col(json(TeamPokemon::Types))
                    .col(double(TeamPokemon::Height))
                    .col(double(TeamPokemon::Weight))
                    .col(integer(TeamPokemon::BaseExperience))
                    .col(string_null(TeamPokemon::SpriteUrl))
                    .col(integer(TeamPokemon::StatsHp))
                    .col(integer(TeamPokemon::StatsAttack))
                    .col(integer(TeamPokemon::StatsDefense))
                    .col(integer(TeamPokemon::StatsSpAttack))
                    .col(integer(TeamPokemon::StatsSpDefense))
                    .col(integer(TeamPokemon::StatsSpeed))
                    .col(json(TeamPokemon::Moves))
                    .col(timestamp(TeamPokemon::JoinedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEAM_POKEMON_TRAINER_ID)
                            .from(TeamPokemon::Table, TeamPokemon::TrainerId)
                            .to(Trainer::Table, Trainer::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_POKEMON_TRAINER_ID)
                    .table(TeamPokemon::Table)
                    .col(TeamPokemon::TrainerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_POKEMON_TRAINER_ID)
                    .table(TeamPokemon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamPokemon::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TeamPokemon {
    Table,
    Id,
    TrainerId,
    PokemonId,
    Nickname,
    PokemonName,
    Types,
    Height,
    Weight,
    BaseExperience,
    SpriteUrl,
    StatsHp,
    StatsAttack,
    StatsDefense,
    StatsSpAttack,
    StatsSpDefense,
    StatsSpeed,
    Moves,
    JoinedAt,
}
