use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A point-in-time snapshot of a Pokémon on a trainer's team.
///
/// `types` and `moves` hold ordered JSON string arrays. Snapshot fields are
/// never refreshed from the upstream API once the row is written.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team_pokemon")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub trainer_id: i32,
    pub pokemon_id: i32,
    pub nickname: Option<String>,
    pub pokemon_name: String,
    pub types: Json,
    pub height: f64,
    pub weight: f64,
    pub base_experience: i32,
    pub sprite_url: Option<String>,
    pub stats_hp: i32,
    pub stats_attack: i32,
    pub stats_defense: i32,
    pub stats_sp_attack: i32,
    pub stats_sp_defense: i32,
    pub stats_speed: i32,
    pub moves: Json,
    pub joined_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trainer::Entity",
        from = "Column::TrainerId",
        to = "super::trainer::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Trainer,
}

impl Related<super::trainer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trainer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
