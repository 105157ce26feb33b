use crate::{
    backend::error::Error,
    model::{pokemon::StatsDto, team::TeamEntryDto},
};

/// Decode a JSON string-array column.
pub fn json_strings(value: &serde_json::Value) -> Result<Vec<String>, Error> {
    Ok(serde_json::from_value(value.clone())?)
}

pub fn entry_stats(model: &entity::team_pokemon::Model) -> StatsDto {
    StatsDto {
        hp: model.stats_hp,
        attack: model.stats_attack,
        defense: model.stats_defense,
        sp_attack: model.stats_sp_attack,
        sp_defense: model.stats_sp_defense,
        speed: model.stats_speed,
    }
}

impl TryFrom<entity::team_pokemon::Model> for TeamEntryDto {
    type Error = Error;

    fn try_from(model: entity::team_pokemon::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            pokemon_id: model.pokemon_id,
            types: json_strings(&model.types)?,
            moves: json_strings(&model.moves)?,
            stats: entry_stats(&model),
            nickname: model.nickname,
            pokemon_name: model.pokemon_name,
            height: model.height,
            weight: model.weight,
            base_experience: model.base_experience,
            sprite_url: model.sprite_url,
            joined_at: model.joined_at,
        })
    }
}
