use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The six base stats of a Pokémon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsDto {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub sp_attack: i32,
    pub sp_defense: i32,
    pub speed: i32,
}

impl StatsDto {
    pub fn total(&self) -> i32 {
        self.hp + self.attack + self.defense + self.sp_attack + self.sp_defense + self.speed
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpritesDto {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub official_artwork: Option<String>,
}

/// Flattened detail record built from the pokemon, species and evolution
/// chain resources.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokemonDto {
    pub id: i32,
    /// Capitalised
    pub name: String,
    /// Metres
    pub height: f64,
    /// Kilograms
    pub weight: f64,
    pub types: Vec<String>,
    pub stats: StatsDto,
    pub sprites: SpritesDto,
    /// At most four, title cased
    pub moves: Vec<String>,
    pub evolution_chain: Vec<String>,
    pub description: String,
    pub base_experience: i32,
}

/// Search result card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummaryDto {
    pub id: i32,
    pub name: String,
    pub types: Vec<String>,
    pub sprite: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTermDto {
    pub term: String,
    pub searched_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularSearchDto {
    pub term: String,
    pub count: i64,
}
