use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::pokemon::StatsDto;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamEntryDto {
    pub id: i32,
    pub pokemon_id: i32,
    pub nickname: Option<String>,
    pub pokemon_name: String,
    pub types: Vec<String>,
    pub height: f64,
    pub weight: f64,
    pub base_experience: i32,
    pub sprite_url: Option<String>,
    pub stats: StatsDto,
    pub moves: Vec<String>,
    pub joined_at: NaiveDateTime,
}

impl TeamEntryDto {
    /// Nickname when set, otherwise the species name.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.pokemon_name)
    }
}

/// Per-stat averages, rounded to two decimals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageStatsDto {
    pub hp: f64,
    pub attack: f64,
    pub defense: f64,
    pub sp_attack: f64,
    pub sp_defense: f64,
    pub speed: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStatsDto {
    pub total: usize,
    pub types: BTreeMap<String, usize>,
    pub average_stats: AverageStatsDto,
    /// Highest attack; first in retrieval order wins ties.
    pub strongest: Option<TeamEntryDto>,
    /// Highest speed; first in retrieval order wins ties.
    pub fastest: Option<TeamEntryDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberSummaryDto {
    pub name: String,
    pub nickname: Option<String>,
    pub total_stats: Option<i32>,
    pub joined_at: Option<NaiveDateTime>,
}

/// Profile page statistics about a trainer's team.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainerStatsDto {
    pub total_pokemon: usize,
    /// Top three types by count
    pub favorite_types: Vec<(String, usize)>,
    /// Highest sum of the six stats
    pub strongest: Option<TeamMemberSummaryDto>,
    pub newest: Option<TeamMemberSummaryDto>,
    pub pokemon_by_type: BTreeMap<String, usize>,
    pub total_base_experience: i64,
    pub average_stats: AverageStatsDto,
}
