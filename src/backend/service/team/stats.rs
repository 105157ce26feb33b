//! Descriptive statistics over a stored team.
//!
//! Both summaries take entries in retrieval order (most recently joined
//! first). Maxima use a strict comparison, so the first entry in that order
//! wins a tie.

use std::collections::BTreeMap;

use crate::model::team::{
    AverageStatsDto, TeamEntryDto, TeamMemberSummaryDto, TeamStatsDto, TrainerStatsDto,
};

const FAVORITE_TYPES: usize = 3;

/// Team page summary: type histogram, stat averages, highest attack and speed.
pub fn team_stats(entries: &[TeamEntryDto]) -> TeamStatsDto {
    if entries.is_empty() {
        return TeamStatsDto::default();
    }

    TeamStatsDto {
        total: entries.len(),
        types: type_histogram(entries),
        average_stats: average_stats(entries),
        strongest: max_by_stat(entries, |e| e.stats.attack).cloned(),
        fastest: max_by_stat(entries, |e| e.stats.speed).cloned(),
    }
}

/// Profile page summary.
pub fn trainer_stats(entries: &[TeamEntryDto]) -> TrainerStatsDto {
    if entries.is_empty() {
        return TrainerStatsDto::default();
    }

    let pokemon_by_type = type_histogram(entries);

    let mut favorite_types: Vec<(String, usize)> = pokemon_by_type
        .iter()
        .map(|(name, count)| (name.clone(), *count))
        .collect();
    favorite_types.sort_by(|a, b| b.1.cmp(&a.1));
    favorite_types.truncate(FAVORITE_TYPES);

    let mut strongest: Option<&TeamEntryDto> = None;
    let mut max_total = 0;
    for entry in entries {
        let total = entry.stats.total();
        if total > max_total {
            max_total = total;
            strongest = Some(entry);
        }
    }

    TrainerStatsDto {
        total_pokemon: entries.len(),
        favorite_types,
        strongest: strongest.map(|e| TeamMemberSummaryDto {
            name: e.pokemon_name.clone(),
            nickname: e.nickname.clone(),
            total_stats: Some(e.stats.total()),
            joined_at: None,
        }),
        newest: entries.first().map(|e| TeamMemberSummaryDto {
            name: e.pokemon_name.clone(),
            nickname: e.nickname.clone(),
            total_stats: None,
            joined_at: Some(e.joined_at),
        }),
        pokemon_by_type,
        total_base_experience: entries.iter().map(|e| i64::from(e.base_experience)).sum(),
        average_stats: average_stats(entries),
    }
}

fn type_histogram(entries: &[TeamEntryDto]) -> BTreeMap<String, usize> {
    let mut types = BTreeMap::new();
    for pokemon_type in entries.iter().flat_map(|e| &e.types) {
        *types.entry(pokemon_type.clone()).or_insert(0) += 1;
    }
    types
}

fn average_stats(entries: &[TeamEntryDto]) -> AverageStatsDto {
    let n = entries.len() as f64;
    let avg = |f: fn(&TeamEntryDto) -> i32| {
        let sum: i64 = entries.iter().map(|e| i64::from(f(e))).sum();
        round2(sum as f64 / n)
    };

    AverageStatsDto {
        hp: avg(|e| e.stats.hp),
        attack: avg(|e| e.stats.attack),
        defense: avg(|e| e.stats.defense),
        sp_attack: avg(|e| e.stats.sp_attack),
        sp_defense: avg(|e| e.stats.sp_defense),
        speed: avg(|e| e.stats.speed),
    }
}

fn max_by_stat(entries: &[TeamEntryDto], stat: fn(&TeamEntryDto) -> i32) -> Option<&TeamEntryDto> {
    let mut best: Option<&TeamEntryDto> = None;
    for entry in entries {
        match best {
            Some(b) if stat(entry) <= stat(b) => {}
            _ => best = Some(entry),
        }
    }
    best
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
