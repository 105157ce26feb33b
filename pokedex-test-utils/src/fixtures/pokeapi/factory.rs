//! Upstream response bodies with predictable test values.
//!
//! Resource URLs embedded in the bodies point at `base_url`, so a client
//! following them stays on the mock server.

use pokeapi::model::{
    evolution::{ChainLink, EvolutionChain},
    pokemon::{Pokemon, PokemonMove, PokemonStat, PokemonType, Sprites},
    resource::{NamedResource, Resource, ResourceList},
    species::{FlavorText, Species},
};

/// Upstream stat names in the order the API lists them.
pub const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

fn named(name: &str, url: impl Into<String>) -> NamedResource {
    NamedResource {
        name: name.to_string(),
        url: url.into(),
    }
}

/// Path of the species resource for `id`, relative to the base URL.
pub fn species_path(id: i32) -> String {
    format!("/pokemon-species/{id}/")
}

/// Path of the evolution chain resource for `id`, relative to the base URL.
pub fn evolution_chain_path(id: i32) -> String {
    format!("/evolution-chain/{id}/")
}

/// Path of the front sprite for `id`, relative to the base URL.
pub fn sprite_path(id: i32) -> String {
    format!("/sprites/{id}.png")
}

/// A Pokémon of a single `normal` type.
///
/// Base stats are 40, 50, 60, 70, 80, 90 in upstream order; five moves are
/// listed so callers can check truncation.
pub fn mock_pokemon(base_url: &str, id: i32, name: &str) -> Pokemon {
    mock_pokemon_with_types(base_url, id, name, &["normal"])
}

/// Like [`mock_pokemon`] with the given types in slot order.
pub fn mock_pokemon_with_types(base_url: &str, id: i32, name: &str, types: &[&str]) -> Pokemon {
    Pokemon {
        id,
        name: name.to_lowercase(),
        height: 4,
        weight: 60,
        base_experience: Some(112),
        types: types
            .iter()
            .enumerate()
            .map(|(slot, type_name)| PokemonType {
                slot: slot as i32 + 1,
                type_: named(type_name, format!("{base_url}/type/{type_name}/")),
            })
            .collect(),
        stats: STAT_NAMES
            .iter()
            .enumerate()
            .map(|(i, stat)| PokemonStat {
                base_stat: 40 + 10 * i as i32,
                effort: 0,
                stat: named(stat, format!("{base_url}/stat/{}/", i + 1)),
            })
            .collect(),
        sprites: Sprites {
            front_default: Some(format!("{base_url}{}", sprite_path(id))),
            back_default: None,
            other: None,
        },
        moves: ["mega-punch", "pay-day", "thunder-punch", "slam", "double-kick"]
            .iter()
            .map(|m| PokemonMove {
                move_: named(m, format!("{base_url}/move/{m}/")),
            })
            .collect(),
        species: named(&name.to_lowercase(), format!("{base_url}{}", species_path(id))),
    }
}

/// Species with an English and a Spanish description and an evolution chain of the same id.
pub fn mock_species(base_url: &str, id: i32, name: &str) -> Species {
    Species {
        id,
        name: name.to_lowercase(),
        flavor_text_entries: vec![
            FlavorText {
                flavor_text: format!("{name} is a test\nPokémon."),
                language: named("en", format!("{base_url}/language/9/")),
            },
            FlavorText {
                flavor_text: format!("{name} es un Pokémon\u{c}de prueba."),
                language: named("es", format!("{base_url}/language/7/")),
            },
        ],
        evolution_chain: Some(Resource {
            url: format!("{base_url}{}", evolution_chain_path(id)),
        }),
    }
}

/// Linear chain through `names`, first name at the root.
pub fn mock_evolution_chain(id: i32, names: &[&str]) -> EvolutionChain {
    let chain = names
        .iter()
        .rev()
        .fold(None, |next: Option<ChainLink>, name| {
            Some(ChainLink {
                species: named(name, String::new()),
                evolves_to: next.into_iter().collect(),
            })
        })
        .unwrap_or_else(|| ChainLink {
            species: named("", String::new()),
            evolves_to: Vec::new(),
        });

    EvolutionChain { id, chain }
}

/// List page naming the given resources.
pub fn mock_resource_list(names: &[&str]) -> ResourceList {
    ResourceList {
        count: names.len() as i64,
        next: None,
        previous: None,
        results: names.iter().map(|n| named(n, String::new())).collect(),
    }
}
