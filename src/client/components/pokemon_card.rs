use dioxus::prelude::*;
use pokedex::model::pokemon::{PokemonDto, PokemonSummaryDto};

use crate::client::{components::Sprite, util::format::dex_number};

#[component]
pub fn TypeBadges(types: Vec<String>) -> Element {
    rsx!(
        div { class: "badges",
            for type_name in types {
                span { key: "{type_name}", class: "badge type-{type_name}", "{type_name}" }
            }
        }
    )
}

/// Search result tile.
#[component]
pub fn PokemonCard(pokemon: PokemonSummaryDto, on_select: EventHandler<i32>) -> Element {
    let id = pokemon.id;
    let number = dex_number(pokemon.id);

    rsx!(
        button {
            class: "card card-clickable",
            onclick: move |_| on_select.call(id),
            Sprite { url: pokemon.sprite.clone(), alt: pokemon.name.clone() }
            p { class: "muted", "{number}" }
            p { class: "card-title", "{pokemon.name}" }
            TypeBadges { types: pokemon.types.clone() }
        }
    )
}

/// Full detail panel with stats, moves and evolution chain.
#[component]
pub fn PokemonDetail(pokemon: PokemonDto, children: Element) -> Element {
    let stats = [
        ("HP", pokemon.stats.hp),
        ("Attack", pokemon.stats.attack),
        ("Defense", pokemon.stats.defense),
        ("Sp. Attack", pokemon.stats.sp_attack),
        ("Sp. Defense", pokemon.stats.sp_defense),
        ("Speed", pokemon.stats.speed),
    ];
    let artwork = pokemon
        .sprites
        .official_artwork
        .clone()
        .or_else(|| pokemon.sprites.front_default.clone());
    let number = dex_number(pokemon.id);
    let total = pokemon.stats.total();
    let moves = pokemon.moves.join(", ");
    let evolution = pokemon.evolution_chain.join(" → ");

    rsx!(
        div { class: "card detail",
            div { class: "detail-header",
                Sprite { url: artwork, alt: pokemon.name.clone(), size: 160 }
                div {
                    p { class: "muted", "{number}" }
                    h2 { class: "card-title", "{pokemon.name}" }
                    TypeBadges { types: pokemon.types.clone() }
                    p { "Height: {pokemon.height} m | Weight: {pokemon.weight} kg" }
                    p { "Base experience: {pokemon.base_experience}" }
                }
            }
            p { class: "description", "{pokemon.description}" }
            table { class: "table",
                tbody {
                    for (label, value) in stats {
                        tr { key: "{label}",
                            td { "{label}" }
                            td { "{value}" }
                            td {
                                progress { class: "stat-bar", max: 255, value: value }
                            }
                        }
                    }
                    tr {
                        td { "Total" }
                        td { "{total}" }
                        td {}
                    }
                }
            }
            if !moves.is_empty() {
                p { "Moves: {moves}" }
            }
            if pokemon.evolution_chain.len() > 1 {
                p { "Evolution: {evolution}" }
            }
            {children}
        }
    )
}
