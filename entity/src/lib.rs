//! SeaORM entities for the Pokédex relational schema.

pub mod prelude;

pub mod role;
pub mod search_history;
pub mod team_pokemon;
pub mod trainer;
pub mod user;
