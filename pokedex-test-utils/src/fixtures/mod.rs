//! Fixture helpers used while a test runs.
//!
//! - `pokeapi` - upstream response factories and mock endpoints
//! - `team` - team entries and search history rows
//! - `user` - users (with a role) and their trainers

pub mod pokeapi;
pub mod team;
pub mod user;
