//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table and are generic over
//! [`sea_orm::ConnectionTrait`] so they run on a connection or inside a
//! transaction alike.

pub mod admin;
pub mod search;
pub mod team;
pub mod trainer;
pub mod user;
