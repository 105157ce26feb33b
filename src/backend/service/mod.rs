//! Service layer.
//!
//! Services hold the business rules: they validate input, call the
//! repositories and the upstream API client, and return domain errors that
//! controllers translate for the views.

pub mod admin;
pub mod auth;
pub mod pokemon;
pub mod profile;
pub mod retry;
pub mod sprite;
pub mod team;
