//! Application backend.
//!
//! Views call [`controller`] functions, controllers call [`service`] types,
//! services call [`data`] repositories (SQL through SeaORM) or the `pokeapi`
//! client (HTTP). State is passed explicitly through [`model::app::AppState`].

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
