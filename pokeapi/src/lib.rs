//! Typed async client for the public PokéAPI (`https://pokeapi.co/api/v2`).
//!
//! The client is split into endpoint groups the same way the upstream API is:
//!
//! ```ignore
//! let client = pokeapi::Client::builder()
//!     .user_agent("pokedex/0.1")
//!     .build()?;
//!
//! let pikachu = client.pokemon().get_pokemon("Pikachu").await?;
//! let species = client.species().get_species(&pikachu.species.url).await?;
//! ```
//!
//! Every request emits one line on the `pokedex::api` tracing target with the
//! endpoint, method, status and elapsed time.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod model;

pub use client::{Client, ClientBuilder};
pub use error::Error;

/// Default upstream base URL.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
