//! Shared test harness for the Pokédex workspace.
//!
//! Tests run in two phases. [`TestBuilder`] (or one of the setup macros)
//! creates an in-memory SQLite database and a mock PokéAPI server; the
//! resulting [`TestContext`] then exposes fixture helpers for inserting rows
//! and registering further mock endpoints while the test runs.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
mod macros;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::pokeapi::factory, test_setup_with_tables, test_setup_with_user_tables,
        TestBuilder, TestContext, TestError,
    };
}
