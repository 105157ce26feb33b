//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! Holds an in-memory SQLite database, a mock PokéAPI server and a client
//! pointed at it.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::TableCreateStatement, ActiveValue, ConnectionTrait, Database, DatabaseConnection,
    EntityTrait, Schema,
};

use crate::{
    constant::{TEST_ROLES, TEST_USER_AGENT},
    error::TestError,
};

/// Test environment.
///
/// ```ignore
/// let mut test = test_setup_with_user_tables!()?;
///
/// let (user, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
/// test.team().insert_entry(trainer.id, 25, "Pikachu").await?;
///
/// let state: AppState = test.to_app_state();
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// PokéAPI client configured to use the mock server
    pub pokeapi_client: pokeapi::Client,

    /// Mock HTTP server standing in for PokéAPI
    pub(crate) server: ServerGuard,
    /// Mock endpoints checked by [`Self::assert_mocks`]
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Convert the database and client into any type that can be built from them
    ///
    /// Lets integration tests build the application state without this crate
    /// depending on the application crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, pokeapi::Client)>,
    {
        T::from((self.db.clone(), self.pokeapi_client.clone()))
    }

    /// Base URL of the mock PokéAPI server.
    pub fn server_url(&self) -> String {
        self.server.url()
    }
}

impl TestContext {
    /// Create an empty test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database connected, mock server running
    /// - `Err(TestError::PokeApiError)` - Client could not be built
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let pokeapi_client = pokeapi::Client::builder()
            .base_url(&server.url())
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            pokeapi_client,
            server,
            mocks: Vec::new(),
        })
    }

    /// Execute CREATE TABLE statements.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Create the table of a single entity.
    pub async fn with_table<E: EntityTrait>(&self, entity: E) -> Result<(), TestError> {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        self.with_tables(vec![schema.create_table_from_entity(entity)])
            .await
    }

    /// Create every application table in foreign key order and seed the roles.
    pub async fn with_user_tables(&self) -> Result<(), TestError> {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.with_tables(vec![
            schema.create_table_from_entity(entity::prelude::Role),
            schema.create_table_from_entity(entity::prelude::User),
            schema.create_table_from_entity(entity::prelude::Trainer),
            schema.create_table_from_entity(entity::prelude::TeamPokemon),
            schema.create_table_from_entity(entity::prelude::SearchHistory),
        ])
        .await?;

        entity::prelude::Role::insert_many(TEST_ROLES.iter().map(|name| {
            entity::role::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            }
        }))
        .exec(&self.db)
        .await?;

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
