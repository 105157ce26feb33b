//! Declarative test setup.
//!
//! Configuration calls are queued and executed in `build()`: tables first,
//! then custom mock endpoints, then the PokéAPI shortcuts.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{fixtures::pokeapi::factory, TestContext, TestError};

type MockBuilder = Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>;

/// Builder for a [`TestContext`].
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_user_tables()
///     .with_lookup_endpoints("pikachu", 25, "Pikachu", 1)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,

    // Custom mocks are registered first so tests can queue an error answer
    // ahead of a success on the same path.
    mock_builders: Vec<MockBuilder>,

    // (identifier, id, name, expected_requests)
    lookup_endpoints: Vec<(String, i32, String, usize)>,
    pokemon_list_endpoints: Vec<(Vec<String>, usize)>,
    type_list_endpoints: Vec<(Vec<String>, usize)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            mock_builders: Vec::new(),
            lookup_endpoints: Vec::new(),
            pokemon_list_endpoints: Vec::new(),
            type_list_endpoints: Vec::new(),
        }
    }

    /// Create every application table and seed the `user` and `admin` roles.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add the table of a single entity.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Serve a complete lookup (pokemon, species, evolution chain).
    ///
    /// # Arguments
    /// - `identifier` - Path segment requested by the client, name or id
    /// - `id` - Pokédex number used in the species and chain URLs
    /// - `name` - Display name of the Pokémon
    /// - `expected_requests` - Number of lookups expected
    pub fn with_lookup_endpoints(
        mut self,
        identifier: &str,
        id: i32,
        name: &str,
        expected_requests: usize,
    ) -> Self {
        self.lookup_endpoints.push((
            identifier.to_string(),
            id,
            name.to_string(),
            expected_requests,
        ));
        self
    }

    /// Serve the Pokémon index used by substring search.
    pub fn with_pokemon_list_endpoint(mut self, names: &[&str], expected_requests: usize) -> Self {
        self.pokemon_list_endpoints.push((
            names.iter().map(|n| n.to_string()).collect(),
            expected_requests,
        ));
        self
    }

    /// Serve the type list.
    pub fn with_type_list_endpoint(mut self, names: &[&str], expected_requests: usize) -> Self {
        self.type_list_endpoints.push((
            names.iter().map(|n| n.to_string()).collect(),
            expected_requests,
        ));
        self
    }

    /// Add a custom mock endpoint with full control over the server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Create the configured tables and mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready to use test environment
    /// - `Err(TestError::DbErr)` - Table creation or role seeding failed
    /// - `Err(TestError::PokeApiError)` - Test client could not be built
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        if self.include_user_tables {
            setup.with_user_tables().await?;
        }
        setup.with_tables(self.tables).await?;

        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (identifier, id, name, expected) in self.lookup_endpoints {
            mocks.extend(
                setup
                    .pokeapi()
                    .create_lookup_endpoints(&identifier, id, &name, expected),
            );
        }

        for (names, expected) in self.pokemon_list_endpoints {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            let list = factory::mock_resource_list(&names);
            mocks.push(setup.pokeapi().create_pokemon_list_endpoint(&list, expected));
        }

        for (names, expected) in self.type_list_endpoints {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            let list = factory::mock_resource_list(&names);
            mocks.push(setup.pokeapi().create_type_list_endpoint(&list, expected));
        }

        setup.mocks.extend(mocks);

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
