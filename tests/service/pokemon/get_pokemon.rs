use pokedex::backend::{
    error::{pokemon::PokemonError, Error},
    service::pokemon::PokemonService,
};
use pokedex_test_utils::prelude::*;

use crate::util::test_config;

/// Expect the three upstream records to be flattened into one detail record
#[tokio::test]
async fn returns_detail_record() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_endpoints("pikachu", 25, "Pikachu", 1)
        .build()
        .await?;
    let config = test_config();

    let pokemon = PokemonService::new(&test.db, &test.pokeapi_client, &config)
        .get_pokemon("  PIKACHU ")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(pokemon.id, 25);
    assert_eq!(pokemon.name, "Pikachu");
    assert_eq!(pokemon.height, 0.4);
    assert_eq!(pokemon.weight, 6.0);
    assert_eq!(pokemon.stats.total(), 390);
    assert_eq!(pokemon.moves.len(), 4);
    assert_eq!(pokemon.evolution_chain, vec!["Pikachu".to_string()]);
    assert_eq!(pokemon.description, "Pikachu es un Pokémon de prueba.");
    assert_eq!(pokemon.base_experience, 112);
    test.assert_mocks();

    Ok(())
}

/// Expect the description in the configured language
#[tokio::test]
async fn uses_configured_language() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_endpoints("pikachu", 25, "Pikachu", 1)
        .build()
        .await?;
    let mut config = test_config();
    config.app.language = "en".to_string();

    let pokemon = PokemonService::new(&test.db, &test.pokeapi_client, &config)
        .get_pokemon("pikachu")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(pokemon.description, "Pikachu is a test Pokémon.");

    Ok(())
}

/// Expect None for a name upstream does not know
#[tokio::test]
async fn none_when_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/pokemon/missingno")
                .with_status(404)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let config = test_config();

    let result = PokemonService::new(&test.db, &test.pokeapi_client, &config)
        .get_pokemon("missingno")
        .await
        .unwrap();

    assert!(result.is_none());
    test.assert_mocks();

    Ok(())
}

/// Expect a transient server error to be retried
#[tokio::test]
async fn retries_server_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/pokemon/pikachu")
                .with_status(500)
                .expect(1)
                .create()
        })
        .with_lookup_endpoints("pikachu", 25, "Pikachu", 1)
        .build()
        .await?;
    let config = test_config();

    let pokemon = PokemonService::new(&test.db, &test.pokeapi_client, &config)
        .get_pokemon("pikachu")
        .await
        .unwrap();

    assert_eq!(pokemon.map(|p| p.id), Some(25));
    test.assert_mocks();

    Ok(())
}

/// Expect the first attempt plus every retry to be spent before a persistent failure yields None
#[tokio::test]
async fn gives_up_after_max_retries() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/pokemon/pikachu")
                .with_status(503)
                .expect(4)
                .create()
        })
        .build()
        .await?;
    let config = test_config();

    let result = PokemonService::new(&test.db, &test.pokeapi_client, &config)
        .get_pokemon("pikachu")
        .await
        .unwrap();

    assert!(result.is_none());
    test.assert_mocks();

    Ok(())
}

/// Expect a single attempt when retries are disabled
#[tokio::test]
async fn zero_retries_makes_one_attempt() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/pokemon/pikachu")
                .with_status(500)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let mut config = test_config();
    config.api.max_retries = 0;

    let result = PokemonService::new(&test.db, &test.pokeapi_client, &config)
        .get_pokemon("pikachu")
        .await
        .unwrap();

    assert!(result.is_none());
    test.assert_mocks();

    Ok(())
}

/// Expect a blank identifier to be refused without a request
#[tokio::test]
async fn rejects_blank_identifier() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let config = test_config();

    let result = PokemonService::new(&test.db, &test.pokeapi_client, &config)
        .get_pokemon("   ")
        .await;

    assert!(matches!(
        result,
        Err(Error::PokemonError(PokemonError::EmptyQuery))
    ));

    Ok(())
}
