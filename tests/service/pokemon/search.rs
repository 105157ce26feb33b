use pokedex::backend::{
    error::{pokemon::PokemonError, Error},
    service::pokemon::PokemonService,
};
use pokedex_test_utils::prelude::*;

use crate::util::test_config;

/// Expect substring matches resolved into summaries, and the query recorded
#[tokio::test]
async fn returns_matches_and_records_query() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_pokemon_list_endpoint(&["bulbasaur", "pikachu", "raichu"], 1)
        .with_lookup_endpoints("pikachu", 25, "Pikachu", 1)
        .build()
        .await?;
    let user = test.user().insert_user("ash_k", "user").await?;
    let config = test_config();
    let service = PokemonService::new(&test.db, &test.pokeapi_client, &config);

    let results = service.search(user.id, "Pika", 20).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 25);
    assert_eq!(results[0].name, "Pikachu");
    assert!(results[0].sprite.is_some());

    let history = service.recent_searches(user.id, 10).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].term, "Pika");
    test.assert_mocks();

    Ok(())
}

/// Expect a query without matches to be recorded all the same
#[tokio::test]
async fn records_query_without_matches() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_pokemon_list_endpoint(&["bulbasaur", "pikachu"], 1)
        .build()
        .await?;
    let user = test.user().insert_user("ash_k", "user").await?;
    let config = test_config();
    let service = PokemonService::new(&test.db, &test.pokeapi_client, &config);

    let results = service.search(user.id, "zzz", 20).await.unwrap();

    assert!(results.is_empty());
    assert_eq!(service.recent_searches(user.id, 10).await.unwrap().len(), 1);

    Ok(())
}

/// Expect a numeric query to be matched against names like any other term
#[tokio::test]
async fn numeric_query_matches_names_containing_digits() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_pokemon_list_endpoint(&["ivysaur", "porygon2", "porygon-z"], 1)
        .with_lookup_endpoints("porygon2", 233, "Porygon2", 1)
        .build()
        .await?;
    let user = test.user().insert_user("ash_k", "user").await?;
    let config = test_config();

    let results = PokemonService::new(&test.db, &test.pokeapi_client, &config)
        .search(user.id, "2", 20)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 233);
    assert_eq!(results[0].name, "Porygon2");
    test.assert_mocks();

    Ok(())
}

/// Expect an id with no matching name to yield an empty page
#[tokio::test]
async fn unmatched_numeric_query_is_empty() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_pokemon_list_endpoint(&["pikachu", "porygon2"], 1)
        .build()
        .await?;
    let user = test.user().insert_user("ash_k", "user").await?;
    let config = test_config();

    let results = PokemonService::new(&test.db, &test.pokeapi_client, &config)
        .search(user.id, "999999", 20)
        .await
        .unwrap();

    assert!(results.is_empty());
    test.assert_mocks();

    Ok(())
}

/// Expect an empty query to be refused and not recorded
#[tokio::test]
async fn rejects_empty_query() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let user = test.user().insert_user("ash_k", "user").await?;
    let config = test_config();
    let service = PokemonService::new(&test.db, &test.pokeapi_client, &config);

    let result = service.search(user.id, "   ", 20).await;

    assert!(matches!(
        result,
        Err(Error::PokemonError(PokemonError::EmptyQuery))
    ));
    assert!(service.recent_searches(user.id, 10).await.unwrap().is_empty());

    Ok(())
}

/// Expect popular searches counted across users, most frequent first
#[tokio::test]
async fn counts_popular_searches() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let ash = test.user().insert_user("ash_k", "user").await?;
    let misty = test.user().insert_user("misty", "user").await?;
    let now = chrono::Utc::now().naive_utc();
    for (user_id, term) in [
        (ash.id, "pikachu"),
        (misty.id, "pikachu"),
        (misty.id, "starmie"),
    ] {
        test.team().insert_search(user_id, term, now).await?;
    }
    let config = test_config();

    let popular = PokemonService::new(&test.db, &test.pokeapi_client, &config)
        .popular_searches(10)
        .await
        .unwrap();

    assert_eq!(popular[0].term, "pikachu");
    assert_eq!(popular[0].count, 2);
    assert_eq!(popular.len(), 2);

    Ok(())
}
