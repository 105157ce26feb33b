use pokedex::{backend::controller, model::api::ErrorKind, model::user::Role};
use pokedex_test_utils::prelude::*;

use crate::util::{app_state, session_for};

/// Expect NotFound with the trimmed identifier in the message
#[tokio::test]
async fn get_pokemon_not_found() -> Result<(), TestError> {
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
    let state = app_state(&test);

    let err = controller::pokemon::get_pokemon(&state, " missingno ")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.error, "Pokémon \"missingno\" not found");
    test.assert_mocks();

    Ok(())
}

/// Expect a search to show up in recent and popular searches
#[tokio::test]
async fn search_feeds_history() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_pokemon_list_endpoint(&["pikachu"], 2)
        .with_lookup_endpoints("pikachu", 25, "Pikachu", 2)
        .build()
        .await?;
    let user = test.user().insert_user("ash_k", "user").await?;
    let state = app_state(&test);
    let session = session_for(&user, Role::User);

    let first = controller::pokemon::search(&state, &session, "pika")
        .await
        .unwrap();
    controller::pokemon::search(&state, &session, "pika")
        .await
        .unwrap();

    assert_eq!(first.message, "Search successful");
    assert_eq!(first.data.len(), 1);

    let recent = controller::pokemon::recent_searches(&state, &session)
        .await
        .unwrap();
    let popular = controller::pokemon::popular_searches(&state).await.unwrap();

    assert_eq!(recent.data.len(), 2);
    assert_eq!(popular.data[0].term, "pika");
    assert_eq!(popular.data[0].count, 2);
    test.assert_mocks();

    Ok(())
}

/// Expect an empty result to carry its own message
#[tokio::test]
async fn search_without_matches() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_pokemon_list_endpoint(&["pikachu"], 1)
        .build()
        .await?;
    let user = test.user().insert_user("ash_k", "user").await?;
    let state = app_state(&test);

    let reply = controller::pokemon::search(&state, &session_for(&user, Role::User), "zzz")
        .await
        .unwrap();

    assert!(reply.data.is_empty());
    assert_eq!(reply.message, "No Pokémon match your search");

    Ok(())
}

/// Expect the type names from upstream
#[tokio::test]
async fn get_types() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_type_list_endpoint(&["normal", "fire", "water"], 1)
        .build()
        .await?;
    let state = app_state(&test);

    let reply = controller::pokemon::get_types(&state).await.unwrap();

    assert_eq!(reply.data, vec!["normal", "fire", "water"]);
    test.assert_mocks();

    Ok(())
}
