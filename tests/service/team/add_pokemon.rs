use pokedex::backend::{
    error::{pokemon::PokemonError, team::TeamError, Error},
    service::team::TeamService,
};
use pokedex_test_utils::prelude::*;

use crate::util::test_config;

/// Expect a snapshot of the upstream record to be stored on the team
#[tokio::test]
async fn stores_snapshot() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_lookup_endpoints("pikachu", 25, "Pikachu", 1)
        .build()
        .await?;
    let (_, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
    let config = test_config();

    let entry = TeamService::new(&test.db, &test.pokeapi_client, &config)
        .add_pokemon(trainer.id, "Pikachu", None)
        .await
        .unwrap();

    assert_eq!(entry.pokemon_id, 25);
    assert_eq!(entry.pokemon_name, "Pikachu");
    assert_eq!(entry.nickname, None);
    assert_eq!(entry.types, vec!["normal".to_string()]);
    assert_eq!(entry.height, 0.4);
    assert_eq!(entry.weight, 6.0);
    assert_eq!(entry.stats.attack, 50);
    assert_eq!(entry.stats.speed, 90);
    assert_eq!(
        entry.moves,
        vec!["Mega Punch", "Pay Day", "Thunder Punch", "Slam"]
    );
    test.assert_mocks();

    Ok(())
}

/// Expect a whitespace-only nickname to be stored as no nickname
#[tokio::test]
async fn blank_nickname_is_none() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_lookup_endpoints("25", 25, "Pikachu", 1)
        .build()
        .await?;
    let (_, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
    let config = test_config();

    let entry = TeamService::new(&test.db, &test.pokeapi_client, &config)
        .add_pokemon(trainer.id, "25", Some("   "))
        .await
        .unwrap();

    assert_eq!(entry.nickname, None);
    assert_eq!(entry.display_name(), "Pikachu");

    Ok(())
}

/// Expect the tenth member to be accepted and the eleventh refused without a lookup
#[tokio::test]
async fn enforces_team_limit() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_lookup_endpoints("pikachu", 25, "Pikachu", 1)
        .build()
        .await?;
    let (_, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
    for id in 1..=9 {
        test.team()
            .insert_entry(trainer.id, id, &format!("Pokemon {id}"))
            .await?;
    }
    let config = test_config();
    let service = TeamService::new(&test.db, &test.pokeapi_client, &config);

    assert!(service.add_pokemon(trainer.id, "pikachu", None).await.is_ok());

    let result = service.add_pokemon(trainer.id, "pikachu", None).await;
    assert!(matches!(
        result,
        Err(Error::TeamError(TeamError::TeamFull { max: 10 }))
    ));
    test.assert_mocks();

    Ok(())
}

/// Expect NotFound when the lookup finds nothing
#[tokio::test]
async fn unknown_pokemon() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/pokemon/missingno")
                .with_status(404)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (_, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
    let config = test_config();

    let result = TeamService::new(&test.db, &test.pokeapi_client, &config)
        .add_pokemon(trainer.id, "MissingNo", None)
        .await;

    assert!(matches!(
        result,
        Err(Error::PokemonError(PokemonError::NotFound(ref name))) if name == "MissingNo"
    ));
    test.assert_mocks();

    Ok(())
}

/// Expect a nickname over 50 characters to be refused before the lookup
#[tokio::test]
async fn rejects_long_nickname() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let (_, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
    let config = test_config();

    let result = TeamService::new(&test.db, &test.pokeapi_client, &config)
        .add_pokemon(trainer.id, "pikachu", Some(&"a".repeat(51)))
        .await;

    assert!(matches!(
        result,
        Err(Error::TeamError(TeamError::NicknameTooLong { max: 50 }))
    ));

    Ok(())
}
