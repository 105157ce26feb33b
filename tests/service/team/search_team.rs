use pokedex::backend::service::team::TeamService;
use pokedex_test_utils::prelude::*;

use crate::util::test_config;

/// Expect matches on species name or nickname, ignoring case
#[tokio::test]
async fn matches_name_or_nickname() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let (_, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
    test.team().insert_entry(trainer.id, 25, "Pikachu").await?;
    let bulbasaur = test.team().insert_entry(trainer.id, 1, "Bulbasaur").await?;
    test.team().insert_entry(trainer.id, 7, "Squirtle").await?;
    let config = test_config();
    let service = TeamService::new(&test.db, &test.pokeapi_client, &config);

    service
        .update_nickname(bulbasaur.id, trainer.id, "Sparky")
        .await
        .unwrap();

    let by_name = service.search_team(trainer.id, "PIKA").await.unwrap();
    let by_nickname = service.search_team(trainer.id, "spark").await.unwrap();

    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].pokemon_name, "Pikachu");
    assert_eq!(by_nickname.len(), 1);
    assert_eq!(by_nickname[0].pokemon_name, "Bulbasaur");

    Ok(())
}

/// Expect a blank term to return the whole team
#[tokio::test]
async fn blank_term_returns_team() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let (_, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
    test.team().insert_entry(trainer.id, 25, "Pikachu").await?;
    test.team().insert_entry(trainer.id, 1, "Bulbasaur").await?;
    let config = test_config();

    let team = TeamService::new(&test.db, &test.pokeapi_client, &config)
        .search_team(trainer.id, "  ")
        .await
        .unwrap();

    assert_eq!(team.len(), 2);

    Ok(())
}
