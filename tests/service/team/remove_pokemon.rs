use pokedex::backend::{
    error::{team::TeamError, Error},
    service::team::TeamService,
};
use pokedex_test_utils::prelude::*;

use crate::util::test_config;

/// Expect an entry to be removed while others remain
#[tokio::test]
async fn removes_entry() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let (_, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
    let pikachu = test.team().insert_entry(trainer.id, 25, "Pikachu").await?;
    test.team().insert_entry(trainer.id, 1, "Bulbasaur").await?;
    let config = test_config();
    let service = TeamService::new(&test.db, &test.pokeapi_client, &config);

    service.remove_pokemon(pikachu.id, trainer.id).await.unwrap();

    let team = service.get_team(trainer.id).await.unwrap();
    assert_eq!(team.len(), 1);
    assert_eq!(team[0].pokemon_name, "Bulbasaur");

    Ok(())
}

/// Expect the only member of a team to stay
#[tokio::test]
async fn keeps_last_member() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let (_, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
    let pikachu = test.team().insert_entry(trainer.id, 25, "Pikachu").await?;
    let config = test_config();
    let service = TeamService::new(&test.db, &test.pokeapi_client, &config);

    let result = service.remove_pokemon(pikachu.id, trainer.id).await;

    assert!(matches!(result, Err(Error::TeamError(TeamError::LastPokemon))));
    assert_eq!(service.get_team(trainer.id).await.unwrap().len(), 1);

    Ok(())
}

/// Expect another trainer's entry to be reported as not in the team
#[tokio::test]
async fn rejects_foreign_entry() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let (_, ash) = test.user().insert_user_with_trainer("ash_k").await?;
    let (_, misty) = test.user().insert_user_with_trainer("misty").await?;
    test.team().insert_entry(ash.id, 25, "Pikachu").await?;
    test.team().insert_entry(ash.id, 1, "Bulbasaur").await?;
    let starmie = test.team().insert_entry(misty.id, 121, "Starmie").await?;
    test.team().insert_entry(misty.id, 54, "Psyduck").await?;
    let config = test_config();

    let result = TeamService::new(&test.db, &test.pokeapi_client, &config)
        .remove_pokemon(starmie.id, ash.id)
        .await;

    assert!(matches!(result, Err(Error::TeamError(TeamError::NotInTeam))));

    Ok(())
}
