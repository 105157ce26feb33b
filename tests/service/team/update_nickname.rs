use pokedex::backend::{
    error::{team::TeamError, Error},
    service::team::TeamService,
};
use pokedex_test_utils::prelude::*;

use crate::util::test_config;

/// Expect a trimmed nickname of exactly 50 characters to be saved
#[tokio::test]
async fn saves_nickname_up_to_limit() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let (_, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
    let entry = test.team().insert_entry(trainer.id, 25, "Pikachu").await?;
    let config = test_config();
    let nickname = "é".repeat(50);

    let updated = TeamService::new(&test.db, &test.pokeapi_client, &config)
        .update_nickname(entry.id, trainer.id, &format!("  {nickname} "))
        .await
        .unwrap();

    assert_eq!(updated.nickname.as_deref(), Some(nickname.as_str()));
    assert_eq!(updated.display_name(), nickname);

    Ok(())
}

/// Expect 51 characters and blank nicknames to be refused
#[tokio::test]
async fn rejects_invalid_nicknames() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let (_, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
    let entry = test.team().insert_entry(trainer.id, 25, "Pikachu").await?;
    let config = test_config();
    let service = TeamService::new(&test.db, &test.pokeapi_client, &config);

    let too_long = service
        .update_nickname(entry.id, trainer.id, &"a".repeat(51))
        .await;
    let blank = service.update_nickname(entry.id, trainer.id, "   ").await;

    assert!(matches!(
        too_long,
        Err(Error::TeamError(TeamError::NicknameTooLong { max: 50 }))
    ));
    assert!(matches!(blank, Err(Error::TeamError(TeamError::EmptyNickname))));

    Ok(())
}

/// Expect another trainer's entry to be left untouched
#[tokio::test]
async fn rejects_foreign_entry() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let (_, ash) = test.user().insert_user_with_trainer("ash_k").await?;
    let (_, misty) = test.user().insert_user_with_trainer("misty").await?;
    let starmie = test.team().insert_entry(misty.id, 121, "Starmie").await?;
    let config = test_config();

    let result = TeamService::new(&test.db, &test.pokeapi_client, &config)
        .update_nickname(starmie.id, ash.id, "Star")
        .await;

    assert!(matches!(result, Err(Error::TeamError(TeamError::NotInTeam))));

    Ok(())
}
