use pokedex::{
    backend::controller,
    model::{api::ErrorKind, user::Role},
};
use pokedex_test_utils::prelude::*;

use crate::util::{app_state, session_for};

/// Expect NotFound asking for a trainer profile when none exists
#[tokio::test]
async fn requires_trainer() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let user = test.user().insert_user("ash_k", "user").await?;
    let state = app_state(&test);
    let session = session_for(&user, Role::User);

    let get = controller::team::get_team(&state, &session).await.unwrap_err();
    let add = controller::team::add_pokemon(&state, &session, "pikachu", None)
        .await
        .unwrap_err();
    let stats = controller::team::get_team_stats(&state, &session)
        .await
        .unwrap_err();

    for err in [get, add, stats] {
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.error, "Create your trainer profile first");
    }

    Ok(())
}

/// Expect an add, a nickname change and a stats summary over the result
#[tokio::test]
async fn add_rename_and_summarise() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_lookup_endpoints("pikachu", 25, "Pikachu", 1)
        .build()
        .await?;
    let (user, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
    test.team().insert_entry(trainer.id, 1, "Bulbasaur").await?;
    let state = app_state(&test);
    let session = session_for(&user, Role::User);

    let added = controller::team::add_pokemon(&state, &session, "pikachu", Some("Sparky"))
        .await
        .unwrap();
    assert_eq!(added.message, "Sparky added to your team");

    let renamed = controller::team::update_nickname(&state, &session, added.data.id, "Zappy")
        .await
        .unwrap();
    assert_eq!(renamed.data.nickname.as_deref(), Some("Zappy"));

    let stats = controller::team::get_team_stats(&state, &session)
        .await
        .unwrap()
        .data;
    assert_eq!(stats.total, 2);
    assert_eq!(stats.types.get("normal"), Some(&2));
    assert_eq!(
        stats.fastest.map(|entry| entry.pokemon_name),
        Some("Pikachu".to_string())
    );

    let found = controller::team::search_team(&state, &session, "zap")
        .await
        .unwrap();
    assert_eq!(found.data.len(), 1);
    test.assert_mocks();

    Ok(())
}

/// Expect business rule refusals to be reported as Rejected
#[tokio::test]
async fn reports_rejections() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let (user, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
    let only = test.team().insert_entry(trainer.id, 25, "Pikachu").await?;
    let state = app_state(&test);
    let session = session_for(&user, Role::User);

    let last = controller::team::remove_pokemon(&state, &session, only.id)
        .await
        .unwrap_err();
    assert_eq!(last.kind, ErrorKind::Rejected);

    for id in 2..=10 {
        test.team()
            .insert_entry(trainer.id, id, &format!("Pokemon {id}"))
            .await?;
    }

    let full = controller::team::add_pokemon(&state, &session, "pikachu", None)
        .await
        .unwrap_err();
    assert_eq!(full.kind, ErrorKind::Rejected);
    assert_eq!(full.error, "Your team is full (maximum 10 Pokémon)");

    let removed = controller::team::remove_pokemon(&state, &session, only.id)
        .await
        .unwrap();
    assert_eq!(removed.message, "Pokémon removed from your team");

    Ok(())
}

/// Expect an empty summary for a trainer without Pokémon
#[tokio::test]
async fn empty_team_stats() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let (user, _) = test.user().insert_user_with_trainer("ash_k").await?;
    let state = app_state(&test);

    let stats = controller::team::get_team_stats(&state, &session_for(&user, Role::User))
        .await
        .unwrap()
        .data;

    assert_eq!(stats.total, 0);
    assert!(stats.strongest.is_none());
    assert!(stats.fastest.is_none());

    Ok(())
}
