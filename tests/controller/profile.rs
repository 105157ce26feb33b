use pokedex::{
    backend::controller,
    model::{
        api::ErrorKind,
        user::{ProfileForm, Role},
    },
};
use pokedex_test_utils::prelude::*;

use crate::util::{app_state, register, TEST_PASSWORD};

/// Expect a new account to have no trainer until the first profile save
#[tokio::test]
async fn first_save_creates_trainer() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let state = app_state(&test);
    let session = register(&state, "ash_k").await;

    let before = controller::profile::get_profile(&state, &session)
        .await
        .unwrap()
        .data;
    assert!(before.trainer.is_none());
    assert_eq!(before.role, Role::User);

    let form = ProfileForm {
        trainer_name: Some("Ash".to_string()),
        region: Some("Kanto".to_string()),
        ..Default::default()
    };
    let after = controller::profile::update_profile(&state, &session, form)
        .await
        .unwrap();

    assert_eq!(after.message, "Profile updated successfully");
    assert_eq!(after.data.trainer.map(|t| t.name), Some("Ash".to_string()));

    let stats = controller::profile::get_trainer_stats(&state, &session)
        .await
        .unwrap()
        .data;
    assert_eq!(stats.total_pokemon, 0);

    Ok(())
}

/// Expect a deleted account to be unable to log in
#[tokio::test]
async fn delete_account_blocks_login() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let state = app_state(&test);
    let session = register(&state, "ash_k").await;

    let wrong = controller::profile::delete_account(&state, session.clone(), "Wrong1!!")
        .await
        .unwrap_err();
    assert_eq!(wrong.kind, ErrorKind::Unauthorized);

    controller::profile::delete_account(&state, session, TEST_PASSWORD)
        .await
        .unwrap();

    let login = controller::auth::login(
        &state,
        pokedex::model::user::LoginForm {
            username: "ash_k".to_string(),
            password: TEST_PASSWORD.to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(login.kind, ErrorKind::Unauthorized);

    Ok(())
}
