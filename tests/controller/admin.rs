use pokedex::{
    backend::controller,
    model::{
        admin::ActivityKind,
        api::ErrorKind,
        user::Role,
    },
};
use pokedex_test_utils::prelude::*;

use crate::util::{app_state, session_for};

/// Expect every admin operation to refuse a `user` session
#[tokio::test]
async fn refuses_non_admin() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let user = test.user().insert_user("ash_k", "user").await?;
    let other = test.user().insert_user("misty", "user").await?;
    let state = app_state(&test);
    let session = session_for(&user, Role::User);

    let errors = [
        controller::admin::list_users(&state, &session).await.err(),
        controller::admin::get_user_details(&state, &session, other.id)
            .await
            .err(),
        controller::admin::update_role(&state, &session, user.id, "admin")
            .await
            .err(),
        controller::admin::delete_user(&state, &session, other.id)
            .await
            .err(),
        controller::admin::get_system_stats(&state, &session).await.err(),
        controller::admin::get_activity_logs(&state, &session).await.err(),
        controller::admin::get_search_logs(&state, &session).await.err(),
    ];

    for err in errors {
        let err = err.expect("non-admin call should fail");
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(err.error, "Administrator role required");
    }

    Ok(())
}

/// Expect users, totals and logs to reflect the stored rows
#[tokio::test]
async fn lists_users_and_activity() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let admin = test.user().insert_user("oak", "admin").await?;
    let (ash, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
    test.team().insert_entry(trainer.id, 25, "Pikachu").await?;
    test.team()
        .insert_search(ash.id, "pikachu", chrono::Utc::now().naive_utc())
        .await?;
    let state = app_state(&test);
    let session = session_for(&admin, Role::Admin);

    let users = controller::admin::list_users(&state, &session)
        .await
        .unwrap()
        .data;
    assert_eq!(users.len(), 2);
    let listed = users.iter().find(|u| u.username == "ash_k").unwrap();
    assert_eq!(listed.total_pokemon, 1);
    assert_eq!(listed.total_searches, 1);

    let stats = controller::admin::get_system_stats(&state, &session)
        .await
        .unwrap()
        .data;
    assert_eq!(stats.total_users, 2);
    assert_eq!(stats.total_trainers, 1);
    assert_eq!(stats.total_pokemon, 1);
    assert_eq!(stats.total_searches, 1);
    assert_eq!(stats.users_by_role.get("admin"), Some(&1));
    assert_eq!(stats.users_by_role.get("user"), Some(&1));

    let activity = controller::admin::get_activity_logs(&state, &session)
        .await
        .unwrap()
        .data;
    assert_eq!(activity.len(), 2);
    assert!(activity.iter().any(|log| log.kind == ActivityKind::Search));
    assert!(activity
        .iter()
        .any(|log| log.kind == ActivityKind::TeamAddition && log.description == "Pikachu added to team"));

    let searches = controller::admin::get_search_logs(&state, &session)
        .await
        .unwrap()
        .data;
    assert_eq!(searches.len(), 1);
    assert_eq!(searches[0].email, "ash_k@pokedex.test");

    Ok(())
}

/// Expect self-service refusals to be reported as Rejected
#[tokio::test]
async fn reports_self_actions() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let admin = test.user().insert_user("oak", "admin").await?;
    let state = app_state(&test);
    let session = session_for(&admin, Role::Admin);

    let demote = controller::admin::update_role(&state, &session, admin.id, "user")
        .await
        .unwrap_err();
    let delete = controller::admin::delete_user(&state, &session, admin.id)
        .await
        .unwrap_err();

    assert_eq!(demote.kind, ErrorKind::Rejected);
    assert_eq!(delete.kind, ErrorKind::Rejected);

    Ok(())
}
