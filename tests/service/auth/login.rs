use chrono::{Duration, NaiveDate, NaiveDateTime};
use pokedex::{
    backend::{
        config::Config,
        error::{auth::AuthError, Error},
    },
    model::user::Role,
};
use pokedex_test_utils::prelude::*;

use super::{auth_service, form, throttle};

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap()
}

/// Expect a registered user to log in with their role
#[tokio::test]
async fn logs_in_registered_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let config = Config::default();
    let throttle = throttle(&config);
    let service = auth_service(&test, &throttle, &config);

    let registered = service
        .register(&form("ash_k", "ash@pallet.town", "Abcdef1!"))
        .await
        .unwrap();

    let session = service.login("ash_k", "Abcdef1!", noon()).await.unwrap();

    assert_eq!(session, registered);
    assert_eq!(session.role, Role::User);

    Ok(())
}

/// Expect unknown usernames and wrong passwords to fail the same way
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let config = Config::default();
    let throttle = throttle(&config);
    let service = auth_service(&test, &throttle, &config);

    service
        .register(&form("ash_k", "ash@pallet.town", "Abcdef1!"))
        .await
        .unwrap();

    let wrong_password = service.login("ash_k", "Abcdef1?", noon()).await;
    let unknown_user = service.login("gary", "Abcdef1!", noon()).await;

    assert!(matches!(
        wrong_password,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_user,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Expect the third failure to lock the username, even for the right password,
/// until the lockout has passed
#[tokio::test]
async fn locks_after_max_attempts() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let config = Config::default();
    let throttle = throttle(&config);
    let service = auth_service(&test, &throttle, &config);

    service
        .register(&form("ash_k", "ash@pallet.town", "Abcdef1!"))
        .await
        .unwrap();

    for _ in 0..2 {
        let result = service.login("ash_k", "wrong", noon()).await;
        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::InvalidCredentials))
        ));
    }

    let third = service.login("ash_k", "wrong", noon()).await;
    assert!(matches!(
        third,
        Err(Error::AuthError(AuthError::AccountLocked { remaining_secs: 300 }))
    ));

    let during_lock = service
        .login("ash_k", "Abcdef1!", noon() + Duration::seconds(60))
        .await;
    assert!(matches!(
        during_lock,
        Err(Error::AuthError(AuthError::AccountLocked { remaining_secs: 240 }))
    ));

    let after_lock = service
        .login("ash_k", "Abcdef1!", noon() + Duration::seconds(301))
        .await;
    assert!(after_lock.is_ok());

    Ok(())
}

/// Expect a successful login to clear earlier failures
#[tokio::test]
async fn success_resets_failures() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let config = Config::default();
    let throttle = throttle(&config);
    let service = auth_service(&test, &throttle, &config);

    service
        .register(&form("ash_k", "ash@pallet.town", "Abcdef1!"))
        .await
        .unwrap();

    for _ in 0..2 {
        let _ = service.login("ash_k", "wrong", noon()).await;
    }
    assert_eq!(throttle.failed_attempts("ash_k"), 2);

    service.login("ash_k", "Abcdef1!", noon()).await.unwrap();
    assert_eq!(throttle.failed_attempts("ash_k"), 0);

    for _ in 0..2 {
        let result = service.login("ash_k", "wrong", noon()).await;
        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::InvalidCredentials))
        ));
    }

    Ok(())
}

/// Expect a lock on one username to leave others unaffected
#[tokio::test]
async fn lock_is_per_username() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let config = Config::default();
    let throttle = throttle(&config);
    let service = auth_service(&test, &throttle, &config);

    service
        .register(&form("misty", "misty@cerulean.city", "Abcdef1!"))
        .await
        .unwrap();

    for _ in 0..3 {
        let _ = service.login("ash_k", "wrong", noon()).await;
    }

    assert!(service.login("misty", "Abcdef1!", noon()).await.is_ok());

    Ok(())
}
