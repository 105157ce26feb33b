use pokedex::{
    backend::{
        config::Config,
        error::{auth::AuthError, Error},
    },
    model::user::Role,
};
use pokedex_test_utils::prelude::*;
use sea_orm::EntityTrait;

use super::{auth_service, form, throttle};

/// Expect a new account with the `user` role and a hashed password
#[tokio::test]
async fn creates_user_with_user_role() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let config = Config::default();
    let throttle = throttle(&config);

    let session = auth_service(&test, &throttle, &config)
        .register(&form("ash_k", "ash@pallet.town", "Abcdef1!"))
        .await
        .unwrap();

    assert_eq!(session.username, "ash_k");
    assert_eq!(session.role, Role::User);

    let user = entity::prelude::User::find_by_id(session.user_id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_ne!(user.password_hash, "Abcdef1!");
    assert!(user.password_hash.starts_with("$argon2"));

    Ok(())
}

/// Expect surrounding whitespace to be trimmed from username and email
#[tokio::test]
async fn trims_username_and_email() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let config = Config::default();
    let throttle = throttle(&config);

    let session = auth_service(&test, &throttle, &config)
        .register(&form("  misty  ", " misty@cerulean.city ", "Abcdef1!"))
        .await
        .unwrap();

    assert_eq!(session.username, "misty");
    assert_eq!(session.email, "misty@cerulean.city");

    Ok(())
}

/// Expect the first failing password rule to be reported
#[tokio::test]
async fn rejects_weak_passwords() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let config = Config::default();
    let throttle = throttle(&config);
    let service = auth_service(&test, &throttle, &config);

    let cases = [
        ("abc", AuthError::PasswordTooShort(8)),
        ("abcdefgh", AuthError::PasswordMissingUppercase),
        ("ABCDEFGH", AuthError::PasswordMissingLowercase),
        ("Abcdefgh", AuthError::PasswordMissingDigit),
        ("Abcdefg1", AuthError::PasswordMissingSpecial),
    ];

    for (password, expected) in cases {
        let result = service
            .register(&form("brock", "brock@pewter.city", password))
            .await;

        match result {
            Err(Error::AuthError(err)) => assert_eq!(err, expected, "password {password:?}"),
            other => panic!("expected {expected:?} for {password:?}, got {other:?}"),
        }
    }

    assert!(service
        .register(&form("brock", "brock@pewter.city", "Abcdef1!"))
        .await
        .is_ok());

    Ok(())
}

/// Expect the username format to be checked before the password
#[tokio::test]
async fn checks_username_before_password() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let config = Config::default();
    let throttle = throttle(&config);

    let result = auth_service(&test, &throttle, &config)
        .register(&form("ab", "ab@pallet.town", "abc"))
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidUsername))
    ));

    Ok(())
}

/// Expect an empty field to be rejected before any other check
#[tokio::test]
async fn rejects_missing_fields() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let config = Config::default();
    let throttle = throttle(&config);

    let result = auth_service(&test, &throttle, &config)
        .register(&form("ash_k", "   ", "Abcdef1!"))
        .await;

    assert!(matches!(result, Err(Error::AuthError(AuthError::MissingFields))));

    Ok(())
}

/// Expect Conflict errors for a taken username or email
#[tokio::test]
async fn rejects_duplicates() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let config = Config::default();
    let throttle = throttle(&config);
    let service = auth_service(&test, &throttle, &config);

    service
        .register(&form("ash_k", "ash@pallet.town", "Abcdef1!"))
        .await
        .unwrap();

    let same_username = service
        .register(&form("ash_k", "other@pallet.town", "Abcdef1!"))
        .await;
    assert!(matches!(
        same_username,
        Err(Error::AuthError(AuthError::UsernameTaken))
    ));

    let same_email = service
        .register(&form("ash_two", "ash@pallet.town", "Abcdef1!"))
        .await;
    assert!(matches!(
        same_email,
        Err(Error::AuthError(AuthError::EmailTaken))
    ));

    Ok(())
}

/// Expect an invalid email format to be rejected
#[tokio::test]
async fn rejects_invalid_email() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let config = Config::default();
    let throttle = throttle(&config);

    let result = auth_service(&test, &throttle, &config)
        .register(&form("ash_k", "not-an-email", "Abcdef1!"))
        .await;

    assert!(matches!(result, Err(Error::AuthError(AuthError::InvalidEmail))));

    Ok(())
}
