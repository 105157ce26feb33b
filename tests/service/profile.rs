mod update_profile {
    use pokedex::{
        backend::{
            error::{profile::ProfileError, Error},
            service::profile::ProfileService,
        },
        model::user::ProfileForm,
    };
    use pokedex_test_utils::prelude::*;

    use crate::util::test_config;

    fn trainer_form(name: &str, age: Option<i32>, region: &str) -> ProfileForm {
        ProfileForm {
            trainer_name: Some(name.to_string()),
            age,
            region: Some(region.to_string()),
            ..Default::default()
        }
    }

    /// Expect the first save with a name to create the trainer
    #[tokio::test]
    async fn creates_trainer_on_first_save() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user("ash_k", "user").await?;
        let config = test_config();

        let profile = ProfileService::new(&test.db, &config.security)
            .update_profile(user.id, &trainer_form("Ash", Some(10), "Kanto"))
            .await
            .unwrap();

        let trainer = profile.trainer.unwrap();
        assert_eq!(trainer.name, "Ash");
        assert_eq!(trainer.age, Some(10));
        assert_eq!(trainer.region.as_deref(), Some("Kanto"));
        assert_eq!(trainer.pokemon_count, 0);

        Ok(())
    }

    /// Expect trainer fields without a name to be refused before the trainer exists
    #[tokio::test]
    async fn requires_name_for_new_trainer() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user("ash_k", "user").await?;
        let config = test_config();

        let form = ProfileForm {
            region: Some("Kanto".to_string()),
            ..Default::default()
        };
        let result = ProfileService::new(&test.db, &config.security)
            .update_profile(user.id, &form)
            .await;

        assert!(matches!(
            result,
            Err(Error::ProfileError(ProfileError::TrainerNameRequired))
        ));

        Ok(())
    }

    /// Expect later saves to change only the given fields
    #[tokio::test]
    async fn updates_only_given_fields() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let (user, _) = test.user().insert_user_with_trainer("ash_k").await?;
        let config = test_config();

        let form = ProfileForm {
            age: Some(11),
            ..Default::default()
        };
        let profile = ProfileService::new(&test.db, &config.security)
            .update_profile(user.id, &form)
            .await
            .unwrap();

        let trainer = profile.trainer.unwrap();
        assert_eq!(trainer.name, "Trainer ash_k");
        assert_eq!(trainer.age, Some(11));
        assert_eq!(trainer.region.as_deref(), Some("Kanto"));

        Ok(())
    }

    /// Expect each field rule to be enforced
    #[tokio::test]
    async fn validates_fields() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let (user, _) = test.user().insert_user_with_trainer("ash_k").await?;
        let config = test_config();
        let service = ProfileService::new(&test.db, &config.security);

        let cases = [
            (
                ProfileForm {
                    email: Some("nope".to_string()),
                    ..Default::default()
                },
                ProfileError::InvalidEmail,
            ),
            (trainer_form("Al", None, "Kanto"), ProfileError::TrainerNameTooShort),
            (trainer_form("Ash", Some(7), "Kanto"), ProfileError::InvalidAge),
            (trainer_form("Ash", Some(101), "Kanto"), ProfileError::InvalidAge),
            (trainer_form("Ash", Some(10), "K"), ProfileError::RegionTooShort),
            (ProfileForm::default(), ProfileError::NothingToUpdate),
        ];

        for (form, expected) in cases {
            match service.update_profile(user.id, &form).await {
                Err(Error::ProfileError(err)) => assert_eq!(err, expected),
                other => panic!("expected {expected:?}, got {other:?}"),
            }
        }

        assert!(service
            .update_profile(user.id, &trainer_form("Ash", Some(8), "Jo"))
            .await
            .is_ok());
        assert!(service
            .update_profile(user.id, &trainer_form("Ash", Some(100), "Johto"))
            .await
            .is_ok());

        Ok(())
    }

    /// Expect an email used by another account to be refused
    #[tokio::test]
    async fn rejects_email_of_other_account() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let ash = test.user().insert_user("ash_k", "user").await?;
        let misty = test.user().insert_user("misty", "user").await?;
        let config = test_config();
        let service = ProfileService::new(&test.db, &config.security);

        let taken = ProfileForm {
            email: Some(misty.email.clone()),
            ..Default::default()
        };
        let own = ProfileForm {
            email: Some(ash.email.clone()),
            ..Default::default()
        };

        assert!(matches!(
            service.update_profile(ash.id, &taken).await,
            Err(Error::ProfileError(ProfileError::EmailTaken))
        ));
        assert!(service.update_profile(ash.id, &own).await.is_ok());

        Ok(())
    }
}

mod change_password {
    use pokedex::{
        backend::{
            error::{auth::AuthError, Error},
            service::{auth::AuthService, profile::ProfileService},
        },
        model::user::ChangePasswordForm,
    };
    use pokedex_test_utils::prelude::*;

    use crate::util::{app_state, register, TEST_PASSWORD};

    fn form(current: &str, new: &str, confirm: &str) -> ChangePasswordForm {
        ChangePasswordForm {
            current_password: current.to_string(),
            new_password: new.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    /// Expect the new password to work for login afterwards
    #[tokio::test]
    async fn replaces_password() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let state = app_state(&test);
        let session = register(&state, "ash_k").await;

        ProfileService::new(&state.db, &state.config.security)
            .change_password(session.user_id, &form(TEST_PASSWORD, "Pikachu1!", "Pikachu1!"))
            .await
            .unwrap();

        let auth = AuthService::new(&state.db, &state.throttle, &state.config.security);
        let now = chrono::Utc::now().naive_utc();
        assert!(auth.login("ash_k", "Pikachu1!", now).await.is_ok());
        assert!(auth.login("ash_k", TEST_PASSWORD, now).await.is_err());

        Ok(())
    }

    /// Expect checks in order: mismatch, strength, current password
    #[tokio::test]
    async fn validates_in_order() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let state = app_state(&test);
        let session = register(&state, "ash_k").await;
        let service = ProfileService::new(&state.db, &state.config.security);

        let mismatch = service
            .change_password(session.user_id, &form("wrong", "abc", "abd"))
            .await;
        let weak = service
            .change_password(session.user_id, &form("wrong", "abc", "abc"))
            .await;
        let wrong_current = service
            .change_password(session.user_id, &form("wrong", "Pikachu1!", "Pikachu1!"))
            .await;

        assert!(matches!(mismatch, Err(Error::AuthError(AuthError::PasswordMismatch))));
        assert!(matches!(weak, Err(Error::AuthError(AuthError::PasswordTooShort(8)))));
        assert!(matches!(wrong_current, Err(Error::AuthError(AuthError::WrongPassword))));

        Ok(())
    }
}

mod delete_account {
    use pokedex::backend::{
        error::{auth::AuthError, Error},
        service::profile::ProfileService,
    };
    use pokedex_test_utils::prelude::*;
    use sea_orm::{EntityTrait, PaginatorTrait};

    use crate::util::{app_state, register, TEST_PASSWORD};

    /// Expect the account, trainer, team and history to be removed
    #[tokio::test]
    async fn removes_account_and_data() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let state = app_state(&test);
        let session = register(&state, "ash_k").await;
        let trainer = test.user().insert_trainer(session.user_id, "Ash").await?;
        test.team().insert_entry(trainer.id, 25, "Pikachu").await?;
        test.team()
            .insert_search(session.user_id, "pikachu", chrono::Utc::now().naive_utc())
            .await?;

        ProfileService::new(&state.db, &state.config.security)
            .delete_account(session.user_id, TEST_PASSWORD)
            .await
            .unwrap();

        assert_eq!(entity::prelude::User::find().count(&test.db).await?, 0);
        assert_eq!(entity::prelude::Trainer::find().count(&test.db).await?, 0);
        assert_eq!(entity::prelude::TeamPokemon::find().count(&test.db).await?, 0);
        assert_eq!(entity::prelude::SearchHistory::find().count(&test.db).await?, 0);

        Ok(())
    }

    /// Expect a wrong password to leave the account in place
    #[tokio::test]
    async fn requires_password() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let state = app_state(&test);
        let session = register(&state, "ash_k").await;
        let service = ProfileService::new(&state.db, &state.config.security);

        let wrong = service.delete_account(session.user_id, "Wrong1!!").await;
        let empty = service.delete_account(session.user_id, "").await;

        assert!(matches!(wrong, Err(Error::AuthError(AuthError::WrongPassword))));
        assert!(matches!(empty, Err(Error::AuthError(AuthError::MissingFields))));
        assert_eq!(entity::prelude::User::find().count(&test.db).await?, 1);

        Ok(())
    }
}

mod get_trainer_stats {
    use pokedex::backend::{
        error::{profile::ProfileError, Error},
        service::profile::ProfileService,
    };
    use pokedex_test_utils::prelude::*;

    use crate::util::test_config;

    /// Expect totals over the stored team
    #[tokio::test]
    async fn summarises_team() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let (user, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
        test.team().insert_entry(trainer.id, 25, "Pikachu").await?;
        test.team().insert_entry(trainer.id, 1, "Bulbasaur").await?;
        let config = test_config();

        let stats = ProfileService::new(&test.db, &config.security)
            .get_trainer_stats(user.id)
            .await
            .unwrap();

        assert_eq!(stats.total_pokemon, 2);
        assert_eq!(stats.total_base_experience, 128);
        assert_eq!(stats.favorite_types, vec![("normal".to_string(), 2)]);
        assert_eq!(stats.average_stats.attack, 50.0);

        Ok(())
    }

    /// Expect NoTrainer before the trainer profile exists
    #[tokio::test]
    async fn requires_trainer() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user("ash_k", "user").await?;
        let config = test_config();

        let result = ProfileService::new(&test.db, &config.security)
            .get_trainer_stats(user.id)
            .await;

        assert!(matches!(result, Err(Error::ProfileError(ProfileError::NoTrainer))));

        Ok(())
    }
}
