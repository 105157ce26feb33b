mod update_role {
    use pokedex::{
        backend::{
            error::{admin::AdminError, Error},
            service::{admin::AdminService, profile::ProfileService},
        },
        model::user::Role,
    };
    use pokedex_test_utils::prelude::*;

    use crate::util::test_config;

    /// Expect the new role to show up on the profile
    #[tokio::test]
    async fn promotes_user() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let admin = test.user().insert_user("oak", "admin").await?;
        let user = test.user().insert_user("ash_k", "user").await?;
        let config = test_config();

        AdminService::new(&test.db)
            .update_role(admin.id, user.id, "admin")
            .await
            .unwrap();

        let profile = ProfileService::new(&test.db, &config.security)
            .get_profile(user.id)
            .await
            .unwrap();
        assert_eq!(profile.role, Role::Admin);

        Ok(())
    }

    /// Expect roles other than `user` and `admin` to be refused
    #[tokio::test]
    async fn rejects_unknown_role() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let admin = test.user().insert_user("oak", "admin").await?;
        let user = test.user().insert_user("ash_k", "user").await?;

        let result = AdminService::new(&test.db)
            .update_role(admin.id, user.id, "champion")
            .await;

        assert!(matches!(
            result,
            Err(Error::AdminError(AdminError::InvalidRole(ref role))) if role == "champion"
        ));

        Ok(())
    }

    /// Expect an admin to be unable to demote themselves
    #[tokio::test]
    async fn refuses_self_demotion() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let admin = test.user().insert_user("oak", "admin").await?;

        let result = AdminService::new(&test.db)
            .update_role(admin.id, admin.id, "user")
            .await;

        assert!(matches!(result, Err(Error::AdminError(AdminError::SelfDemotion))));

        Ok(())
    }

    /// Expect UserNotFound for an unknown id
    #[tokio::test]
    async fn unknown_user() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let admin = test.user().insert_user("oak", "admin").await?;

        let result = AdminService::new(&test.db)
            .update_role(admin.id, admin.id + 100, "user")
            .await;

        assert!(matches!(
            result,
            Err(Error::AdminError(AdminError::UserNotFound(_)))
        ));

        Ok(())
    }
}

mod delete_user {
    use pokedex::backend::{
        error::{admin::AdminError, Error},
        service::admin::AdminService,
    };
    use pokedex_test_utils::prelude::*;
    use sea_orm::{EntityTrait, PaginatorTrait};

    /// Expect the user and all of their rows to go while others stay
    #[tokio::test]
    async fn cascades_to_dependent_rows() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let admin = test.user().insert_user("oak", "admin").await?;
        let (ash, ash_trainer) = test.user().insert_user_with_trainer("ash_k").await?;
        let (misty, misty_trainer) = test.user().insert_user_with_trainer("misty").await?;
        let now = chrono::Utc::now().naive_utc();
        test.team().insert_entry(ash_trainer.id, 25, "Pikachu").await?;
        test.team().insert_entry(misty_trainer.id, 121, "Starmie").await?;
        test.team().insert_search(ash.id, "pikachu", now).await?;
        test.team().insert_search(misty.id, "starmie", now).await?;

        AdminService::new(&test.db)
            .delete_user(admin.id, ash.id)
            .await
            .unwrap();

        assert_eq!(entity::prelude::User::find().count(&test.db).await?, 2);
        assert_eq!(entity::prelude::Trainer::find().count(&test.db).await?, 1);
        assert_eq!(entity::prelude::TeamPokemon::find().count(&test.db).await?, 1);
        assert_eq!(entity::prelude::SearchHistory::find().count(&test.db).await?, 1);

        Ok(())
    }

    /// Expect an admin to be unable to delete their own account here
    #[tokio::test]
    async fn refuses_self_deletion() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let admin = test.user().insert_user("oak", "admin").await?;

        let result = AdminService::new(&test.db).delete_user(admin.id, admin.id).await;

        assert!(matches!(result, Err(Error::AdminError(AdminError::SelfDeletion))));
        assert_eq!(entity::prelude::User::find().count(&test.db).await?, 1);

        Ok(())
    }

    /// Expect UserNotFound for an unknown id
    #[tokio::test]
    async fn unknown_user() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let admin = test.user().insert_user("oak", "admin").await?;

        let result = AdminService::new(&test.db)
            .delete_user(admin.id, admin.id + 100)
            .await;

        assert!(matches!(
            result,
            Err(Error::AdminError(AdminError::UserNotFound(_)))
        ));

        Ok(())
    }
}

mod get_user_details {
    use pokedex::backend::service::admin::AdminService;
    use pokedex_test_utils::prelude::*;

    /// Expect trainer fields, totals and recent searches newest first
    #[tokio::test]
    async fn returns_details() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let (ash, trainer) = test.user().insert_user_with_trainer("ash_k").await?;
        test.team().insert_entry(trainer.id, 25, "Pikachu").await?;
        let now = chrono::Utc::now().naive_utc();
        test.team()
            .insert_search(ash.id, "bulbasaur", now - chrono::Duration::minutes(5))
            .await?;
        test.team().insert_search(ash.id, "pikachu", now).await?;

        let details = AdminService::new(&test.db)
            .get_user_details(ash.id)
            .await
            .unwrap();

        assert_eq!(details.user.username, "ash_k");
        assert_eq!(details.user.trainer_name.as_deref(), Some("Trainer ash_k"));
        assert_eq!(details.user.total_pokemon, 1);
        assert_eq!(details.user.total_searches, 2);
        assert_eq!(details.trainer_region.as_deref(), Some("Kanto"));
        assert_eq!(details.recent_searches, vec!["pikachu", "bulbasaur"]);

        Ok(())
    }
}
