use sea_orm::DatabaseConnection;

use crate::{
    backend::{
        config::SecurityConfig,
        data::{
            admin::AdminRepository,
            team::TeamRepository,
            trainer::{TrainerRepository, TrainerUpdate},
            user::UserRepository,
        },
        error::{auth::AuthError, profile::ProfileError, Error},
        service::{
            auth::password::{hash_password, verify_password},
            team::stats::trainer_stats,
        },
        util::{
            logging::{log_security_event, log_user_activity},
            validation::{is_valid_email, validate_password},
        },
    },
    model::{
        team::{TeamEntryDto, TrainerStatsDto},
        user::{ChangePasswordForm, ProfileDto, ProfileForm, Role, TrainerDto},
    },
};

const MIN_TRAINER_NAME: usize = 3;
const MIN_REGION: usize = 2;
const AGE_RANGE: std::ops::RangeInclusive<i32> = 8..=100;

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
    security: &'a SecurityConfig,
}

impl<'a> ProfileService<'a> {
    /// Creates a new instance of [`ProfileService`]
    pub fn new(db: &'a DatabaseConnection, security: &'a SecurityConfig) -> Self {
        Self { db, security }
    }

    /// Account, role and trainer (with team size) of a user
    pub async fn get_profile(&self, user_id: i32) -> Result<ProfileDto, Error> {
        let Some((user, role)) = UserRepository::new(self.db).get_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let role = match role {
            Some(role) => role
                .name
                .parse::<Role>()
                .map_err(|_| AuthError::RoleMissing(role.name.clone()))?,
            None => return Err(AuthError::RoleMissing(user.role_id.to_string()).into()),
        };

        let trainer = TrainerRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?
            .map(|(trainer, pokemon_count)| TrainerDto {
                id: trainer.id,
                name: trainer.name,
                age: trainer.age,
                region: trainer.region,
                pokemon_count,
                created_at: trainer.created_at,
            });

        Ok(ProfileDto {
            user_id: user.id,
            username: user.username,
            email: user.email,
            role,
            created_at: user.created_at,
            trainer,
        })
    }

    /// Apply the set fields of `form`
    ///
    /// The trainer is created on the first save that carries trainer fields,
    /// which then must include a name. Later saves update only the given
    /// fields.
    pub async fn update_profile(&self, user_id: i32, form: &ProfileForm) -> Result<ProfileDto, Error> {
        let email = non_empty(form.email.as_deref());
        let name = non_empty(form.trainer_name.as_deref());
        let region = non_empty(form.region.as_deref());

        if email.is_none() && name.is_none() && form.age.is_none() && region.is_none() {
            return Err(ProfileError::NothingToUpdate.into());
        }
        if email.is_some_and(|email| !is_valid_email(email)) {
            return Err(ProfileError::InvalidEmail.into());
        }
        if name.is_some_and(|name| name.chars().count() < MIN_TRAINER_NAME) {
            return Err(ProfileError::TrainerNameTooShort.into());
        }
        if form.age.is_some_and(|age| !AGE_RANGE.contains(&age)) {
            return Err(ProfileError::InvalidAge.into());
        }
        if region.is_some_and(|region| region.chars().count() < MIN_REGION) {
            return Err(ProfileError::RegionTooShort.into());
        }

        let user_repo = UserRepository::new(self.db);
        let trainer_repo = TrainerRepository::new(self.db);

        if let Some(email) = email {
            if user_repo.email_taken_by_other(email, user_id).await? {
                return Err(ProfileError::EmailTaken.into());
            }
        }

        let update = TrainerUpdate {
            name: name.map(str::to_string),
            age: form.age,
            region: region.map(str::to_string),
        };

        let existing = trainer_repo.get_by_user_id(user_id).await?;
        if existing.is_none() && !update.is_empty() && update.name.is_none() {
            return Err(ProfileError::TrainerNameRequired.into());
        }

        if let Some(email) = email {
            user_repo
                .update_email(user_id, email)
                .await?
                .ok_or(AuthError::UserNotInDatabase(user_id))?;
        }

        match existing {
            Some((trainer, _)) if !update.is_empty() => {
                trainer_repo.update(trainer.id, update).await?;
            }
            None if !update.is_empty() => {
                trainer_repo
                    .create(
                        user_id,
                        update.name.as_deref().unwrap_or_default(),
                        update.age,
                        update.region.as_deref(),
                    )
                    .await?;
            }
            _ => {}
        }

        log_user_activity(user_id, "update_profile", "Profile updated");

        self.get_profile(user_id).await
    }

    /// Replace the password after checking the current one
    ///
    /// Checks run in order: required fields, confirmation match, strength
    /// rules, current password.
    pub async fn change_password(&self, user_id: i32, form: &ChangePasswordForm) -> Result<(), Error> {
        if form.current_password.is_empty()
            || form.new_password.is_empty()
            || form.confirm_password.is_empty()
        {
            return Err(AuthError::MissingFields.into());
        }
        if form.new_password != form.confirm_password {
            return Err(AuthError::PasswordMismatch.into());
        }
        validate_password(&form.new_password, self.security)?;

        self.verify_user_password(user_id, &form.current_password)
            .await?;

        let password_hash = hash_password(&form.new_password)?;
        UserRepository::new(self.db)
            .update_password(user_id, &password_hash)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        log_user_activity(user_id, "change_password", "Password updated");

        Ok(())
    }

    /// Delete the account with its trainer, team and search history
    pub async fn delete_account(&self, user_id: i32, password: &str) -> Result<(), Error> {
        if password.is_empty() {
            return Err(AuthError::MissingFields.into());
        }

        self.verify_user_password(user_id, password).await?;

        if !AdminRepository::new(self.db).delete_user(user_id).await? {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        }

        log_user_activity(user_id, "delete_account", "Account deleted by owner");

        Ok(())
    }

    /// Profile statistics of the user's team
    pub async fn get_trainer_stats(&self, user_id: i32) -> Result<TrainerStatsDto, Error> {
        let Some((trainer, _)) = TrainerRepository::new(self.db).get_by_user_id(user_id).await?
        else {
            return Err(ProfileError::NoTrainer.into());
        };

        let entries = TeamRepository::new(self.db)
            .get_by_trainer(trainer.id)
            .await?
            .into_iter()
            .map(TeamEntryDto::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(trainer_stats(&entries))
    }

    async fn verify_user_password(&self, user_id: i32, password: &str) -> Result<(), Error> {
        let Some((user, _)) = UserRepository::new(self.db).get_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !verify_password(password, &user.password_hash)? {
            log_security_event("wrong_password", Some(user_id), None);

            return Err(AuthError::WrongPassword.into());
        }

        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
