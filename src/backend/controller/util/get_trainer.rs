use crate::{
    backend::{
        data::trainer::TrainerRepository,
        error::{profile::ProfileError, Error},
        model::app::AppState,
    },
    model::user::Session,
};

/// Resolves the trainer ID of the logged-in user
///
/// # Returns
/// - `Ok(i32)`: Trainer ID of the session's user
/// - `Err(Error::ProfileError(ProfileError::NoTrainer))`: User has not saved a trainer profile yet
/// - `Err(Error)`: Database failure
pub async fn get_trainer_id(state: &AppState, session: &Session) -> Result<i32, Error> {
    let Some((trainer, _)) = TrainerRepository::new(&state.db)
        .get_by_user_id(session.user_id)
        .await?
    else {
        return Err(ProfileError::NoTrainer.into());
    };

    Ok(trainer.id)
}
