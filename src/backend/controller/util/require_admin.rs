use crate::{
    backend::error::{admin::AdminError, Error},
    model::user::Session,
};

/// Rejects sessions without the admin role
pub fn require_admin(session: &Session) -> Result<(), Error> {
    if !session.is_admin() {
        return Err(AdminError::Forbidden(session.user_id).into());
    }

    Ok(())
}
