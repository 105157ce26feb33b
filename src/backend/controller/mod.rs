//! Entry points called by the views.
//!
//! Every function takes the [`AppState`](crate::backend::model::app::AppState)
//! and, when acting for a user, the logged-in
//! [`Session`](crate::model::user::Session). Results are
//! [`ApiResult`](crate::model::api::ApiResult)s: a confirmation message with
//! data, or an [`ErrorDto`](crate::model::api::ErrorDto) safe to display.

pub mod admin;
pub mod auth;
pub mod pokemon;
pub mod profile;
pub mod team;
pub mod util;
