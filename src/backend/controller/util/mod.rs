pub mod get_trainer;
pub mod require_admin;
