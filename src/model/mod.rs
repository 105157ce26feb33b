pub mod admin;
pub mod api;
pub mod pokemon;
pub mod team;
pub mod user;
