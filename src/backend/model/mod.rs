//! Backend state and conversions between database rows and DTOs.

pub mod app;
pub mod team;
