//! Pokédex application library.
//!
//! `model` holds the data transfer objects shared between the desktop views and
//! the backend; `backend` holds configuration, persistence, services and the
//! controller functions the views call.

pub mod backend;
pub mod model;
