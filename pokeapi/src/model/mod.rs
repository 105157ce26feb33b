//! Raw response shapes, limited to the fields the application reads.

pub mod evolution;
pub mod pokemon;
pub mod resource;
pub mod species;
