pub mod evolution;
pub mod pokemon;
pub mod species;
pub mod sprite;
pub mod types;
