//! Reusable helpers: log channels, input validation and text formatting.

pub mod logging;
pub mod rotating_file;
pub mod text;
pub mod validation;
