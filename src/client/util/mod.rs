pub mod format;
pub mod session;
