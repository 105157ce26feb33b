//! Values shared by every test context.

/// User agent sent by the test PokéAPI client.
pub static TEST_USER_AGENT: &str = "pokedex-tests/0.1";

/// Domain used for fixture user email addresses.
pub static TEST_EMAIL_DOMAIN: &str = "pokedex.test";

/// Stored in place of a password hash for fixture users.
///
/// Not a valid PHC string; tests that log in register through the auth
/// service instead.
pub static TEST_PASSWORD_HASH: &str = "fixture-password-hash";

/// Role names seeded into every database with user tables.
pub static TEST_ROLES: [&str; 2] = ["user", "admin"];
