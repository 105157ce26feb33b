//! Input validation for registration and profile forms.

use std::sync::LazyLock;

use regex::Regex;

use crate::backend::{config::SecurityConfig, error::auth::AuthError};

/// Characters accepted as the "special character" of a password.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{4,20}$").unwrap());

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// 4 to 20 ASCII letters, digits or underscores.
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_RE.is_match(username)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check password strength, reporting the first rule that fails.
///
/// Rules in order: minimum length, uppercase, lowercase, digit, special
/// character (when `require_special_char`).
pub fn validate_password(password: &str, policy: &SecurityConfig) -> Result<(), AuthError> {
    if password.chars().count() < policy.min_password_length {
        return Err(AuthError::PasswordTooShort(policy.min_password_length));
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(AuthError::PasswordMissingUppercase);
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(AuthError::PasswordMissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AuthError::PasswordMissingDigit);
    }
    if policy.require_special_char && !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(AuthError::PasswordMissingSpecial);
    }

    Ok(())
}
