use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a failed operation, used by views to decide how to present it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed input, rejected before any I/O.
    Validation,
    /// Wrong credentials or no active session.
    Unauthorized,
    /// The session lacks the role required for the operation.
    Forbidden,
    NotFound,
    /// Username or email already in use.
    Conflict,
    /// Too many failed logins; the account is temporarily locked.
    Locked,
    /// A business rule refused the operation (team full, last team member...).
    Rejected,
    /// Infrastructure failure; the message is generic.
    Internal,
}

/// The response when an operation fails
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDto {
    pub kind: ErrorKind,
    /// The error message
    pub error: String,
}

impl ErrorDto {
    pub fn new(kind: ErrorKind, error: impl Into<String>) -> Self {
        Self {
            kind,
            error: error.into(),
        }
    }
}

impl fmt::Display for ErrorDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error)
    }
}

/// The response when an operation succeeds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reply<T> {
    /// User facing confirmation message
    pub message: String,
    pub data: T,
}

impl<T> Reply<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Return type of every controller function.
pub type ApiResult<T> = Result<Reply<T>, ErrorDto>;
