use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport, timeout, decode or non-success status error from reqwest.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// The upstream API answered 404 for the requested resource.
    #[error("Resource not found: {0}")]
    NotFound(String),
    /// The client could not be constructed.
    #[error("Invalid client configuration: {0}")]
    BuilderError(String),
}

impl Error {
    /// Whether the failure is likely to go away on its own.
    ///
    /// Connection failures, timeouts and 5xx answers are transient; 4xx answers
    /// and malformed bodies are not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::ReqwestError(err) => match err.status() {
                Some(status) => status.is_server_error(),
                None => err.is_connect() || err.is_timeout() || err.is_request(),
            },
            Self::NotFound(_) => false,
            Self::BuilderError(_) => false,
        }
    }
}
