//! Failure taxonomy for REST calls.
//!
//! Views collapse every variant to one displayed string; the variants exist so
//! the login form can surface a server-supplied message and tests can assert
//! which path failed.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("No access token provided")]
    MissingToken,
    #[error("{0}")]
    Network(String),
    #[error("Request failed with status code {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message the server attached to a non-2xx response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
