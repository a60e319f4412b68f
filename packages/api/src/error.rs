//! Errors surfaced by the directory data source.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("Failed to fetch users")]
    Status(reqwest::StatusCode),

    /// The request never produced a response.
    #[error("Failed to fetch users: {0}")]
    Transport(#[source] reqwest::Error),

    /// The body was not a list of users.
    #[error("Failed to read users: {0}")]
    Decode(#[source] reqwest::Error),

    /// The caller cancelled the request. Not a failure to show anyone.
    #[error("request cancelled")]
    Cancelled,
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}
