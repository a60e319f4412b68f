//! Client for the users endpoint behind the directory widget.

use model::{FetchResolution, UserRecord};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::FetchError;

/// Read-only client for a JSON array of [`UserRecord`]s.
#[derive(Clone, Debug)]
pub struct UsersClient {
    http: reqwest::Client,
    endpoint: String,
}

impl UsersClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the whole batch of users.
    ///
    /// Resolves to [`FetchError::Cancelled`] as soon as `cancel` fires, even if
    /// the response is already on its way; a cancelled call never yields data.
    pub async fn fetch_users(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<UserRecord>, FetchError> {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("users fetch from {} cancelled", self.endpoint);
                Err(FetchError::Cancelled)
            }
            result = self.request() => result,
        }
    }

    async fn request(&self) -> Result<Vec<UserRecord>, FetchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!("users endpoint {} answered {}", self.endpoint, status);
            return Err(FetchError::Status(status));
        }

        let users: Vec<UserRecord> = response.json().await.map_err(FetchError::Decode)?;
        debug!("fetched {} users", users.len());
        Ok(users)
    }
}

/// Turn a fetch result into the state transition the directory applies.
///
/// Once `cancel` has fired the result is discarded, even a successful one
/// that arrived before the cancellation was noticed.
pub fn into_resolution(
    result: Result<Vec<UserRecord>, FetchError>,
    cancel: &CancellationToken,
) -> FetchResolution {
    if cancel.is_cancelled() {
        return FetchResolution::Cancelled;
    }
    match result {
        Ok(users) => FetchResolution::Loaded(users),
        Err(FetchError::Cancelled) => FetchResolution::Cancelled,
        Err(e) => FetchResolution::Failed(e.to_string()),
    }
}
