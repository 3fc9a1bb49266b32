//! Token refresh collaborator boundary.

use async_trait::async_trait;
use thiserror::Error;

/// Failure during a token refresh exchange.
///
/// Handled only by the route guard, which reacts by clearing the session and
/// redirecting to sign-in.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RefreshError {
    #[error("refresh failed: network: {0}")]
    Network(String),

    #[error("refresh rejected by server: {0}")]
    Rejected(String),

    #[error("refresh response malformed: {0}")]
    MalformedResponse(String),
}

/// External auth service exchanging the refresh token for a new token pair.
///
/// On success the implementation must have called `SessionStore::set_auth`
/// with the rotated pair before returning. The exchange rotates the refresh
/// token, so it is not idempotent; the guard serializes calls.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    async fn refresh(&self) -> Result<(), RefreshError>;
}
