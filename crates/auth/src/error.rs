//! Credential error model.

use thiserror::Error;

/// Failures while decoding a credential string.
///
/// These are never surfaced to the user: lifecycle checks convert them to
/// the fail-safe answer (expired / no access) instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The credential does not have exactly three dot-separated segments,
    /// or its claims segment is not base64url-encoded JSON.
    #[error("malformed credential: {0}")]
    Malformed(String),
}

impl CredentialError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}
