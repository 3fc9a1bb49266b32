//! Decoded credential claims (transport-agnostic).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims carried by a decoded credential.
///
/// This is the minimal set the console cares about once a token has been
/// decoded. Signature verification is intentionally outside this crate; the
/// issuing service is the authority, the client only reads timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject / user identifier.
    #[serde(default)]
    pub sub: Option<String>,

    /// Expiry, seconds since epoch.
    #[serde(default)]
    pub exp: Option<i64>,

    /// Issued-at, seconds since epoch.
    #[serde(default)]
    pub iat: Option<i64>,

    /// Anything else the issuer put in the token (tenant, session id, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Look up a custom claim by name.
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}
