//! Credential codec.
//!
//! Decodes the compact three-segment credential format into [`Claims`].
//! The signature segment is never inspected, let alone verified; the
//! client only needs the claims to schedule refreshes.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::claims::Claims;
use crate::error::CredentialError;

/// Decode a credential string into its claims.
///
/// - No IO
/// - No panics
/// - No signature verification
pub fn decode(credential: &str) -> Result<Claims, CredentialError> {
    let segments: Vec<&str> = credential.split('.').collect();
    if segments.len() != 3 {
        return Err(CredentialError::malformed(format!(
            "expected 3 segments, got {}",
            segments.len()
        )));
    }

    // Issuers disagree on padding; the URL-safe alphabet does not.
    let payload = segments[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| CredentialError::malformed(format!("claims segment: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| CredentialError::malformed(format!("claims payload: {e}")))
}
