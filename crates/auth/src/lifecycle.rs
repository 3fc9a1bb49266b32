//! Token lifecycle policy.
//!
//! Every undecidable case (missing credential, decode failure, absent `exp`)
//! is answered as "expired / nothing remaining". A broken credential must
//! never look valid; an unnecessary refresh is the acceptable failure mode.
//!
//! All predicates take `now` explicitly so callers (and tests) control the
//! clock; the guard layer passes `Utc::now()`.

use chrono::{DateTime, Utc};

use crate::token::decode;

/// Refresh window used by the route guard: a token expiring within this many
/// seconds is refreshed proactively.
pub const DEFAULT_REFRESH_WINDOW_SECS: i64 = 300;

fn expiry_secs(credential: Option<&str>) -> Option<i64> {
    let credential = credential?;
    decode(credential).ok()?.exp
}

/// Whether the credential is expired at `now`.
///
/// Missing or undecodable credentials, and credentials without an `exp`
/// claim, are expired.
pub fn is_expired(credential: Option<&str>, now: DateTime<Utc>) -> bool {
    match expiry_secs(credential) {
        Some(exp) => exp < now.timestamp(),
        None => true,
    }
}

/// Whether the credential expires within `window_secs` of `now`.
///
/// Same fail-safe rules as [`is_expired`].
pub fn is_expiring_soon(credential: Option<&str>, window_secs: i64, now: DateTime<Utc>) -> bool {
    match expiry_secs(credential) {
        Some(exp) => exp - now.timestamp() < window_secs,
        None => true,
    }
}

/// Seconds of validity left at `now`; 0 for anything expired or undecodable.
pub fn remaining_seconds(credential: Option<&str>, now: DateTime<Utc>) -> i64 {
    match expiry_secs(credential) {
        Some(exp) => (exp - now.timestamp()).max(0),
        None => 0,
    }
}
