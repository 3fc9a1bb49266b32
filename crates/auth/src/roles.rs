//! Role references and role matching.
//!
//! The backend emits roles in two shapes: a bare code string, or an object
//! carrying a `code` field plus display metadata. Both are normalized
//! through [`RoleRef::code`] before any comparison.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A role granted to a user, as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleRef {
    /// Bare role code, e.g. `"admin"`.
    Code(String),

    /// Role object; only `code` matters for matching.
    Object {
        code: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
}

impl RoleRef {
    pub fn code(&self) -> &str {
        match self {
            RoleRef::Code(code) => code,
            RoleRef::Object { code, .. } => code,
        }
    }
}

/// Whether the user's roles satisfy a required role code.
///
/// A user with no roles at all never matches.
pub fn matches_role(roles: Option<&[RoleRef]>, required: &str) -> bool {
    match roles {
        Some(roles) => roles.iter().any(|r| r.code() == required),
        None => false,
    }
}
