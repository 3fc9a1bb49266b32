use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Permission code identifying a single grantable capability.
///
/// Codes follow the `resource:action` convention (e.g. `"user:view"`) but
/// are opaque at this layer: membership in the granted set is plain string
/// equality, with no structural validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        Self(code.into())
    }

    /// Build a `resource:action` code.
    pub fn resource_action(resource: &str, action: &str) -> Self {
        Self(Cow::Owned(format!("{resource}:{action}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
