//! Authenticated user model.

use serde::{Deserialize, Serialize};

use atrium_core::{TenantId, UserId};

use crate::roles::RoleRef;

/// The authenticated user, as delivered by the auth service at login or
/// refresh.
///
/// `roles` is `None` when the backend omits the field entirely; role
/// matching treats that the same as an empty list (never matches).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    #[serde(default)]
    pub tenant_id: Option<TenantId>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default)]
    pub roles: Option<Vec<RoleRef>>,
}

impl User {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            tenant_id: None,
            username: None,
            email: None,
            avatar: None,
            roles: None,
        }
    }

    pub fn with_roles(mut self, roles: Vec<RoleRef>) -> Self {
        self.roles = Some(roles);
        self
    }

    pub fn roles(&self) -> Option<&[RoleRef]> {
        self.roles.as_deref()
    }
}
