//! Render-time gate.
//!
//! Pure and synchronous, re-evaluated on every render. Unlike the route
//! guard it never redirects and never refreshes; it only toggles whether
//! gated content or its fallback is shown.

use std::sync::Arc;

use atrium_auth::{PermissionEvaluator, SessionStore, matches_role};

use crate::route::AccessRequirement;

#[derive(Clone)]
pub struct AccessGate {
    store: Arc<SessionStore>,
    evaluator: PermissionEvaluator,
}

impl AccessGate {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self {
            evaluator: PermissionEvaluator::new(store.clone()),
            store,
        }
    }

    /// True iff (no role required OR the user's roles match) AND (no
    /// permission required OR the permission is granted).
    pub fn can_render(&self, requirement: &AccessRequirement) -> bool {
        if let Some(role) = &requirement.role {
            let state = self.store.state();
            let roles = state.user.as_ref().and_then(|u| u.roles());
            if !matches_role(roles, role) {
                return false;
            }
        }
        if let Some(code) = &requirement.permission {
            if !self.evaluator.has_permission(code) {
                return false;
            }
        }
        true
    }

    /// Content when the requirement passes, else the fallback (default:
    /// nothing).
    pub fn select<T>(&self, requirement: &AccessRequirement, content: T, fallback: Option<T>) -> Option<T> {
        if self.can_render(requirement) {
            Some(content)
        } else {
            fallback
        }
    }
}
