//! Permission evaluation against the live session.
//!
//! Every query recomputes from a fresh store snapshot, so answers are always
//! consistent with the most recent `set_auth`/`clear_auth`. Denial is a
//! boolean, never an error.

use std::collections::HashSet;
use std::sync::Arc;

use crate::store::SessionStore;

/// Answers "does the current user hold permission X / any of Y / all of Z".
///
/// - No IO
/// - No panics
/// - No caching beyond what the store already holds
#[derive(Clone)]
pub struct PermissionEvaluator {
    store: Arc<SessionStore>,
}

impl PermissionEvaluator {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    fn granted(&self) -> Option<HashSet<String>> {
        let state = self.store.state();
        if !state.is_authenticated {
            return None;
        }
        Some(
            state
                .permission_codes
                .into_iter()
                .map(|p| p.as_str().to_string())
                .collect(),
        )
    }

    /// True iff authenticated and `code` is in the granted set.
    pub fn has_permission(&self, code: &str) -> bool {
        if code.is_empty() {
            return false;
        }
        match self.granted() {
            Some(granted) => granted.contains(code),
            None => false,
        }
    }

    /// True iff authenticated, `codes` is non-empty, and at least one code is
    /// granted.
    pub fn has_any_permission(&self, codes: &[&str]) -> bool {
        if codes.is_empty() {
            return false;
        }
        match self.granted() {
            Some(granted) => codes.iter().any(|c| granted.contains(*c)),
            None => false,
        }
    }

    /// True iff authenticated, `codes` is non-empty, and every code is
    /// granted.
    pub fn has_all_permissions(&self, codes: &[&str]) -> bool {
        if codes.is_empty() {
            return false;
        }
        match self.granted() {
            Some(granted) => codes.iter().all(|c| granted.contains(*c)),
            None => false,
        }
    }

    /// Sugar for `has_permission("{resource}:{action}")`.
    pub fn has_resource_permission(&self, resource: &str, action: &str) -> bool {
        self.has_permission(&format!("{resource}:{action}"))
    }
}
