//! Route-entry gate.
//!
//! On every protected-route entry the guard checks the access token and, when
//! it is dead or dying, drives one refresh through the external collaborator
//! before deciding. Refresh rotates the refresh token, so concurrent route
//! entries must not race: a single-flight mutex serializes them, and a
//! freshness re-check after acquisition lets losers adopt the winner's
//! outcome instead of issuing a second exchange.

use std::sync::{Arc, RwLock};

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use atrium_auth::{
    DEFAULT_REFRESH_WINDOW_SECS, PermissionEvaluator, SessionStore, is_expired, is_expiring_soon,
    matches_role,
};

use crate::refresh::TokenRefresher;
use crate::route::{AccessRequirement, RouteDecision};

/// Observable state of the route-entry gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Valid,
    Refreshing,
    RefreshFailed,
}

pub struct SessionGuard {
    store: Arc<SessionStore>,
    refresher: Arc<dyn TokenRefresher>,
    evaluator: PermissionEvaluator,
    refresh_window_secs: i64,
    state: RwLock<SessionState>,
    refresh_lock: Mutex<()>,
}

impl SessionGuard {
    pub fn new(store: Arc<SessionStore>, refresher: Arc<dyn TokenRefresher>) -> Self {
        Self {
            evaluator: PermissionEvaluator::new(store.clone()),
            store,
            refresher,
            refresh_window_secs: DEFAULT_REFRESH_WINDOW_SECS,
            state: RwLock::new(SessionState::Unauthenticated),
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn with_refresh_window(mut self, window_secs: i64) -> Self {
        self.refresh_window_secs = window_secs;
        self
    }

    /// State left by the most recent `check_route`.
    pub fn state(&self) -> SessionState {
        *self.state.read().unwrap()
    }

    fn set_state(&self, state: SessionState) {
        *self.state.write().unwrap() = state;
    }

    /// Whether either token is absent, or the access token is expired or
    /// inside the refresh window.
    fn needs_refresh(&self) -> bool {
        let access = self.store.access_token();
        let now = Utc::now();
        self.store.refresh_token().is_none()
            || is_expired(access.as_deref(), now)
            || is_expiring_soon(access.as_deref(), self.refresh_window_secs, now)
    }

    /// Evaluate entry into `intended_path`.
    ///
    /// The returned decision is inert data; a caller whose navigation was
    /// superseded simply drops it. An issued refresh is always awaited to
    /// completion so the store is never left half-updated.
    pub async fn check_route(
        &self,
        intended_path: &str,
        requirement: &AccessRequirement,
    ) -> RouteDecision {
        if !self.store.is_authenticated() {
            self.set_state(SessionState::Unauthenticated);
            return RouteDecision::RedirectToSignIn {
                redirect: intended_path.to_string(),
            };
        }

        if self.needs_refresh() {
            self.set_state(SessionState::Refreshing);
            let _flight = self.refresh_lock.lock().await;

            // A concurrent entry may have refreshed (or torn down) the
            // session while we waited for the lock.
            if !self.store.is_authenticated() {
                self.set_state(SessionState::RefreshFailed);
                return RouteDecision::RedirectToSignIn {
                    redirect: intended_path.to_string(),
                };
            }
            if self.needs_refresh() {
                debug!(path = intended_path, "access token dead or dying, refreshing");
                if let Err(e) = self.refresher.refresh().await {
                    warn!(error = %e, "token refresh failed, clearing session");
                    self.store.clear_auth();
                    self.set_state(SessionState::RefreshFailed);
                    return RouteDecision::RedirectToSignIn {
                        redirect: intended_path.to_string(),
                    };
                }
            }
        }

        self.set_state(SessionState::Valid);
        self.check_requirement(requirement)
    }

    fn check_requirement(&self, requirement: &AccessRequirement) -> RouteDecision {
        if let Some(role) = &requirement.role {
            let state = self.store.state();
            let roles = state.user.as_ref().and_then(|u| u.roles());
            if !matches_role(roles, role) {
                return RouteDecision::RedirectForbidden {
                    message: format!("role '{role}' required"),
                };
            }
        }
        if let Some(code) = &requirement.permission {
            if !self.evaluator.has_permission(code) {
                return RouteDecision::RedirectForbidden {
                    message: format!("permission '{code}' required"),
                };
            }
        }
        RouteDecision::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use serde_json::json;

    use atrium_auth::{Permission, RoleRef, User};
    use atrium_core::{MemoryStore, UserId};

    use crate::refresh::RefreshError;

    /// Unsigned credential expiring `delta_secs` from now.
    fn token(delta_secs: i64) -> String {
        let exp = Utc::now().timestamp() + delta_secs;
        let payload = URL_SAFE_NO_PAD.encode(json!({"sub": "u-1", "exp": exp}).to_string());
        format!("h.{payload}.s")
    }

    fn test_user() -> User {
        User::new(UserId::new()).with_roles(vec![RoleRef::Code("manager".to_string())])
    }

    fn login(store: &SessionStore, access: &str) {
        store.set_auth(
            test_user(),
            access,
            "refresh-1",
            vec![Permission::new("user:view")],
        );
    }

    struct MockRefresher {
        store: Arc<SessionStore>,
        calls: AtomicUsize,
        fail: bool,
    }

    impl MockRefresher {
        fn arc(store: Arc<SessionStore>, fail: bool) -> Arc<Self> {
            Arc::new(Self {
                store,
                calls: AtomicUsize::new(0),
                fail,
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TokenRefresher for MockRefresher {
        async fn refresh(&self) -> Result<(), RefreshError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            // Model the network hop so concurrent entries interleave here.
            tokio::task::yield_now().await;
            if self.fail {
                return Err(RefreshError::Rejected("refresh token revoked".to_string()));
            }
            self.store.set_auth(
                test_user(),
                &token(3_600),
                "refresh-2",
                vec![Permission::new("user:view")],
            );
            Ok(())
        }
    }

    fn guard_over(store: Arc<SessionStore>, fail: bool) -> (SessionGuard, Arc<MockRefresher>) {
        let refresher = MockRefresher::arc(store.clone(), fail);
        (SessionGuard::new(store, refresher.clone()), refresher)
    }

    #[tokio::test]
    async fn unauthenticated_entry_redirects_to_sign_in() {
        let store = SessionStore::arc(MemoryStore::arc());
        let (guard, refresher) = guard_over(store, false);

        let decision = guard.check_route("/units/42", &AccessRequirement::none()).await;
        assert_eq!(
            decision,
            RouteDecision::RedirectToSignIn { redirect: "/units/42".to_string() },
        );
        assert_eq!(guard.state(), SessionState::Unauthenticated);
        assert_eq!(refresher.call_count(), 0);
    }

    #[tokio::test]
    async fn healthy_token_allows_entry_without_refresh() {
        let store = SessionStore::arc(MemoryStore::arc());
        login(&store, &token(3_600));
        let (guard, refresher) = guard_over(store, false);

        let decision = guard.check_route("/dashboard", &AccessRequirement::none()).await;
        assert_eq!(decision, RouteDecision::Allow);
        assert_eq!(guard.state(), SessionState::Valid);
        assert_eq!(refresher.call_count(), 0);
    }

    #[tokio::test]
    async fn expired_token_is_refreshed_then_entry_allowed() {
        let store = SessionStore::arc(MemoryStore::arc());
        login(&store, &token(-10));
        let (guard, refresher) = guard_over(store.clone(), false);

        let decision = guard.check_route("/dashboard", &AccessRequirement::none()).await;
        assert_eq!(decision, RouteDecision::Allow);
        assert_eq!(guard.state(), SessionState::Valid);
        assert_eq!(refresher.call_count(), 1);
        assert_eq!(store.refresh_token().as_deref(), Some("refresh-2"));
    }

    #[tokio::test]
    async fn token_inside_refresh_window_is_refreshed() {
        let store = SessionStore::arc(MemoryStore::arc());
        login(&store, &token(DEFAULT_REFRESH_WINDOW_SECS - 30));
        let (guard, refresher) = guard_over(store, false);

        let decision = guard.check_route("/dashboard", &AccessRequirement::none()).await;
        assert_eq!(decision, RouteDecision::Allow);
        assert_eq!(refresher.call_count(), 1);
    }

    #[tokio::test]
    async fn refresh_failure_clears_session_and_redirects() {
        let store = SessionStore::arc(MemoryStore::arc());
        login(&store, &token(-10));
        let (guard, refresher) = guard_over(store.clone(), true);

        let decision = guard.check_route("/leases", &AccessRequirement::none()).await;
        assert_eq!(
            decision,
            RouteDecision::RedirectToSignIn { redirect: "/leases".to_string() },
        );
        assert_eq!(guard.state(), SessionState::RefreshFailed);
        assert!(!store.is_authenticated());
        assert_eq!(store.access_token(), None);
        assert_eq!(refresher.call_count(), 1);
    }

    #[tokio::test]
    async fn concurrent_entries_share_a_single_refresh() {
        let store = SessionStore::arc(MemoryStore::arc());
        login(&store, &token(-10));
        let (guard, refresher) = guard_over(store, false);

        let requirement = AccessRequirement::none();
        let (a, b) = tokio::join!(
            guard.check_route("/one", &requirement),
            guard.check_route("/two", &requirement),
        );
        assert_eq!(a, RouteDecision::Allow);
        assert_eq!(b, RouteDecision::Allow);
        assert_eq!(refresher.call_count(), 1, "refresh must be single-flight");
    }

    #[tokio::test]
    async fn missing_permission_redirects_forbidden_with_message() {
        let store = SessionStore::arc(MemoryStore::arc());
        login(&store, &token(3_600));
        let (guard, _) = guard_over(store, false);

        let decision = guard
            .check_route("/users/new", &AccessRequirement::permission("user:create"))
            .await;
        match decision {
            RouteDecision::RedirectForbidden { message } => {
                assert!(message.contains("user:create"));
            }
            other => panic!("expected forbidden redirect, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn role_requirement_is_checked_after_entry() {
        let store = SessionStore::arc(MemoryStore::arc());
        login(&store, &token(3_600));
        let (guard, _) = guard_over(store, false);

        assert_eq!(
            guard.check_route("/ops", &AccessRequirement::role("manager")).await,
            RouteDecision::Allow,
        );
        assert!(matches!(
            guard.check_route("/admin", &AccessRequirement::role("admin")).await,
            RouteDecision::RedirectForbidden { .. },
        ));
    }
}
