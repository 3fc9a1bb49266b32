//! Session store: the single live authentication state.
//!
//! Exactly one `SessionStore` exists per process. It is constructed at
//! application start and handed (as `Arc<SessionStore>`) to every guard and
//! evaluator; there is no ambient global. Mutation is the exclusive business
//! of the login flow, the refresh flow, and logout; everything else reads
//! snapshots.

use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use atrium_core::KeyValueStore;

use crate::permissions::Permission;
use crate::user::User;

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Snapshot of the authentication state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub permission_codes: Vec<Permission>,
}

/// Process-wide session state container.
pub struct SessionStore {
    state: RwLock<AuthState>,
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Create an empty (unauthenticated) store over the given token storage.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            state: RwLock::new(AuthState::default()),
            storage,
        }
    }

    pub fn arc(storage: Arc<dyn KeyValueStore>) -> Arc<Self> {
        Arc::new(Self::new(storage))
    }

    /// Synchronous snapshot of the current state.
    ///
    /// Usable outside any rendering context; the route guard runs before UI
    /// mounts.
    pub fn state(&self) -> AuthState {
        self.state.read().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().unwrap().is_authenticated
    }

    /// Replace the session atomically after a successful login or refresh.
    pub fn set_auth(
        &self,
        user: User,
        access_token: &str,
        refresh_token: &str,
        permission_codes: Vec<Permission>,
    ) {
        info!(user = %user.id, permissions = permission_codes.len(), "session established");
        {
            let mut state = self.state.write().unwrap();
            *state = AuthState {
                user: Some(user),
                is_authenticated: true,
                permission_codes,
            };
        }
        self.storage.set(ACCESS_TOKEN_KEY, access_token.to_string());
        self.storage.set(REFRESH_TOKEN_KEY, refresh_token.to_string());
    }

    /// Reset to the empty state and drop both tokens. Idempotent.
    pub fn clear_auth(&self) {
        debug!("session cleared");
        {
            let mut state = self.state.write().unwrap();
            *state = AuthState::default();
        }
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
    }

    /// Permission codes cached by the last `set_auth`; empty when
    /// unauthenticated.
    pub fn permission_codes(&self) -> Vec<Permission> {
        self.state.read().unwrap().permission_codes.clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.storage.get(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get(REFRESH_TOKEN_KEY)
    }
}
