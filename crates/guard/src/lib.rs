//! `atrium-guard` — route-entry and render-time gates.
//!
//! `SessionGuard` decides whether a protected-route entry may proceed
//! (refreshing the access token when it is dead or dying); `AccessGate`
//! decides whether gated UI content renders. Both read the session store,
//! neither ever mutates it except for the guard's forced logout on an
//! unrecoverable refresh failure.

pub mod access;
pub mod refresh;
pub mod route;
pub mod session;

pub use access::AccessGate;
pub use refresh::{RefreshError, TokenRefresher};
pub use route::{AccessRequirement, Navigator, RouteDecision, dispatch};
pub use session::{SessionGuard, SessionState};
