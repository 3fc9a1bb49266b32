//! `atrium-auth` — client-side session and authorization state.
//!
//! This crate owns the token codec and lifecycle policy, the session store
//! (the single live `AuthState` instance), and the permission evaluator.
//! It decodes credentials but never verifies signatures; the issuing service
//! is authoritative and external.

pub mod claims;
pub mod error;
pub mod evaluator;
pub mod lifecycle;
pub mod permissions;
pub mod roles;
pub mod store;
pub mod token;
pub mod user;

pub use claims::Claims;
pub use error::CredentialError;
pub use evaluator::PermissionEvaluator;
pub use lifecycle::{
    DEFAULT_REFRESH_WINDOW_SECS, is_expired, is_expiring_soon, remaining_seconds,
};
pub use permissions::Permission;
pub use roles::{RoleRef, matches_role};
pub use store::{AuthState, SessionStore};
pub use token::decode;
pub use user::User;
