//! `atrium-core` — foundation building blocks shared by the console core.
//!
//! Strongly-typed identifiers, the shared error model, and the string-keyed
//! storage abstraction. No authorization or navigation logic lives here.

pub mod error;
pub mod id;
pub mod storage;

pub use error::{CoreError, CoreResult};
pub use id::{TenantId, UserId};
pub use storage::{KeyValueStore, MemoryStore};
