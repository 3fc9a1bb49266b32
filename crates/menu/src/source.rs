//! Menu source collaborator boundary.

use async_trait::async_trait;
use thiserror::Error;

use crate::node::MenuPayload;

/// Failure fetching the menu graph.
///
/// Surfaced to the UI as an empty/loading menu state, never a crash.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("menu fetch failed: {0}")]
    Fetch(String),
}

/// External service delivering the raw menu graph for the session.
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn fetch_menus(&self) -> Result<MenuPayload, MenuError>;
}
