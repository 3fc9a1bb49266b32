//! `atrium-menu` — dynamic navigation tree processing.
//!
//! The backend delivers a raw menu graph per session; this crate derives the
//! renderable structures from it: visibility-filtered, order-sorted,
//! translated trees, a flattened index, and breadcrumb paths. The source is
//! an external service and not fully trusted, so every stage degrades on
//! malformed input instead of failing the navigation render.

pub mod cache;
pub mod node;
pub mod processor;
pub mod source;
pub mod translate;

pub use cache::{load_cached, store_menus};
pub use node::{BreadcrumbEntry, MenuGroup, MenuId, MenuNode, MenuPayload};
pub use processor::{MenuIndex, filter_visible, flatten, process_group, sort_by_order, translate_titles};
pub use source::{MenuError, MenuSource};
pub use translate::{NoTranslation, Translate};
