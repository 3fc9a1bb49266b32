//! Menu tree data model.
//!
//! Field names mirror the backend payload (camelCase JSON). Ids are
//! backend-assigned opaque strings, unique within a forest.

use serde::{Deserialize, Serialize};

/// Identifier of a menu node within a forest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(String);

impl MenuId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MenuId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl core::fmt::Display for MenuId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

fn default_visible() -> bool {
    true
}

/// One navigable entry in the menu tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    pub id: MenuId,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<MenuId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    #[serde(default = "default_visible")]
    pub visible: bool,

    #[serde(default)]
    pub hidden_in_breadcrumb: bool,

    #[serde(default)]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: MenuId::new(id),
            title: title.into(),
            i18n_key: None,
            path: None,
            parent_id: None,
            order: None,
            visible: true,
            hidden_in_breadcrumb: false,
            children: Vec::new(),
        }
    }
}

/// Top-level grouping of menu trees, order-preserving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroup {
    pub id: MenuId,
    pub title: String,
    #[serde(default)]
    pub menus: Vec<MenuNode>,
}

/// The only payload shape the menu source may return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuPayload {
    pub menu_groups: Vec<MenuGroup>,
}

/// One entry of a resolved breadcrumb path. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreadcrumbEntry {
    pub id: MenuId,
    pub title: String,
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_payload_with_defaults() {
        let payload: MenuPayload = serde_json::from_value(json!({
            "menuGroups": [{
                "id": "g1",
                "title": "Main",
                "menus": [{
                    "id": "m1",
                    "title": "Dashboard",
                    "i18nKey": "menu.dashboard",
                    "parentId": null,
                    "hiddenInBreadcrumb": true,
                }],
            }],
        }))
        .unwrap();

        let node = &payload.menu_groups[0].menus[0];
        assert_eq!(node.i18n_key.as_deref(), Some("menu.dashboard"));
        assert!(node.visible, "visibility defaults to true");
        assert!(node.hidden_in_breadcrumb);
        assert!(node.children.is_empty());
        assert_eq!(node.order, None);
    }
}
