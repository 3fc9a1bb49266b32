//! Menu tree processing pipeline.
//!
//! Fixed stage order per group: filter → sort → translate → flatten →
//! breadcrumb resolution. Each stage produces new nodes and assumes the
//! previous stage's postcondition; callers must not reorder them.
//!
//! Malformed input (dangling `parentId`, duplicate ids, parent cycles) is
//! tolerated best-effort: an orphan becomes its own root, a duplicate keeps
//! its first occurrence, a cycle yields an empty breadcrumb. The menu source
//! is external; navigation must degrade, not crash.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::node::{BreadcrumbEntry, MenuGroup, MenuId, MenuNode};
use crate::translate::Translate;

/// Drop nodes with `visible == false`; an invisible parent drops its whole
/// subtree.
pub fn filter_visible(nodes: &[MenuNode]) -> Vec<MenuNode> {
    nodes
        .iter()
        .filter(|n| n.visible)
        .map(|n| {
            let mut node = n.clone();
            node.children = filter_visible(&n.children);
            node
        })
        .collect()
}

/// Stable sort of siblings by `order` ascending, recursively.
///
/// Nodes without an explicit `order` sort after all ordered nodes; relative
/// order among unordered siblings is preserved.
pub fn sort_by_order(mut nodes: Vec<MenuNode>) -> Vec<MenuNode> {
    nodes.sort_by_key(|n| (n.order.is_none(), n.order));
    for node in &mut nodes {
        let children = std::mem::take(&mut node.children);
        node.children = sort_by_order(children);
    }
    nodes
}

/// Replace titles by their `i18n_key` lookup, keeping the original title when
/// the lookup misses. Produces new nodes; the input is untouched.
pub fn translate_titles(nodes: &[MenuNode], translator: &dyn Translate) -> Vec<MenuNode> {
    nodes
        .iter()
        .map(|n| {
            let mut node = n.clone();
            if let Some(key) = &n.i18n_key {
                if let Some(translated) = translator.translate(key) {
                    node.title = translated;
                }
            }
            node.children = translate_titles(&n.children, translator);
            node
        })
        .collect()
}

/// Filter, sort, and translate one group's trees.
pub fn process_group(group: &MenuGroup, translator: &dyn Translate) -> MenuGroup {
    let menus = filter_visible(&group.menus);
    let menus = sort_by_order(menus);
    let menus = translate_titles(&menus, translator);
    MenuGroup {
        id: group.id.clone(),
        title: group.title.clone(),
        menus,
    }
}

/// Depth-first pre-order flatten: every node exactly once, parents
/// immediately followed by their full subtree.
///
/// Flat copies carry no `children`; a node missing its `parentId` inherits
/// the structural parent observed during traversal, so breadcrumb links
/// survive sources that only nest.
pub fn flatten(nodes: &[MenuNode]) -> Vec<MenuNode> {
    let mut flat = Vec::new();
    let mut stack: Vec<(&MenuNode, Option<MenuId>)> = Vec::new();

    for node in nodes.iter().rev() {
        stack.push((node, None));
    }
    while let Some((node, structural_parent)) = stack.pop() {
        let mut copy = node.clone();
        copy.children = Vec::new();
        if copy.parent_id.is_none() {
            copy.parent_id = structural_parent;
        }
        let parent_for_children = Some(node.id.clone());
        for child in node.children.iter().rev() {
            stack.push((child, parent_for_children.clone()));
        }
        flat.push(copy);
    }
    flat
}

/// Arena of flattened nodes, keyed by id, for lookups and breadcrumb walks.
pub struct MenuIndex {
    nodes: HashMap<MenuId, MenuNode>,
}

impl MenuIndex {
    /// Build from flattened (processed) nodes. On duplicate ids the first
    /// occurrence wins.
    pub fn build(flat: Vec<MenuNode>) -> Self {
        let mut nodes = HashMap::with_capacity(flat.len());
        for node in flat {
            if nodes.contains_key(&node.id) {
                warn!(id = %node.id, "duplicate menu id, keeping first occurrence");
                continue;
            }
            nodes.insert(node.id.clone(), node);
        }
        Self { nodes }
    }

    pub fn get(&self, id: &MenuId) -> Option<&MenuNode> {
        self.nodes.get(id)
    }

    pub fn by_path(&self, path: &str) -> Option<&MenuNode> {
        self.nodes.values().find(|n| n.path.as_deref() == Some(path))
    }

    /// Root-to-leaf breadcrumb for `target`, skipping nodes flagged
    /// `hidden_in_breadcrumb`.
    ///
    /// The walk is iterative with a visited set: a malformed parent cycle
    /// yields an empty result instead of looping. A dangling `parentId` ends
    /// the walk there (the orphan is its own root). Titles are whatever the
    /// translate stage left on the nodes.
    pub fn breadcrumbs(&self, target: &MenuId) -> Vec<BreadcrumbEntry> {
        let mut trail = Vec::new();
        let mut visited = HashSet::new();
        let mut current = self.nodes.get(target);

        while let Some(node) = current {
            if !visited.insert(node.id.clone()) {
                warn!(id = %node.id, "menu parent cycle detected");
                return Vec::new();
            }
            if !node.hidden_in_breadcrumb {
                trail.push(BreadcrumbEntry {
                    id: node.id.clone(),
                    title: node.title.clone(),
                    path: node.path.clone(),
                });
            }
            current = node.parent_id.as_ref().and_then(|p| self.nodes.get(p));
        }

        trail.reverse();
        trail
    }
}
