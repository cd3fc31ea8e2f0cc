//! Navigation tree model and the keyed navigation index
//!
//! The index is built once from the configured tree and then shared
//! read-only with every component that needs it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Id of the home node in the navigation index
pub const HOME_NAV_ID: &str = "home";
/// Id of the signed-in user's profile node
pub const PROFILE_NAV_ID: &str = "profile";

/// One node of the navigation tree
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NavModelItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub sub_title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub children: Vec<NavModelItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_item: Option<Box<NavModelItem>>,
    #[serde(default)]
    pub hide_from_breadcrumbs: bool,
    #[serde(default)]
    pub divider: bool,
}

impl NavModelItem {
    pub fn new(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_parent(mut self, parent: NavModelItem) -> Self {
        self.parent_item = Some(Box::new(parent));
        self
    }

    pub fn with_children(mut self, children: Vec<NavModelItem>) -> Self {
        self.children = children;
        self
    }

    /// Url without its query string
    pub fn path(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(|url| url.split('?').next().unwrap_or_default())
    }

    /// Copy used as a `parent_item` link: same node, no subtree
    fn as_parent_link(&self) -> NavModelItem {
        NavModelItem {
            children: Vec::new(),
            ..self.clone()
        }
    }

    /// Number of ancestors reachable through `parent_item`
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent_item.as_deref();
        while let Some(parent) = current {
            depth += 1;
            current = parent.parent_item.as_deref();
        }
        depth
    }
}

/// Read-only mapping from node id to navigation node
#[derive(Debug, Clone, Default)]
pub struct NavIndex {
    nodes: Arc<HashMap<String, NavModelItem>>,
    roots: Arc<Vec<String>>,
}

impl PartialEq for NavIndex {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.nodes, &other.nodes) || self.nodes == other.nodes
    }
}

impl NavIndex {
    pub fn from_items(items: Vec<NavModelItem>) -> Self {
        let mut nodes = HashMap::new();
        let mut roots = Vec::new();
        for item in items {
            if !item.id.is_empty() {
                roots.push(item.id.clone());
            }
            index_node(&mut nodes, item, None);
        }
        log::debug!("Navigation index built with {} nodes", nodes.len());
        Self {
            nodes: Arc::new(nodes),
            roots: Arc::new(roots),
        }
    }

    pub fn get(&self, id: &str) -> Option<&NavModelItem> {
        self.nodes.get(id)
    }

    pub fn home(&self) -> Option<&NavModelItem> {
        self.get(HOME_NAV_ID)
    }

    pub fn profile(&self) -> Option<&NavModelItem> {
        self.get(PROFILE_NAV_ID)
    }

    /// Top-level nodes, in configuration order
    pub fn roots(&self) -> Vec<&NavModelItem> {
        self.roots.iter().filter_map(|id| self.get(id)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavModelItem> {
        self.nodes.values()
    }

    /// Node whose url path equals `path`; the deepest node wins on ties.
    pub fn find_by_url(&self, path: &str) -> Option<&NavModelItem> {
        let path = normalize_path(path);
        self.nodes
            .values()
            .filter(|node| node.path().map(normalize_path) == Some(path))
            .max_by(|a, b| a.depth().cmp(&b.depth()).then_with(|| b.id.cmp(&a.id)))
    }

    /// Top-most ancestor of `node` below the home node
    pub fn section_for(&self, node: &NavModelItem) -> NavModelItem {
        let mut section = node;
        while let Some(parent) = section.parent_item.as_deref() {
            if parent.id == HOME_NAV_ID {
                break;
            }
            section = parent;
        }
        self.get(&section.id).cloned().unwrap_or_else(|| section.clone())
    }
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

fn index_node(
    nodes: &mut HashMap<String, NavModelItem>,
    item: NavModelItem,
    parent: Option<&NavModelItem>,
) {
    let item = match parent {
        Some(parent) => item.with_parent(parent.as_parent_link()),
        None => item,
    };

    if !item.id.is_empty() {
        if nodes.contains_key(&item.id) {
            log::warn!("Duplicate navigation id '{}', keeping the first one", item.id);
        } else {
            nodes.insert(item.id.clone(), item.clone());
        }
    }

    for child in item.children.clone() {
        index_node(nodes, child, Some(&item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<NavModelItem> {
        vec![
            NavModelItem::new("home", "Home").with_url("/"),
            NavModelItem::new("dashboards", "Dashboards")
                .with_url("/dashboards")
                .with_children(vec![
                    NavModelItem::new("playlists", "Playlists").with_url("/playlists"),
                    NavModelItem::new("snapshots", "Snapshots")
                        .with_url("/dashboard/snapshots")
                        .with_children(vec![
                            NavModelItem::new("snapshot-edit", "Edit").with_url("/dashboard/snapshots/"),
                        ]),
                ]),
            NavModelItem::new("profile", "Admin").with_url("/profile"),
        ]
    }

    #[test]
    fn test_index_contains_every_node() {
        let index = NavIndex::from_items(tree());
        assert_eq!(index.iter().count(), 6);
        assert!(index.home().is_some());
        assert!(index.profile().is_some());
        assert_eq!(index.get("playlists").map(|n| n.text.as_str()), Some("Playlists"));
    }

    #[test]
    fn test_children_link_to_parent_without_subtree() {
        let index = NavIndex::from_items(tree());
        let snapshots = index.get("snapshots").unwrap();
        let parent = snapshots.parent_item.as_deref().unwrap();
        assert_eq!(parent.id, "dashboards");
        assert!(parent.children.is_empty());

        let edit = index.get("snapshot-edit").unwrap();
        assert_eq!(edit.depth(), 2);
        assert_eq!(
            edit.parent_item.as_ref().unwrap().parent_item.as_ref().unwrap().id,
            "dashboards"
        );
    }

    #[test]
    fn test_roots_keep_configuration_order() {
        let index = NavIndex::from_items(tree());
        let ids: Vec<&str> = index.roots().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["home", "dashboards", "profile"]);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let index = NavIndex::from_items(vec![
            NavModelItem::new("a", "First"),
            NavModelItem::new("a", "Second"),
        ]);
        assert_eq!(index.iter().count(), 1);
        assert_eq!(index.get("a").unwrap().text, "First");
    }

    #[test]
    fn test_find_by_url_prefers_deepest() {
        let index = NavIndex::from_items(tree());
        assert_eq!(index.find_by_url("/dashboard/snapshots").unwrap().id, "snapshot-edit");
        assert_eq!(index.find_by_url("/playlists/").unwrap().id, "playlists");
        assert_eq!(index.find_by_url("/").unwrap().id, "home");
        assert!(index.find_by_url("/nowhere").is_none());
    }

    #[test]
    fn test_section_for_walks_to_top_level() {
        let index = NavIndex::from_items(tree());
        let edit = index.get("snapshot-edit").unwrap();
        let section = index.section_for(edit);
        assert_eq!(section.id, "dashboards");
        assert_eq!(section.children.len(), 2);

        let home = index.home().unwrap();
        assert_eq!(index.section_for(home).id, "home");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "alerting",
            "text": "Alerting",
            "subTitle": "Rules and notifications",
            "hideFromBreadcrumbs": true,
            "children": [{ "id": "rules", "text": "Rules", "url": "/alerting/list" }]
        }"#;
        let node: NavModelItem = serde_json::from_str(json).unwrap();
        assert_eq!(node.sub_title.as_deref(), Some("Rules and notifications"));
        assert!(node.hide_from_breadcrumbs);
        assert_eq!(node.children[0].url.as_deref(), Some("/alerting/list"));
        assert!(!node.divider);
    }
}
