//! Breadcrumb trail construction from the navigation tree

use crate::nav_model::NavModelItem;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub text: String,
    pub href: String,
}

/// Builds the trail for `page_nav` (if any) followed by `section_nav`.
///
/// Each node is walked up through its parents. The walk stops at the first
/// node pointing at the home url, which becomes the leading crumb.
pub fn build_breadcrumbs(
    section_nav: &NavModelItem,
    page_nav: Option<&NavModelItem>,
    home_nav: Option<&NavModelItem>,
) -> Vec<Breadcrumb> {
    let mut walk = CrumbWalk {
        crumbs: Vec::new(),
        found_home: false,
        last_path: None,
        home_url: home_nav.and_then(|home| home.url.as_deref()),
        home_text: home_nav.map(|home| home.text.as_str()).unwrap_or_default(),
    };

    if let Some(page_nav) = page_nav {
        walk.add(page_nav);
    }
    walk.add(section_nav);

    walk.crumbs
}

struct CrumbWalk<'a> {
    crumbs: Vec<Breadcrumb>,
    found_home: bool,
    last_path: Option<String>,
    home_url: Option<&'a str>,
    home_text: &'a str,
}

impl CrumbWalk<'_> {
    fn add(&mut self, node: &NavModelItem) {
        let mut current = Some(node);
        while let Some(node) = current {
            if self.found_home {
                return;
            }

            let href = node.url.clone().unwrap_or_default();
            let path = match_path(node.url.as_deref());

            if self.home_url == Some(path.as_str()) {
                self.crumbs.insert(
                    0,
                    Breadcrumb {
                        text: self.home_text.to_string(),
                        href,
                    },
                );
                self.found_home = true;
                return;
            }

            let same_as_last = !path.is_empty() && self.last_path.as_deref() == Some(path.as_str());
            if !node.hide_from_breadcrumbs && !same_as_last {
                self.crumbs.insert(
                    0,
                    Breadcrumb {
                        text: node.text.clone(),
                        href,
                    },
                );
            }
            self.last_path = Some(path);

            current = node.parent_item.as_deref();
        }
    }
}

/// Path part of `url`, keeping the `editview` query parameter when present
fn match_path(url: Option<&str>) -> String {
    let Some(url) = url else {
        return String::new();
    };
    let (path, query) = url.split_once('?').unwrap_or((url, ""));

    let edit_view = query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == "editview")
        .map(|(_, value)| value);

    match edit_view {
        Some(view) => format!("{}?editview={}", path, view),
        None => path.to_string(),
    }
}
