use crate::nav_model::{NavIndex, NavModelItem};

/// Navigable nodes whose text contains `query`, best matches first
pub fn search_nav(index: &NavIndex, query: &str, limit: usize) -> Vec<NavModelItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<(usize, &NavModelItem)> = index
        .iter()
        .filter(|node| node.url.is_some())
        .filter_map(|node| {
            node.text
                .to_lowercase()
                .find(&query)
                .map(|position| (position, node))
        })
        .collect();

    hits.sort_by(|(pos_a, a), (pos_b, b)| pos_a.cmp(pos_b).then_with(|| a.text.cmp(&b.text)));
    hits.into_iter()
        .take(limit)
        .map(|(_, node)| node.clone())
        .collect()
}
