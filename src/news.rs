use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub summary: String,
    pub published: DateTime<Utc>,
}

impl NewsItem {
    pub fn published_label(&self) -> String {
        self.published.format("%b %d, %Y").to_string()
    }
}

/// Newest `limit` items, newest first
pub fn latest(items: &[NewsItem], limit: usize) -> Vec<NewsItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.published.cmp(&a.published));
    sorted.truncate(limit);
    sorted
}
