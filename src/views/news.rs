use super::{Icon, ToolbarButton};
use crate::context::{use_news_feed, use_translations};
use crate::news::{NewsItem, latest};
use dioxus::prelude::*;

const MAX_NEWS_ITEMS: usize = 10;

/// Notifications trigger and its drawer
#[component]
pub fn NewsContainer() -> Element {
    let translations = use_translations();
    let feed = use_news_feed();
    let mut drawer_open = use_signal(|| false);
    let title = translations.t("news.title", "Latest from the blog");

    rsx! {
        ToolbarButton {
            icon: "rss",
            aria_label: title.clone(),
            test_id: "news-container-trigger",
            onclick: move |_| drawer_open.toggle(),
        }
        if drawer_open() {
            NewsDrawer {
                title: title,
                items: latest(&feed.0, MAX_NEWS_ITEMS),
                on_close: move |_| drawer_open.set(false),
            }
        }
    }
}

#[component]
pub fn NewsDrawer(title: String, items: Vec<NewsItem>, on_close: EventHandler<()>) -> Element {
    rsx! {
        aside { class: "news-drawer", "data-testid": "news-drawer",
            header { class: "news-drawer-header",
                h3 { "{title}" }
                button {
                    r#type: "button",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { name: "times" }
                }
            }
            if items.is_empty() {
                p { class: "news-drawer-empty", "No news right now." }
            }
            for item in items.iter() {
                article { key: "{item.link}", class: "news-item",
                    a { href: "{item.link}", target: "_blank", h4 { "{item.title}" } }
                    time { {item.published_label()} }
                    p { "{item.summary}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn drawer() -> Element {
        let items = vec![NewsItem {
            title: "Release notes".to_string(),
            link: "https://example.org/release".to_string(),
            summary: "What changed".to_string(),
            published: Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap(),
        }];
        rsx! {
            NewsDrawer { title: "News", items: items, on_close: |_| {} }
        }
    }

    fn empty_drawer() -> Element {
        rsx! {
            NewsDrawer { title: "News", items: Vec::new(), on_close: |_| {} }
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_drawer_lists_items() {
        let html = render(drawer);
        assert!(html.contains("Release notes"));
        assert!(html.contains("Mar 02, 2024"));
        assert!(!html.contains("No news right now."));
    }

    #[test]
    fn test_empty_drawer() {
        assert!(render(empty_drawer).contains("No news right now."));
    }
}
