use super::Icon;
use crate::breadcrumbs::Breadcrumb;
use dioxus::prelude::*;

/// Breadcrumb trail; the last entry is the current page
#[component]
pub fn Breadcrumbs(breadcrumbs: Vec<Breadcrumb>, #[props(default)] class: String) -> Element {
    let last = breadcrumbs.len().saturating_sub(1);

    rsx! {
        nav { aria_label: "Breadcrumbs", class: "{class}",
            ol { class: "breadcrumbs",
                for (index , crumb) in breadcrumbs.iter().enumerate() {
                    BreadcrumbItem {
                        key: "{index}-{crumb.href}",
                        text: crumb.text.clone(),
                        href: crumb.href.clone(),
                        is_current: index == last,
                    }
                }
            }
        }
    }
}

#[component]
pub fn BreadcrumbItem(text: String, href: String, is_current: bool) -> Element {
    if is_current {
        return rsx! {
            li { class: "breadcrumb-item breadcrumb-item-current",
                span { aria_current: "page", "{text}" }
            }
        };
    }

    rsx! {
        li { class: "breadcrumb-item",
            a { href: "{href}", "{text}" }
            Icon { name: "angle-right" }
        }
    }
}
