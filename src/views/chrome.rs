use super::{ButtonVariant, CommandPalette, MegaMenu, NavToolbar, ToolbarButton};
use crate::Route;
use crate::context::{CommandPaletteOpen, NewsFeed, use_nav_index, use_theme, use_translations};
use crate::nav_model::{NavIndex, NavModelItem};
use crate::state::ChromeBootstrap;
use crate::theme::{Theme, stylesheet};
use dioxus::prelude::*;

/// Provides the bootstrap as contexts, then mounts the router
#[component]
pub fn ChromeRoot(bootstrap: ChromeBootstrap) -> Element {
    use_context_provider(|| NavIndex::from_items(bootstrap.nav.clone()));
    use_context_provider(|| bootstrap.translations.clone());
    use_context_provider(|| Theme::for_mode(bootstrap.theme));
    use_context_provider(|| bootstrap.user.clone());
    use_context_provider(|| NewsFeed(bootstrap.news.clone()));

    rsx! {
        Router::<Route> {}
    }
}

/// Section and page nodes for the route at `path`.
///
/// Unknown paths fall back to the home node, or to a detached placeholder
/// when the index has no home either.
pub fn resolve_navigation(nav_index: &NavIndex, path: &str) -> (NavModelItem, Option<NavModelItem>) {
    let node = match nav_index.find_by_url(path).or_else(|| nav_index.home()) {
        Some(node) => node.clone(),
        None => NavModelItem::new("not-found", "Page not found"),
    };
    let section = nav_index.section_for(&node);
    if section.id == node.id {
        (section, None)
    } else {
        (section, Some(node))
    }
}

/// Router layout: toolbar, optional mega menu, routed page
#[component]
pub fn AppChrome() -> Element {
    let nav_index = use_nav_index();
    let theme = use_theme();
    let translations = use_translations();
    let route = use_route::<Route>();

    let mut mega_menu_open = use_signal(|| false);
    let mut mega_menu_pinned = use_signal(|| false);
    let mut search_bar_hidden = use_signal(|| false);
    let mut kiosk_mode = use_signal(|| false);
    let palette_open = use_signal(|| false);
    use_context_provider(|| CommandPaletteOpen(palette_open));

    let (section_nav, page_nav) = resolve_navigation(&nav_index, &route.to_string());
    let css = stylesheet(&theme);
    let show_mega_menu = !kiosk_mode() && (mega_menu_pinned() || mega_menu_open());
    let search_bar_label = if search_bar_hidden() {
        translations.t("navigation.toolbar.show-search-bar", "Show search bar")
    } else {
        translations.t("navigation.toolbar.hide-search-bar", "Hide search bar")
    };
    let search_bar_icon = if search_bar_hidden() { "angle-down" } else { "angle-up" };
    let exit_kiosk_label = translations.t("navigation.kiosk.exit", "Exit kiosk mode");

    rsx! {
        style { "{css}" }
        div { class: "app-chrome",
            if kiosk_mode() {
                ToolbarButton {
                    variant: ButtonVariant::Primary,
                    class: "kiosk-exit",
                    title: exit_kiosk_label.clone(),
                    onclick: move |_| {
                        log::info!("Leaving kiosk mode");
                        kiosk_mode.set(false);
                    },
                    "{exit_kiosk_label}"
                }
            } else {
                NavToolbar {
                    on_toggle_search_bar: move |_| search_bar_hidden.toggle(),
                    on_toggle_mega_menu: move |_| mega_menu_open.toggle(),
                    on_toggle_kiosk_mode: move |_| {
                        log::info!("Entering kiosk mode");
                        kiosk_mode.set(true);
                    },
                    search_bar_hidden: search_bar_hidden(),
                    mega_menu_pinned: mega_menu_pinned(),
                    section_nav: section_nav,
                    page_nav: page_nav,
                    actions: rsx! {
                        ToolbarButton {
                            icon: search_bar_icon,
                            title: search_bar_label,
                            narrow: true,
                            onclick: move |_| search_bar_hidden.toggle(),
                        }
                    },
                }
            }
            div { class: "app-chrome-body",
                if show_mega_menu {
                    MegaMenu {
                        pinned: mega_menu_pinned(),
                        on_toggle_pinned: move |_| mega_menu_pinned.toggle(),
                        on_close: move |_| mega_menu_open.set(false),
                    }
                }
                main { class: "app-chrome-page", Outlet::<Route> {} }
            }
            CommandPalette {}
        }
    }
}

/// Content of the navigation node matching the current url
#[component]
pub fn Page(segments: Vec<String>) -> Element {
    let nav_index = use_nav_index();
    let path = format!("/{}", segments.join("/"));

    let Some(node) = nav_index.find_by_url(&path).cloned() else {
        return rsx! {
            div { class: "page page-not-found",
                h1 { "Page not found" }
                p { "No navigation entry matches {path}." }
            }
        };
    };

    rsx! {
        div { class: "page",
            h1 { "{node.text}" }
            if let Some(sub_title) = &node.sub_title {
                p { class: "page-subtitle", "{sub_title}" }
            }
            ul { class: "page-children",
                for child in node.children.iter() {
                    li { key: "{child.id}",
                        Link { to: child.url.clone().unwrap_or_default(), "{child.text}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> NavIndex {
        NavIndex::from_items(vec![
            NavModelItem::new("home", "Home").with_url("/"),
            NavModelItem::new("dashboards", "Dashboards")
                .with_url("/dashboards")
                .with_children(vec![NavModelItem::new("playlists", "Playlists").with_url("/playlists")]),
        ])
    }

    #[test]
    fn test_resolve_child_page() {
        let (section, page) = resolve_navigation(&index(), "/playlists");
        assert_eq!(section.id, "dashboards");
        assert_eq!(page.map(|p| p.id), Some("playlists".to_string()));
    }

    #[test]
    fn test_resolve_section_page() {
        let (section, page) = resolve_navigation(&index(), "/dashboards/");
        assert_eq!(section.id, "dashboards");
        assert_eq!(page, None);
    }

    #[test]
    fn test_unknown_path_falls_back_to_home() {
        let (section, page) = resolve_navigation(&index(), "/missing");
        assert_eq!(section.id, "home");
        assert_eq!(page, None);

        let (section, _) = resolve_navigation(&NavIndex::default(), "/missing");
        assert_eq!(section.id, "not-found");
    }
}
