use super::{Icon, IconButton};
use crate::context::{use_nav_index, use_translations};
use crate::nav_model::PROFILE_NAV_ID;
use dioxus::prelude::*;

/// Side panel listing the navigable sections
#[component]
pub fn MegaMenu(pinned: bool, on_toggle_pinned: EventHandler<()>, on_close: EventHandler<()>) -> Element {
    let nav_index = use_nav_index();
    let translations = use_translations();
    let sections: Vec<_> = nav_index
        .roots()
        .into_iter()
        .filter(|node| node.id != PROFILE_NAV_ID)
        .cloned()
        .collect();

    let dock_label = if pinned {
        translations.t("navigation.megamenu.undock", "Undock menu")
    } else {
        translations.t("navigation.megamenu.dock", "Dock menu")
    };
    let close_label = translations.t("navigation.megamenu.close", "Close menu");

    rsx! {
        nav { class: "mega-menu", aria_label: "Main menu",
            div { class: "mega-menu-header",
                IconButton {
                    name: "thumbtack",
                    tooltip: dock_label,
                    onclick: move |_| on_toggle_pinned.call(()),
                }
                if !pinned {
                    IconButton {
                        name: "times",
                        tooltip: close_label,
                        onclick: move |_| on_close.call(()),
                    }
                }
            }
            ul { class: "mega-menu-sections",
                for section in sections {
                    li { key: "{section.id}", class: "mega-menu-section",
                        Link { to: section.url.clone().unwrap_or_default(),
                            if let Some(icon) = &section.icon {
                                Icon { name: icon.clone() }
                            }
                            "{section.text}"
                        }
                        if !section.children.is_empty() {
                            ul { class: "mega-menu-children",
                                for child in section.children.iter() {
                                    li { key: "{child.id}",
                                        Link { to: child.url.clone().unwrap_or_default(), "{child.text}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
