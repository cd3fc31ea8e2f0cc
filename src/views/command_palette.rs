use super::Icon;
use crate::context::{CommandPaletteOpen, use_nav_index, use_translations};
use crate::search::search_nav;
use dioxus::prelude::*;

const MAX_RESULTS: usize = 8;

/// Toolbar entry point of the command palette
#[component]
pub fn CommandPaletteTrigger() -> Element {
    let translations = use_translations();
    let palette = try_use_context::<CommandPaletteOpen>();
    let placeholder = translations.t("nav.search.placeholderCommandPalette", "Search or jump to...");

    rsx! {
        button {
            r#type: "button",
            class: "command-palette-trigger",
            aria_label: "{placeholder}",
            "data-testid": "command-palette-trigger",
            onclick: move |_| {
                if let Some(CommandPaletteOpen(mut open)) = palette {
                    open.toggle();
                    log::debug!("Command palette toggled, open: {}", open());
                }
            },
            Icon { name: "search" }
            span { "{placeholder}" }
            span { class: "command-palette-shortcut", "ctrl+k" }
        }
    }
}

/// Overlay searching the navigation index
#[component]
pub fn CommandPalette() -> Element {
    let nav_index = use_nav_index();
    let translations = use_translations();
    let palette = try_use_context::<CommandPaletteOpen>();
    let mut query = use_signal(String::new);

    let Some(CommandPaletteOpen(mut open)) = palette else {
        return rsx! {};
    };
    if !open() {
        return rsx! {};
    }

    let results = search_nav(&nav_index, &query.read(), MAX_RESULTS);
    let placeholder = translations.t("nav.search.placeholderCommandPalette", "Search or jump to...");

    rsx! {
        div { class: "command-palette", role: "dialog",
            input {
                r#type: "text",
                class: "command-palette-input",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |event| query.set(event.value()),
            }
            ul { class: "command-palette-results",
                for result in results {
                    li { key: "{result.id}",
                        a {
                            href: result.url.clone(),
                            onclick: move |_| open.set(false),
                            "{result.text}"
                        }
                    }
                }
            }
            button {
                r#type: "button",
                class: "command-palette-close",
                onclick: move |_| open.set(false),
                Icon { name: "times" }
            }
        }
    }
}
