use dioxus::prelude::*;

/// Where the overlay sits relative to its trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Bottom,
    BottomEnd,
}

impl Placement {
    pub fn class(&self) -> &'static str {
        match self {
            Placement::Bottom => "dropdown-bottom",
            Placement::BottomEnd => "dropdown-bottom-end",
        }
    }
}

/// Shows `overlay` under its trigger on hover or click.
///
/// Clicking only opens, so a click after the pointer entered keeps the menu
/// up. Leaving the dropdown closes it. The overlay is only mounted while open.
#[component]
pub fn Dropdown(
    #[props(default)] placement: Placement,
    #[props(default)] default_open: bool,
    overlay: Element,
    children: Element,
) -> Element {
    let mut open = use_signal(|| default_open);
    let placement_class = placement.class();

    rsx! {
        div {
            class: "dropdown",
            onmouseenter: move |_| open.set(true),
            onmouseleave: move |_| open.set(false),
            div {
                class: "dropdown-trigger",
                onclick: move |_| open.set(true),
                {children}
            }
            if open() {
                div { class: "dropdown-overlay {placement_class}", role: "menu", {overlay} }
            }
        }
    }
}
