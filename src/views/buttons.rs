use dioxus::prelude::*;

fn glyph(name: &str) -> &'static str {
    match name {
        "bars" => "☰",
        "monitor" => "▭",
        "search" => "⌕",
        "rss" => "◉",
        "angle-right" => "›",
        "angle-up" => "˄",
        "angle-down" => "˅",
        "times" => "✕",
        "thumbtack" => "⚲",
        "user" => "◯",
        "signout" => "⇥",
        "cog" => "⚙",
        _ => "•",
    }
}

#[component]
pub fn Icon(name: String) -> Element {
    let glyph = glyph(&name);
    rsx! {
        i { class: "icon icon-{name}", aria_hidden: "true", "{glyph}" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "toolbar-button-default",
            ButtonVariant::Primary => "toolbar-button-primary",
        }
    }
}

/// Icon-only button; the tooltip doubles as its accessible name
#[component]
pub fn IconButton(
    name: String,
    tooltip: String,
    #[props(default = "top".to_string())] tooltip_placement: String,
    #[props(default = "md".to_string())] size: String,
    #[props(default)] test_id: String,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "icon-button icon-button-{size}",
            title: "{tooltip}",
            aria_label: "{tooltip}",
            "data-tooltip-placement": "{tooltip_placement}",
            "data-testid": "{test_id}",
            onclick: move |evt| onclick.call(evt),
            Icon { name: name.clone() }
        }
    }
}

/// Toolbar button with an optional icon, avatar image and label
#[component]
pub fn ToolbarButton(
    #[props(default)] icon: String,
    #[props(default)] title: String,
    #[props(default)] narrow: bool,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default)] img_src: String,
    #[props(default)] img_alt: String,
    #[props(default)] aria_label: String,
    #[props(default)] test_id: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = variant.class();
    let narrow_class = if narrow { "toolbar-button-narrow" } else { "" };
    let label = if aria_label.is_empty() { title.clone() } else { aria_label };

    rsx! {
        button {
            r#type: "button",
            class: "toolbar-button {variant_class} {narrow_class} {class}",
            title: "{title}",
            aria_label: "{label}",
            "data-testid": "{test_id}",
            onclick: move |evt| onclick.call(evt),
            if !img_src.is_empty() {
                img { src: "{img_src}", alt: "{img_alt}" }
            }
            if !icon.is_empty() {
                Icon { name: icon.clone() }
            }
            {children}
        }
    }
}
