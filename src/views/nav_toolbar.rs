//! The navigation toolbar of the application chrome
//!
//! Left to right: menu toggle, breadcrumbs, caller actions, kiosk toggle,
//! command palette trigger, news, profile menu. What is shown is decided by
//! [`ToolbarLayout`], which only depends on the props and the navigation index.

use super::{
    ButtonVariant, Breadcrumbs, CommandPaletteTrigger, Dropdown, IconButton, NewsContainer,
    Placement, ToolbarButton, TopNavBarMenu,
};
use crate::breadcrumbs::{Breadcrumb, build_breadcrumbs};
use crate::context::{use_current_user, use_nav_index, use_translations};
use crate::nav_model::{NavIndex, NavModelItem};
use dioxus::prelude::*;

/// Value of the `data-testid` attribute on the toolbar root
pub const NAV_TOOLBAR_TEST_ID: &str = "nav-toolbar-container";

/// Elements the toolbar shows for one render
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarLayout {
    pub menu_toggle: bool,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub kiosk_toggle: bool,
    pub profile: Option<NavModelItem>,
}

impl ToolbarLayout {
    pub fn new(
        section_nav: &NavModelItem,
        page_nav: Option<&NavModelItem>,
        mega_menu_pinned: bool,
        search_bar_hidden: bool,
        nav_index: &NavIndex,
    ) -> Self {
        Self {
            menu_toggle: !mega_menu_pinned,
            breadcrumbs: build_breadcrumbs(section_nav, page_nav, nav_index.home()),
            kiosk_toggle: search_bar_hidden,
            profile: nav_index.profile().cloned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarCommand {
    ToggleMegaMenu,
    ToggleKioskMode,
}

#[derive(Clone, Copy, PartialEq)]
pub struct ToolbarHandlers {
    on_toggle_mega_menu: EventHandler<()>,
    on_toggle_kiosk_mode: EventHandler<()>,
}

impl ToolbarHandlers {
    pub fn new(on_toggle_mega_menu: EventHandler<()>, on_toggle_kiosk_mode: EventHandler<()>) -> Self {
        Self {
            on_toggle_mega_menu,
            on_toggle_kiosk_mode,
        }
    }

    pub fn dispatch(&self, command: ToolbarCommand) {
        log::debug!("Toolbar command {:?}", command);
        match command {
            ToolbarCommand::ToggleMegaMenu => self.on_toggle_mega_menu.call(()),
            ToolbarCommand::ToggleKioskMode => self.on_toggle_kiosk_mode.call(()),
        }
    }
}

/// `on_toggle_search_bar` is part of the chrome contract; the toolbar itself
/// never calls it.
#[component]
pub fn NavToolbar(
    on_toggle_search_bar: EventHandler<()>,
    on_toggle_mega_menu: EventHandler<()>,
    on_toggle_kiosk_mode: EventHandler<()>,
    #[props(default)] search_bar_hidden: bool,
    #[props(default)] mega_menu_pinned: bool,
    section_nav: NavModelItem,
    #[props(!optional)] page_nav: Option<NavModelItem>,
    actions: Element,
) -> Element {
    let _ = on_toggle_search_bar;
    let nav_index = use_nav_index();
    let translations = use_translations();
    let user = use_current_user();

    let layout = ToolbarLayout::new(
        &section_nav,
        page_nav.as_ref(),
        mega_menu_pinned,
        search_bar_hidden,
        &nav_index,
    );
    let handlers = ToolbarHandlers::new(on_toggle_mega_menu, on_toggle_kiosk_mode);
    let toggle_menu_label = translations.t("navigation.toolbar.toggle-menu", "Toggle menu");
    let kiosk_label = translations.t("navigation.toolbar.enable-kiosk", "Enable kiosk mode");

    rsx! {
        div { "data-testid": NAV_TOOLBAR_TEST_ID, class: "nav-toolbar",
            if layout.menu_toggle {
                div { class: "nav-toolbar-menu-button",
                    IconButton {
                        name: "bars",
                        tooltip: toggle_menu_label,
                        tooltip_placement: "bottom",
                        size: "xl",
                        test_id: "nav-toolbar-menu-toggle",
                        onclick: move |_| handlers.dispatch(ToolbarCommand::ToggleMegaMenu),
                    }
                }
            }
            Breadcrumbs {
                breadcrumbs: layout.breadcrumbs.clone(),
                class: "nav-toolbar-breadcrumbs",
            }
            div { class: "nav-toolbar-actions",
                {actions}
                if layout.kiosk_toggle {
                    ToolbarButton {
                        icon: "monitor",
                        title: kiosk_label,
                        narrow: true,
                        variant: ButtonVariant::Default,
                        test_id: "nav-toolbar-kiosk-toggle",
                        onclick: move |_| handlers.dispatch(ToolbarCommand::ToggleKioskMode),
                    }
                }
                CommandPaletteTrigger {}
                NewsContainer {}
                if let Some(profile) = layout.profile.clone() {
                    Dropdown {
                        placement: Placement::BottomEnd,
                        overlay: rsx! {
                            TopNavBarMenu { node: profile.clone() }
                        },
                        ToolbarButton {
                            variant: ButtonVariant::Default,
                            class: "nav-toolbar-profile-button",
                            img_src: user.gravatar_url.clone(),
                            img_alt: "User avatar",
                            aria_label: "Profile",
                            test_id: "nav-toolbar-profile",
                            onclick: |_| {},
                        }
                    }
                }
            }
        }
    }
}
