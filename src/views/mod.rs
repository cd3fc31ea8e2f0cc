//! Web interface components of the navigation chrome
//!
//! The toolbar and its collaborators, plus the layout that wires them to the
//! router and to the chrome state.

/// Icons and buttons
mod buttons;
pub use buttons::{ButtonVariant, Icon, IconButton, ToolbarButton};

/// Breadcrumb trail
mod breadcrumbs;
pub use breadcrumbs::Breadcrumbs;

/// Hover/click dropdown
mod dropdown;
pub use dropdown::{Dropdown, Placement};

/// Menu built from a navigation node
mod top_nav_bar_menu;
pub use top_nav_bar_menu::TopNavBarMenu;

/// Command palette and its trigger
mod command_palette;
pub use command_palette::{CommandPalette, CommandPaletteTrigger};

/// Notifications trigger and drawer
mod news;
pub use news::NewsContainer;

/// Main navigation side panel
mod mega_menu;
pub use mega_menu::MegaMenu;

/// Navigation toolbar
mod nav_toolbar;
pub use nav_toolbar::NavToolbar;

/// Chrome layout and routed pages
mod chrome;
pub use chrome::{AppChrome, ChromeRoot, Page};

#[cfg(test)]
mod event_dom;
