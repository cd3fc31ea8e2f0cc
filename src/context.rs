//! Read-only dependencies injected into the component tree
//!
//! Every hook falls back to an empty value when nothing was provided, so a
//! component rendered in isolation simply omits what it cannot find.

use crate::i18n::Translations;
use crate::nav_model::NavIndex;
use crate::news::NewsItem;
use crate::state::CurrentUser;
use crate::theme::Theme;
use dioxus::prelude::*;

/// News shown in the notifications drawer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewsFeed(pub Vec<NewsItem>);

/// Open state of the command palette, shared by its trigger and overlay
#[derive(Clone, Copy, PartialEq)]
pub struct CommandPaletteOpen(pub Signal<bool>);

pub fn use_nav_index() -> NavIndex {
    try_use_context::<NavIndex>().unwrap_or_default()
}

pub fn use_translations() -> Translations {
    try_use_context::<Translations>().unwrap_or_default()
}

pub fn use_current_user() -> CurrentUser {
    try_use_context::<CurrentUser>().unwrap_or_default()
}

pub fn use_theme() -> Theme {
    try_use_context::<Theme>().unwrap_or_default()
}

pub fn use_news_feed() -> NewsFeed {
    try_use_context::<NewsFeed>().unwrap_or_default()
}
