//! Theme tokens and the stylesheet generated from them

use serde::{Deserialize, Serialize};

/// Height of one level of the top bar, in pixels
pub const TOP_BAR_LEVEL_HEIGHT: u32 = 40;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ThemeColors {
    pub background_primary: String,
    pub background_secondary: String,
    pub border_weak: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub action_hover: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    /// Grid unit in pixels
    pub spacing_grid: f32,
    /// Upper bound of the `sm` breakpoint in pixels
    pub breakpoint_sm: u32,
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            spacing_grid: 8.0,
            breakpoint_sm: 544,
            colors: ThemeColors {
                background_primary: "#181b1f".to_string(),
                background_secondary: "#22252b".to_string(),
                border_weak: "rgba(204, 204, 220, 0.12)".to_string(),
                text_primary: "#ccccdc".to_string(),
                text_secondary: "rgba(204, 204, 220, 0.65)".to_string(),
                action_hover: "rgba(204, 204, 220, 0.16)".to_string(),
            },
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            spacing_grid: 8.0,
            breakpoint_sm: 544,
            colors: ThemeColors {
                background_primary: "#ffffff".to_string(),
                background_secondary: "#f4f5f5".to_string(),
                border_weak: "rgba(36, 41, 46, 0.12)".to_string(),
                text_primary: "#24292e".to_string(),
                text_secondary: "rgba(36, 41, 46, 0.75)".to_string(),
                action_hover: "rgba(36, 41, 46, 0.12)".to_string(),
            },
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// CSS length shorthand for grid multiples, e.g. `[0, 1, 0, 4]` -> `0px 8px 0px 32px`
    pub fn spacing(&self, parts: &[f32]) -> String {
        parts
            .iter()
            .map(|part| format!("{}px", part * self.spacing_grid))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Stylesheet for every chrome class, keyed to `theme`
pub fn stylesheet(theme: &Theme) -> String {
    let c = &theme.colors;
    let mut css = String::new();

    css.push_str(&format!(
        ".nav-toolbar {{ height: {height}px; display: flex; padding: {padding}; align-items: center; \
         flex-shrink: 0; border-bottom: 1px solid {border}; background: {bg}; color: {text}; }}\n",
        height = TOP_BAR_LEVEL_HEIGHT,
        padding = theme.spacing(&[0.0, 1.0, 0.0, 4.0]),
        border = c.border_weak,
        bg = c.background_primary,
        text = c.text_primary,
    ));
    css.push_str(&format!(
        ".nav-toolbar-menu-button {{ display: flex; align-items: center; margin-right: {}; }}\n",
        theme.spacing(&[1.0])
    ));
    css.push_str(".nav-toolbar-breadcrumbs { display: flex; overflow: hidden; }\n");
    css.push_str(&format!(
        "@media (max-width: {}px) {{ .nav-toolbar-breadcrumbs {{ min-width: 50%; }} }}\n",
        theme.breakpoint_sm
    ));
    css.push_str(&format!(
        ".nav-toolbar-actions {{ display: flex; align-items: center; flex-wrap: nowrap; \
         justify-content: flex-end; padding-left: {}; flex-grow: 1; gap: {}; min-width: 0; }}\n",
        theme.spacing(&[1.0]),
        theme.spacing(&[0.5]),
    ));
    css.push_str(".body-drawer-open .nav-toolbar-actions { display: none; }\n");
    css.push_str(&format!(
        ".nav-toolbar-profile-button {{ padding: {}; }}\n\
         .nav-toolbar-profile-button img {{ border-radius: 50%; height: 24px; width: 24px; margin-right: 0; }}\n",
        theme.spacing(&[0.0, 0.25])
    ));

    css.push_str(&format!(
        ".breadcrumbs {{ display: flex; list-style: none; margin: 0; padding: 0; }}\n\
         .breadcrumb-item {{ display: flex; align-items: center; color: {secondary}; }}\n\
         .breadcrumb-item a {{ color: {secondary}; text-decoration: none; }}\n\
         .breadcrumb-item-current {{ color: {primary}; font-weight: 500; }}\n",
        secondary = c.text_secondary,
        primary = c.text_primary,
    ));

    css.push_str(&format!(
        ".icon-button, .toolbar-button {{ display: inline-flex; align-items: center; gap: {gap}; \
         background: none; border: none; color: {text}; cursor: pointer; }}\n\
         .icon-button:hover, .toolbar-button:hover {{ background: {hover}; }}\n\
         .toolbar-button-default {{ border: 1px solid {border}; border-radius: 2px; padding: {pad}; }}\n\
         .toolbar-button-narrow {{ padding: {narrow}; }}\n\
         .icon-button-xl {{ font-size: 24px; }}\n",
        gap = theme.spacing(&[0.5]),
        text = c.text_secondary,
        hover = c.action_hover,
        border = c.border_weak,
        pad = theme.spacing(&[0.0, 1.0]),
        narrow = theme.spacing(&[0.0, 0.5]),
    ));

    css.push_str(&format!(
        ".dropdown {{ position: relative; display: inline-flex; }}\n\
         .dropdown-overlay {{ position: absolute; top: 100%; z-index: 10; background: {bg}; \
         border: 1px solid {border}; min-width: 200px; }}\n\
         .dropdown-bottom-end {{ right: 0; }}\n\
         .dropdown-bottom-start {{ left: 0; }}\n\
         .dropdown-bottom {{ left: 50%; transform: translateX(-50%); }}\n",
        bg = c.background_secondary,
        border = c.border_weak,
    ));

    css.push_str(&format!(
        ".news-drawer, .command-palette, .mega-menu {{ background: {bg}; color: {text}; \
         border: 1px solid {border}; padding: {pad}; }}\n\
         .news-drawer {{ position: fixed; top: {height}px; right: 0; bottom: 0; width: 420px; overflow-y: auto; }}\n\
         .command-palette {{ position: fixed; top: 15%; left: 50%; transform: translateX(-50%); width: 640px; }}\n\
         .mega-menu {{ width: 300px; flex-shrink: 0; }}\n",
        bg = c.background_secondary,
        text = c.text_primary,
        border = c.border_weak,
        pad = theme.spacing(&[2.0]),
        height = TOP_BAR_LEVEL_HEIGHT,
    ));

    css
}
