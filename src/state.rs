//! Configuration shared by the server with every client
//!
//! The server loads the bootstrap once at startup. Clients fetch it through
//! `get_chrome_bootstrap` and turn it into the contexts the views read.

use crate::i18n::Translations;
use crate::nav_model::NavModelItem;
use crate::news::NewsItem;
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Signed-in user, as shown by the profile button
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CurrentUser {
    pub login: String,
    pub gravatar_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ChromeBootstrap {
    pub nav: Vec<NavModelItem>,
    pub translations: Translations,
    pub news: Vec<NewsItem>,
    pub user: CurrentUser,
    pub theme: ThemeMode,
}

#[derive(Debug)]
pub enum ChromeError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ChromeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChromeError::Io(e) => write!(f, "cannot read configuration file: {}", e),
            ChromeError::Parse(e) => write!(f, "invalid configuration file: {}", e),
        }
    }
}

impl std::error::Error for ChromeError {}

impl From<std::io::Error> for ChromeError {
    fn from(e: std::io::Error) -> Self {
        ChromeError::Io(e)
    }
}

impl From<serde_json::Error> for ChromeError {
    fn from(e: serde_json::Error) -> Self {
        ChromeError::Parse(e)
    }
}

impl ChromeBootstrap {
    pub fn load(args: &crate::cli::Args) -> Result<Self, ChromeError> {
        let nav: Vec<NavModelItem> = read_json(&args.nav)?;
        log::debug!("Loaded {} root navigation nodes from {}", nav.len(), args.nav.display());

        let translations = match &args.translations {
            Some(path) => read_json(path)?,
            None => Translations::default(),
        };
        let news = match &args.news {
            Some(path) => read_json(path)?,
            None => Vec::new(),
        };

        Ok(Self {
            nav,
            translations,
            news,
            user: CurrentUser {
                login: args.user_login.clone(),
                gravatar_url: args.gravatar_url.clone(),
            },
            theme: args.theme,
        })
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ChromeError> {
    let raw = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&raw)?;
    Ok(value)
}

#[cfg(feature = "server")]
use lazy_static::lazy_static;
#[cfg(feature = "server")]
use std::sync::Arc;

// Singleton
#[cfg(feature = "server")]
lazy_static! {
    pub static ref CHROME_BOOTSTRAP: Arc<tokio::sync::RwLock<ChromeBootstrap>> =
        Arc::new(tokio::sync::RwLock::new(ChromeBootstrap::default()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("navchrome-{}-{}", std::process::id(), name));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_bootstrap() {
        let nav = write_temp(
            "nav.json",
            r#"[{ "id": "home", "text": "Home", "url": "/" }, { "id": "profile", "text": "admin" }]"#,
        );
        let translations = write_temp("i18n.json", r#"{ "navigation.toolbar.toggle-menu": "Menu" }"#);
        let args = Args::parse_from(vec![
            "navchrome".to_string(),
            "--nav".to_string(),
            nav.display().to_string(),
            "--translations".to_string(),
            translations.display().to_string(),
        ]);

        let bootstrap = ChromeBootstrap::load(&args).unwrap();
        assert_eq!(bootstrap.nav.len(), 2);
        assert_eq!(bootstrap.translations.len(), 1);
        assert!(bootstrap.news.is_empty());
        assert_eq!(bootstrap.user.login, "admin");
        assert_eq!(bootstrap.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let args = Args::parse_from(vec!["navchrome", "--nav", "/definitely/not/here.json"]);
        let err = ChromeBootstrap::load(&args).unwrap_err();
        assert!(matches!(err, ChromeError::Io(_)));
        assert!(err.to_string().starts_with("cannot read configuration file"));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let nav = write_temp("broken.json", "{ not json");
        let args = Args::parse_from(vec![
            "navchrome".to_string(),
            "--nav".to_string(),
            nav.display().to_string(),
        ]);
        let err = ChromeBootstrap::load(&args).unwrap_err();
        assert!(matches!(err, ChromeError::Parse(_)));
    }
}
