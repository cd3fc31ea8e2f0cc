//! Command line arguments of the chrome server

use crate::theme::ThemeMode;
use std::path::PathBuf;

#[derive(clap::Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON file holding the navigation tree (array of root nodes)
    #[arg(long)]
    pub nav: PathBuf,
    /// JSON object mapping translation keys to strings
    #[arg(long)]
    pub translations: Option<PathBuf>,
    /// JSON array of news items shown in the notifications drawer
    #[arg(long)]
    pub news: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = ThemeMode::Dark)]
    pub theme: ThemeMode,
    #[arg(long, default_value_t = String::from("admin"))]
    pub user_login: String,
    #[arg(long, default_value_t = String::from("/public/img/user_profile.png"))]
    pub gravatar_url: String,
}
