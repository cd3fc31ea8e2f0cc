mod breadcrumbs;
mod cli;
mod context;
mod i18n;
mod nav_model;
mod news;
mod search;
mod state;
mod theme;
mod views;

use dioxus::prelude::*;
use state::ChromeBootstrap;
use views::{AppChrome, ChromeRoot, Page};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppChrome)]
        #[route("/:..segments")]
        Page { segments: Vec<String> },
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;
    use state::CHROME_BOOTSTRAP;

    env_logger::init();

    let args = cli::Args::parse();
    let bootstrap = ChromeBootstrap::load(&args)?;
    log::info!(
        "Loaded {} navigation roots, {} translations, {} news items",
        bootstrap.nav.len(),
        bootstrap.translations.len(),
        bootstrap.news.len()
    );

    {
        let mut shared = CHROME_BOOTSTRAP.write().await;
        *shared = bootstrap;
    }

    let address = dioxus_cli_config::fullstack_address_or_localhost();
    let serve_config = ServeConfig::new().map_err(|e| format!("cannot load index.html: {:?}", e))?;
    let router = axum::Router::new().serve_dioxus_application(serve_config, App);

    let listener = tokio::net::TcpListener::bind(address).await?;
    log::info!("Navigation chrome available at http://{}", address);
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let bootstrap = use_resource(move || async move { get_chrome_bootstrap().await });

    match &*bootstrap.read() {
        None => rsx! {
            p { "Loading navigation..." }
        },
        Some(Ok(bootstrap)) => rsx! {
            ChromeRoot { bootstrap: bootstrap.clone() }
        },
        Some(Err(e)) => rsx! {
            p { class: "error-message", "Error loading navigation: {e}" }
        },
    }
}

#[server]
async fn get_chrome_bootstrap() -> Result<ChromeBootstrap, ServerFnError> {
    let bootstrap = crate::state::CHROME_BOOTSTRAP.read().await;
    Ok(bootstrap.clone())
}
