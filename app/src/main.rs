//! Headless demo entry point.
//!
//! Browses the first page of the popular listing against the configured
//! catalog backend and logs the result.

use std::sync::Arc;

use catalog_client::CatalogClient;
use gamelog::bootstrap;
use gamelog::config::AppConfig;
use gamelog::services::browse::GameBrowser;
use gamelog::services::navigation::MemoryNavigator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bootstrap::load_dotenv();
    bootstrap::init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(base_url = %config.api_base_url, "starting gamelog");

    let client = Arc::new(CatalogClient::new(&config.api_base_url));
    let nav = MemoryNavigator::new("/games");
    let mut browser = GameBrowser::new(client, nav);

    browser.sync();
    browser.settled().await;

    let result = browser.snapshot();
    match result.error {
        Some(err) => tracing::error!("{err}"),
        None => {
            tracing::info!(
                title = %browser.section_title(),
                count = result.games.len(),
                "fetched listing"
            );
            for game in &result.games {
                tracing::info!(id = %game.id, name = %game.name);
            }
        }
    }

    Ok(())
}
