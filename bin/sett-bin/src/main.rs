mod cli;

use std::sync::Arc;

use crate::cli::SettCli;
use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use pragma_common::services::{Service, ServiceGroup};
use pragma_common::telemetry::init_telemetry;

use sett_accounts::AccountService;
use sett_api::{ApiService, AppState};
use sett_quoting::CoinGeckoClient;
use sett_registry::VaultRegistry;
use sett_subgraph::SubgraphClient;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let SettCli {
        otel_collector_endpoint,
        api_port,
        subgraph_url,
        prices_api_url,
        prices_api_key,
        price_tokens,
        sett_registry_path,
        rebasing_asset,
    } = SettCli::parse();

    let app_name = "sett_account_api";
    if let Err(e) = init_telemetry(app_name, otel_collector_endpoint) {
        panic!("Could not init telemetry: {e}");
    }

    let registry = match sett_registry_path {
        Some(path) => VaultRegistry::from_json_file(&path)
            .with_context(|| format!("Could not load sett registry {}", path.display()))?,
        None => VaultRegistry::badger_mainnet().context("Invalid built-in sett registry")?,
    };
    tracing::info!(setts = registry.len(), "Sett registry ready");

    let subgraph =
        SubgraphClient::new(subgraph_url.as_str()).context("Could not init the subgraph client")?;
    let prices = CoinGeckoClient::new(prices_api_url.as_str(), prices_api_key, price_tokens)
        .context("Could not init the price client")?;
    if prices.tokens().is_empty() {
        tracing::warn!("No price tokens configured, every position will be valued at zero");
    }
    tracing::info!(
        tokens = prices.tokens().len(),
        "Quoting underlying tokens from {prices_api_url}"
    );

    let accounts = AccountService::new(Arc::new(subgraph), Arc::new(prices), Arc::new(registry))
        .with_rebasing_asset(rebasing_asset);

    let app_state = AppState {
        accounts: Arc::new(accounts),
    };

    let api_service = ApiService::new(app_state, "0.0.0.0", api_port);

    ServiceGroup::default()
        .with_critical(api_service)
        .start_and_drive_to_end()
        .await?;

    Ok(())
}
