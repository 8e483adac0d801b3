use std::path::PathBuf;

use clap::Parser;
use url::Url;

use sett_accounts::DEFAULT_REBASING_ASSET;
use sett_quoting::{badger_mainnet_price_tokens, coingecko::COINGECKO_API_URL};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct SettCli {
    /// OTEL collector endpoint
    #[arg(long, env = "OTEL_COLLECTOR_ENDPOINT")]
    pub otel_collector_endpoint: Option<String>,

    /// API port
    #[arg(long, env = "API_PORT", default_value = "8080")]
    pub api_port: u16,

    /// GraphQL endpoint of the setts subgraph
    #[arg(long, env = "SUBGRAPH_URL")]
    pub subgraph_url: Url,

    /// Base URL of the CoinGecko API
    #[arg(long = "prices-url", env = "PRICES_API_URL", default_value = COINGECKO_API_URL)]
    pub prices_api_url: Url,

    /// Optional CoinGecko API key
    #[arg(long, env = "PRICES_API_KEY")]
    pub prices_api_key: Option<String>,

    /// Underlying token addresses to quote in USD. Defaults to the tokens of
    /// the built-in mainnet setts
    #[arg(
        long = "price-tokens",
        env = "PRICE_TOKENS",
        value_delimiter = ',',
        value_name = "ADDRESS",
        default_values_t = badger_mainnet_price_tokens()
    )]
    pub price_tokens: Vec<String>,

    /// JSON file listing the known setts. Defaults to the built-in mainnet list
    #[arg(long, env = "SETT_REGISTRY_PATH")]
    pub sett_registry_path: Option<PathBuf>,

    /// Symbol of the rebasing asset valued from the sett balance/supply ratio
    #[arg(long, env = "REBASING_ASSET", default_value = DEFAULT_REBASING_ASSET)]
    pub rebasing_asset: String,
}
