use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::Deserialize;

use crate::{PriceSource, PriceTable, error::QuotingError};

pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

const API_KEY_HEADER: &str = "x-cg-demo-api-key";

// CoinGecko response structures
#[derive(Debug, Deserialize)]
struct TokenPrice {
    usd: Option<f64>,
}

type TokenPriceResponse = HashMap<String, TokenPrice>;

/// Quotes ERC20 tokens in USD through CoinGecko's `simple/token_price` endpoint.
pub struct CoinGeckoClient {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
    tokens: Vec<String>,
}

impl CoinGeckoClient {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        tokens: Vec<String>,
    ) -> Result<Self, QuotingError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                QuotingError::InternalServerError
            })?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            tokens,
        })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

#[async_trait]
impl PriceSource for CoinGeckoClient {
    async fn fetch_prices(&self) -> Result<PriceTable, QuotingError> {
        if self.tokens.is_empty() {
            return Ok(PriceTable::default());
        }

        let url = format!("{}/simple/token_price/ethereum", self.base_url);
        let contract_addresses = self.tokens.join(",");

        let mut request = self.http_client.get(&url).query(&[
            ("contract_addresses", contract_addresses.as_str()),
            ("vs_currencies", "usd"),
        ]);
        if let Some(api_key) = &self.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        let response = request.send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        let prices = parse_token_prices(&bytes)?;

        tracing::debug!(
            requested = self.tokens.len(),
            quoted = prices.len(),
            "Fetched token prices"
        );

        Ok(prices)
    }
}

fn parse_token_prices(body: &[u8]) -> Result<PriceTable, QuotingError> {
    let response: TokenPriceResponse = serde_json::from_slice(body)?;

    let mut table = PriceTable::default();
    for (token, price) in response {
        let Some(usd) = price.usd else {
            tracing::debug!("No USD quote for {token}");
            continue;
        };
        match Decimal::from_f64(usd) {
            Some(price) => {
                table.insert(&token, price);
            }
            None => tracing::debug!("Unrepresentable USD quote {usd} for {token}"),
        }
    }

    Ok(table)
}
