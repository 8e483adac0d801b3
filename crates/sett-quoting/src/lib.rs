pub mod coingecko;
pub mod error;
mod price_table;
pub mod tokens;

pub use coingecko::CoinGeckoClient;
pub use error::QuotingError;
pub use price_table::PriceTable;
pub use tokens::badger_mainnet_price_tokens;

/// Source of current USD prices for underlying tokens.
#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch_prices(&self) -> Result<PriceTable, QuotingError>;
}
