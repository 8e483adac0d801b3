use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Underlying token of a sett.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub id: String,
    pub decimals: u32,
}

/// Sett-wide accounting as reported by the indexer at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettSnapshot {
    /// Sett token address
    pub id: String,
    /// Underlying redeemable per full share, scaled by 1e18
    pub price_per_full_share: Decimal,
    /// Total underlying held by the sett
    pub balance: Decimal,
    /// Total shares issued by the sett
    pub total_supply: Decimal,
    pub token: TokenInfo,
}

/// A single user's raw position in one sett.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultBalanceRecord {
    pub sett: SettSnapshot,
    /// Shares currently held
    pub net_share_deposit: Decimal,
    /// Lifetime deposited amount, in underlying base units
    pub gross_deposit: Decimal,
    /// Lifetime withdrawn amount, in underlying base units
    pub gross_withdraw: Decimal,
}
