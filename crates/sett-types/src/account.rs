use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// USD valuation of a user's position in one sett.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultAccountView {
    pub id: String,
    pub name: String,
    pub asset: String,
    pub value: Decimal,
    pub earned_value: Decimal,
}

/// Aggregated account of a user across every sett they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccountSummary {
    pub id: String,
    pub value: Decimal,
    pub earned_value: Decimal,
    pub sett_accounts: Vec<VaultAccountView>,
}
