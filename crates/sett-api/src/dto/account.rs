use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use sett_types::{UserAccountSummary, VaultAccountView, VaultConfig};

/// A user's position in a single sett
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettAccount {
    /// Sett token address
    pub id: String,
    pub name: String,
    pub asset: String,
    /// Current position value in USD
    pub value: String,
    /// All-time earnings in USD
    pub earned_value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// User address, as requested
    pub id: String,
    pub as_of: DateTime<Utc>,
    pub value: String,
    pub earned_value: String,
    pub sett_accounts: Vec<SettAccount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Sett {
    pub id: String,
    pub name: String,
    pub asset: String,
}

impl From<VaultAccountView> for SettAccount {
    fn from(view: VaultAccountView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            asset: view.asset,
            value: view.value.normalize().to_string(),
            earned_value: view.earned_value.normalize().to_string(),
        }
    }
}

impl From<UserAccountSummary> for UserAccount {
    fn from(summary: UserAccountSummary) -> Self {
        Self {
            id: summary.id,
            as_of: Utc::now(),
            value: summary.value.normalize().to_string(),
            earned_value: summary.earned_value.normalize().to_string(),
            sett_accounts: summary
                .sett_accounts
                .into_iter()
                .map(SettAccount::from)
                .collect(),
        }
    }
}

impl From<&VaultConfig> for Sett {
    fn from(sett: &VaultConfig) -> Self {
        Self {
            id: sett.sett_token.clone(),
            name: sett.name.clone(),
            asset: sett.symbol.clone(),
        }
    }
}
