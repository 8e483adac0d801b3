use std::sync::Arc;

use sett_quoting::PriceSource;
use sett_registry::VaultRegistry;
use sett_subgraph::UserDataSource;
use sett_types::UserAccountSummary;

use crate::{
    error::AccountError,
    valuation::{DEFAULT_REBASING_ASSET, summarize, value_sett_balance},
};

/// Builds user account summaries from subgraph balances and live prices.
pub struct AccountService {
    user_data: Arc<dyn UserDataSource>,
    prices: Arc<dyn PriceSource>,
    registry: Arc<VaultRegistry>,
    rebasing_asset: String,
}

impl AccountService {
    pub fn new(
        user_data: Arc<dyn UserDataSource>,
        prices: Arc<dyn PriceSource>,
        registry: Arc<VaultRegistry>,
    ) -> Self {
        Self {
            user_data,
            prices,
            registry,
            rebasing_asset: DEFAULT_REBASING_ASSET.to_string(),
        }
    }

    #[must_use]
    pub fn with_rebasing_asset(mut self, symbol: impl Into<String>) -> Self {
        self.rebasing_asset = symbol.into();
        self
    }

    pub fn registry(&self) -> &VaultRegistry {
        &self.registry
    }

    /// Retrieve a user's account: every sett position with its USD value and
    /// USD earnings, plus account-wide totals.
    pub async fn get_user_account_summary(
        &self,
        user_id: &str,
    ) -> Result<UserAccountSummary, AccountError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(AccountError::InvalidInput("userId is required".to_string()));
        }

        // The subgraph indexes addresses in lowercase
        let balances = self
            .user_data
            .fetch_user_balances(&user_id.to_lowercase())
            .await?
            .ok_or_else(|| AccountError::NotFound(user_id.to_string()))?;

        let prices = self.prices.fetch_prices().await?;

        let sett_accounts = balances
            .iter()
            .map(|record| {
                let sett = self.registry.find(&record.sett.id).ok_or_else(|| {
                    tracing::error!(
                        user = user_id,
                        sett = %record.sett.id,
                        "Sett missing from registry, configuration must be updated"
                    );
                    AccountError::InternalInconsistency {
                        sett: record.sett.id.clone(),
                    }
                })?;
                value_sett_balance(record, sett, &prices, &self.rebasing_asset)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let summary = summarize(user_id, sett_accounts)?;
        tracing::info!(
            user = user_id,
            setts = summary.sett_accounts.len(),
            value = %summary.value,
            earned_value = %summary.earned_value,
            "Computed user account"
        );

        Ok(summary)
    }
}
