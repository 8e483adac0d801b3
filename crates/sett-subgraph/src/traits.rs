use sett_types::VaultBalanceRecord;

use crate::error::SubgraphError;

/// Source of indexed per-user sett balances.
#[async_trait::async_trait]
pub trait UserDataSource: Send + Sync {
    /// Returns `Ok(None)` when the source has no record of `user_id`.
    ///
    /// Ids are matched as-is, callers are expected to pass the normalized
    /// (lowercase) form used by the indexer.
    async fn fetch_user_balances(
        &self,
        user_id: &str,
    ) -> Result<Option<Vec<VaultBalanceRecord>>, SubgraphError>;
}
