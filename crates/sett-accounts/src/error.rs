use sett_quoting::QuotingError;
use sett_subgraph::SubgraphError;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0} is not a protocol participant")]
    NotFound(String),

    #[error("Sett {sett} is missing from the sett registry")]
    InternalInconsistency { sett: String },

    #[error("Cannot value sett {sett}: {reason}")]
    InvalidVaultData { sett: String, reason: String },

    #[error("Failed to fetch user balances: {0}")]
    UserData(#[from] SubgraphError),

    #[error("Failed to fetch prices: {0}")]
    Prices(#[from] QuotingError),
}

impl AccountError {
    pub(crate) fn invalid_vault_data(sett: &str, reason: impl Into<String>) -> Self {
        Self::InvalidVaultData {
            sett: sett.to_string(),
            reason: reason.into(),
        }
    }

    /// Errors caused by the caller rather than by the service or its upstreams.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::NotFound(_))
    }
}
