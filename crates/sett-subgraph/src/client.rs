use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use sett_types::VaultBalanceRecord;

use crate::{
    dto::{GraphQlRequest, GraphQlResponse, UserQueryData},
    error::SubgraphError,
    traits::UserDataSource,
};

/// GraphQL client for the Badger setts subgraph.
pub struct SubgraphClient {
    http_client: Client,
    endpoint: String,
}

impl SubgraphClient {
    pub fn new(endpoint: &str) -> Result<Self, SubgraphError> {
        let http_client = http_client()?;

        Ok(Self {
            http_client,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl UserDataSource for SubgraphClient {
    async fn fetch_user_balances(
        &self,
        user_id: &str,
    ) -> Result<Option<Vec<VaultBalanceRecord>>, SubgraphError> {
        let request = GraphQlRequest::user_balances(user_id);
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        let body: GraphQlResponse<UserQueryData> = serde_json::from_slice(&bytes)?;
        let balances = body.into_user_balances()?;

        tracing::debug!(
            user = user_id,
            setts = balances.as_ref().map_or(0, Vec::len),
            "Fetched user balances from subgraph"
        );

        Ok(balances)
    }
}

pub(crate) fn http_client() -> Result<Client, SubgraphError> {
    Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            SubgraphError::InternalServerError
        })
}
