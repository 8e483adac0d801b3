use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::{Decimal, dec};
use sett_accounts::AccountService;
use sett_api::{AppState, app};
use sett_quoting::{PriceSource, PriceTable, QuotingError};
use sett_registry::VaultRegistry;
use sett_subgraph::{SubgraphError, UserDataSource};
use sett_types::{SettSnapshot, TokenInfo, VaultBalanceRecord, VaultConfig};
use tower::ServiceExt;

const USER: &str = "0xd1f10e6ad92e2a2f7fd4a3b7baeb4e9b6f6d5a2c";
const BADGER_SETT: &str = "0x19d97d8fa813ee2f51ad4b4e04ea08baf4dffc28";
const BADGER: &str = "0x3472a5a71965499acd81997a54bba8d852c6e53d";

struct FixedUserData;

#[async_trait]
impl UserDataSource for FixedUserData {
    async fn fetch_user_balances(
        &self,
        user_id: &str,
    ) -> Result<Option<Vec<VaultBalanceRecord>>, SubgraphError> {
        match user_id {
            USER => Ok(Some(vec![VaultBalanceRecord {
                sett: SettSnapshot {
                    id: BADGER_SETT.to_string(),
                    price_per_full_share: Decimal::from(2_000_000_000_000_000_000_u64),
                    balance: dec!(1000),
                    total_supply: dec!(500),
                    token: TokenInfo {
                        id: BADGER.to_string(),
                        decimals: 0,
                    },
                },
                net_share_deposit: dec!(100),
                gross_deposit: dec!(50),
                gross_withdraw: dec!(10),
            }])),
            "0xunregistered" => Ok(Some(vec![VaultBalanceRecord {
                sett: SettSnapshot {
                    id: "0xdead".to_string(),
                    price_per_full_share: dec!(1),
                    balance: dec!(1),
                    total_supply: dec!(1),
                    token: TokenInfo {
                        id: BADGER.to_string(),
                        decimals: 0,
                    },
                },
                net_share_deposit: dec!(1),
                gross_deposit: dec!(1),
                gross_withdraw: dec!(0),
            }])),
            _ => Ok(None),
        }
    }
}

struct FixedPrices;

#[async_trait]
impl PriceSource for FixedPrices {
    async fn fetch_prices(&self) -> Result<PriceTable, QuotingError> {
        Ok(PriceTable::from(vec![(BADGER.to_string(), dec!(3))]))
    }
}

fn test_app() -> axum::Router {
    let registry = VaultRegistry::new(vec![VaultConfig::new(
        "0x19D97D8fA813EE2f51aD4B4e04EA08bAf4DFfC28",
        "Badger",
        "BADGER",
    )])
    .unwrap();
    let accounts = AccountService::new(
        Arc::new(FixedUserData),
        Arc::new(FixedPrices),
        Arc::new(registry),
    );

    app(AppState {
        accounts: Arc::new(accounts),
    })
}

async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn health_is_ok() {
    let (status, _) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn user_account_is_returned() {
    let checksummed = "0xD1F10E6AD92E2A2F7FD4A3B7BAEB4E9B6F6D5A2C";
    let (status, body) = get(&format!("/v1/users/{checksummed}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let account = &body["data"];
    assert_eq!(account["id"], checksummed);
    assert_eq!(account["value"], "600");
    assert_eq!(account["earnedValue"], "480");
    assert_eq!(account["settAccounts"][0]["name"], "Badger");
    assert_eq!(account["settAccounts"][0]["asset"], "BADGER");
    assert_eq!(account["settAccounts"][0]["value"], "600");
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let (status, body) = get("/v1/users/0xNobody").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(body["msg"], "0xNobody is not a protocol participant");
}

#[tokio::test]
async fn blank_user_is_a_bad_request() {
    let (status, body) = get("/v1/users/%20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn unregistered_sett_is_a_server_error() {
    let (status, body) = get("/v1/users/0xUnregistered").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["msg"], "Unable to fetch user account");
}

#[tokio::test]
async fn setts_are_listed() {
    let (status, body) = get("/v1/setts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], "0x19D97D8fA813EE2f51aD4B4e04EA08bAf4DFfC28");
    assert_eq!(body["data"][0]["asset"], "BADGER");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = get("/v1/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
