use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sett_types::{SettSnapshot, TokenInfo, VaultBalanceRecord};

use crate::error::SubgraphError;

pub(crate) const USER_BALANCES_QUERY: &str = r"
query UserBalances($id: ID!) {
  user(id: $id) {
    settBalances {
      netShareDeposit
      grossDeposit
      grossWithdraw
      sett {
        id
        pricePerFullShare
        balance
        totalSupply
        token {
          id
          decimals
        }
      }
    }
  }
}
";

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'static str,
    pub variables: UserVariables<'a>,
}

#[derive(Debug, Serialize)]
pub struct UserVariables<'a> {
    pub id: &'a str,
}

impl<'a> GraphQlRequest<'a> {
    pub const fn user_balances(user_id: &'a str) -> Self {
        Self {
            query: USER_BALANCES_QUERY,
            variables: UserVariables { id: user_id },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct UserQueryData {
    pub user: Option<UserDTO>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    #[serde(default)]
    pub sett_balances: Vec<SettBalanceDTO>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettBalanceDTO {
    pub net_share_deposit: Decimal,
    pub gross_deposit: Decimal,
    pub gross_withdraw: Decimal,
    pub sett: SettDTO,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettDTO {
    pub id: String,
    pub price_per_full_share: Decimal,
    pub balance: Decimal,
    pub total_supply: Decimal,
    pub token: TokenDTO,
}

#[derive(Debug, Deserialize)]
pub struct TokenDTO {
    pub id: String,
    pub decimals: IntOrString,
}

/// Subgraphs expose `BigInt` as strings and `Int` as numbers, accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(u32),
    String(String),
}

impl TryFrom<IntOrString> for u32 {
    type Error = SubgraphError;

    fn try_from(value: IntOrString) -> Result<Self, Self::Error> {
        match value {
            IntOrString::Int(v) => Ok(v),
            IntOrString::String(s) => s.parse().map_err(|_| SubgraphError::InvalidField {
                field: "token.decimals",
                value: s,
            }),
        }
    }
}

impl TryFrom<SettBalanceDTO> for VaultBalanceRecord {
    type Error = SubgraphError;

    fn try_from(dto: SettBalanceDTO) -> Result<Self, Self::Error> {
        Ok(Self {
            sett: SettSnapshot {
                id: dto.sett.id,
                price_per_full_share: dto.sett.price_per_full_share,
                balance: dto.sett.balance,
                total_supply: dto.sett.total_supply,
                token: TokenInfo {
                    id: dto.sett.token.id,
                    decimals: dto.sett.token.decimals.try_into()?,
                },
            },
            net_share_deposit: dto.net_share_deposit,
            gross_deposit: dto.gross_deposit,
            gross_withdraw: dto.gross_withdraw,
        })
    }
}

impl GraphQlResponse<UserQueryData> {
    /// `Ok(None)` when the subgraph has no user entity for the queried id.
    pub fn into_user_balances(self) -> Result<Option<Vec<VaultBalanceRecord>>, SubgraphError> {
        if !self.errors.is_empty() {
            let messages: Vec<String> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(SubgraphError::GraphQl(messages.join("; ")));
        }

        let Some(user) = self.data.and_then(|data| data.user) else {
            return Ok(None);
        };

        user.sett_balances
            .into_iter()
            .map(VaultBalanceRecord::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn parse(json: &str) -> GraphQlResponse<UserQueryData> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_user_balances_are_mapped() {
        let response = parse(
            r#"{
                "data": {
                    "user": {
                        "settBalances": [{
                            "netShareDeposit": "100",
                            "grossDeposit": "50",
                            "grossWithdraw": "10",
                            "sett": {
                                "id": "0x19d97d8fa813ee2f51ad4b4e04ea08baf4dffc28",
                                "pricePerFullShare": "2000000000000000000",
                                "balance": "1000",
                                "totalSupply": "500",
                                "token": {
                                    "id": "0x3472a5a71965499acd81997a54bba8d852c6e53d",
                                    "decimals": "18"
                                }
                            }
                        }]
                    }
                }
            }"#,
        );

        let balances = response.into_user_balances().unwrap().unwrap();
        assert_eq!(balances.len(), 1);

        let record = &balances[0];
        assert_eq!(record.net_share_deposit, dec!(100));
        assert_eq!(record.gross_deposit, dec!(50));
        assert_eq!(record.gross_withdraw, dec!(10));
        assert_eq!(
            record.sett.price_per_full_share,
            Decimal::from(2_000_000_000_000_000_000_u64)
        );
        assert_eq!(record.sett.total_supply, dec!(500));
        assert_eq!(record.sett.token.decimals, 18);
    }

    #[test]
    fn test_numeric_decimals_are_accepted() {
        let response = parse(
            r#"{"data": {"user": {"settBalances": [{
                "netShareDeposit": "1", "grossDeposit": "1", "grossWithdraw": "0",
                "sett": {"id": "0x1", "pricePerFullShare": "1", "balance": "1", "totalSupply": "1",
                         "token": {"id": "0x2", "decimals": 9}}
            }]}}}"#,
        );

        let balances = response.into_user_balances().unwrap().unwrap();
        assert_eq!(balances[0].sett.token.decimals, 9);
    }

    #[test]
    fn test_null_user_is_none() {
        let response = parse(r#"{"data": {"user": null}}"#);
        assert!(response.into_user_balances().unwrap().is_none());

        let response = parse(r"{}");
        assert!(response.into_user_balances().unwrap().is_none());
    }

    #[test]
    fn test_graphql_errors_are_surfaced() {
        let response = parse(
            r#"{"data": null, "errors": [{"message": "indexing error"}, {"message": "timeout"}]}"#,
        );

        let err = response.into_user_balances().unwrap_err();
        assert!(matches!(err, SubgraphError::GraphQl(msg) if msg == "indexing error; timeout"));
    }

    #[test]
    fn test_invalid_decimals_are_rejected() {
        let response = parse(
            r#"{"data": {"user": {"settBalances": [{
                "netShareDeposit": "1", "grossDeposit": "1", "grossWithdraw": "0",
                "sett": {"id": "0x1", "pricePerFullShare": "1", "balance": "1", "totalSupply": "1",
                         "token": {"id": "0x2", "decimals": "eighteen"}}
            }]}}}"#,
        );

        let err = response.into_user_balances().unwrap_err();
        assert!(matches!(
            err,
            SubgraphError::InvalidField { field: "token.decimals", .. }
        ));
    }

    #[test]
    fn test_request_carries_user_id() {
        let request = GraphQlRequest::user_balances("0xabc");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["variables"]["id"], "0xabc");
        assert!(json["query"].as_str().unwrap().contains("settBalances"));
    }
}
