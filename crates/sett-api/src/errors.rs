use crate::dto::ApiResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use sett_accounts::AccountError;
use thiserror::Error;

#[derive(Error, Debug, Serialize, Deserialize)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("Internal server error")]
    InternalServerError,
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match &err {
            AccountError::InvalidInput(msg) => Self::BadRequest(msg.clone()),
            AccountError::NotFound(_) => Self::NotFound(err.to_string()),
            AccountError::InternalInconsistency { .. } | AccountError::InvalidVaultData { .. } => {
                tracing::error!(error = %err, "Failed to compute user account");
                Self::Internal("Unable to fetch user account".to_string())
            }
            AccountError::UserData(_) | AccountError::Prices(_) => {
                // Don't expose upstream details to clients
                tracing::error!(error = %err, "Upstream fetch failed");
                Self::InternalServerError
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, msg) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            Self::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };
        let response: ApiResponse<()> = ApiResponse::error(msg);
        (status, Json(response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sett_subgraph::SubgraphError;

    fn status_of(err: AccountError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn test_account_errors_map_to_status_codes() {
        assert_eq!(
            status_of(AccountError::InvalidInput("userId is required".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AccountError::NotFound("0xAbC".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AccountError::InternalInconsistency {
                sett: "0x1".to_string()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AccountError::UserData(SubgraphError::GraphQl(
                "down".to_string()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message_names_the_user() {
        let err = ApiError::from(AccountError::NotFound("0xAbC".to_string()));
        assert!(matches!(err, ApiError::NotFound(msg) if msg == "0xAbC is not a protocol participant"));
    }
}
