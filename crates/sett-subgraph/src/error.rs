use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubgraphError {
    #[error("Internal server error")]
    InternalServerError,

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Subgraph query failed: {0}")]
    GraphQl(String),

    #[error("Invalid {field} in subgraph response: {value}")]
    InvalidField { field: &'static str, value: String },
}
