pub mod client;
pub mod dto;
pub mod error;
pub mod traits;

pub use client::SubgraphClient;
pub use error::SubgraphError;
pub use traits::UserDataSource;
