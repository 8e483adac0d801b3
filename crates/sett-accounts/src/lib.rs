pub mod error;
pub mod service;
pub mod valuation;

pub use error::AccountError;
pub use service::AccountService;
pub use valuation::{DEFAULT_REBASING_ASSET, summarize, value_sett_balance};
