pub mod account;
pub mod balance;
pub mod sett;

pub use account::{UserAccountSummary, VaultAccountView};
pub use balance::{SettSnapshot, TokenInfo, VaultBalanceRecord};
pub use sett::VaultConfig;
