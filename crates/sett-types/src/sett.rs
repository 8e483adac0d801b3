use serde::{Deserialize, Serialize};

/// Static description of a known sett.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultConfig {
    /// Address of the sett (vault share) token
    pub sett_token: String,
    /// Display name, e.g. "Digg"
    pub name: String,
    /// Symbol of the deposited asset, e.g. "DIGG"
    pub symbol: String,
}

impl VaultConfig {
    pub fn new(sett_token: &str, name: &str, symbol: &str) -> Self {
        Self {
            sett_token: sett_token.to_owned(),
            name: name.to_owned(),
            symbol: symbol.to_owned(),
        }
    }
}
