mod builtin;
pub mod error;

use std::{collections::HashMap, path::Path};

use sett_types::VaultConfig;

pub use error::RegistryError;

/// Immutable, ordered set of the setts this service knows about.
///
/// Lookups are case-insensitive on the sett token address: the subgraph
/// returns lowercase ids while configuration files usually carry checksummed
/// addresses.
#[derive(Debug, Clone, Default)]
pub struct VaultRegistry {
    setts: Vec<VaultConfig>,
    by_address: HashMap<String, usize>,
}

impl VaultRegistry {
    pub fn new(setts: Vec<VaultConfig>) -> Result<Self, RegistryError> {
        let mut by_address = HashMap::with_capacity(setts.len());
        for (idx, sett) in setts.iter().enumerate() {
            let key = sett.sett_token.to_lowercase();
            if by_address.insert(key, idx).is_some() {
                return Err(RegistryError::DuplicateSett(sett.sett_token.clone()));
            }
        }

        Ok(Self { setts, by_address })
    }

    /// Parse a JSON array of `{ "settToken", "name", "symbol" }` objects.
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let setts: Vec<VaultConfig> = serde_json::from_str(json)?;
        Self::new(setts)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let registry = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            setts = registry.len(),
            "Loaded sett registry"
        );
        Ok(registry)
    }

    /// Setts deployed by Badger on Ethereum mainnet.
    pub fn badger_mainnet() -> Result<Self, RegistryError> {
        let setts = builtin::BADGER_MAINNET_SETTS
            .iter()
            .map(|(address, name, symbol)| VaultConfig::new(address, name, symbol))
            .collect();
        Self::new(setts)
    }

    pub fn find(&self, sett_token: &str) -> Option<&VaultConfig> {
        self.by_address
            .get(&sett_token.to_lowercase())
            .map(|&idx| &self.setts[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &VaultConfig> {
        self.setts.iter()
    }

    pub const fn len(&self) -> usize {
        self.setts.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.setts.is_empty()
    }
}
