//! Pharmacy NPI to chain name directory.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Chain name reported for an NPI that has no directory entry.
pub const UNKNOWN_CHAIN: &str = "Unknown";

/// Read-only lookup from pharmacy NPI to the chain it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PharmacyDirectory {
    chains: HashMap<String, String>,
}

impl PharmacyDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `npi` as part of `chain`, replacing any earlier entry.
    pub fn insert(&mut self, npi: impl Into<String>, chain: impl Into<String>) {
        self.chains.insert(npi.into(), chain.into());
    }

    /// Chain for `npi`, if the directory knows it.
    pub fn get(&self, npi: &str) -> Option<&str> {
        self.chains.get(npi).map(String::as_str)
    }

    /// Chain for `npi`, falling back to [`UNKNOWN_CHAIN`].
    pub fn chain_for(&self, npi: &str) -> &str {
        self.get(npi).unwrap_or(UNKNOWN_CHAIN)
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PharmacyDirectory
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut directory = Self::new();
        directory.extend(iter);
        directory
    }
}

impl<K, V> Extend<(K, V)> for PharmacyDirectory
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (npi, chain) in iter {
            self.insert(npi, chain);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_for_falls_back_to_unknown() {
        let directory: PharmacyDirectory = [("1234", "Health Mart")].into_iter().collect();
        assert_eq!(directory.chain_for("1234"), "Health Mart");
        assert_eq!(directory.chain_for("9999"), UNKNOWN_CHAIN);
        assert_eq!(directory.get("9999"), None);
    }

    #[test]
    fn later_entry_replaces_earlier() {
        let mut directory = PharmacyDirectory::new();
        directory.insert("1234", "Doctor.com");
        directory.insert("1234", "Saint Francis");
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.chain_for("1234"), "Saint Francis");
    }
}
