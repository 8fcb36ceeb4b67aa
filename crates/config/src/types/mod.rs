//! Configuration types for the soldeploy toolchain.
//!
//! Responsibilities:
//! - Define the validated, immutable `Configuration` value and its parts.
//!
//! Does NOT handle:
//! - Loading or validating source documents (see the `loader` module).
//!
//! Invariants:
//! - A `Configuration` only ever exists fully validated; there is no partial
//!   or mutable state. Any change to the source requires reloading.

mod compiler;
mod network;

pub use compiler::CompilerSpec;
pub use network::{NetworkEndpoint, PrivateKey, PrivateKeyError};

use std::collections::BTreeMap;

use crate::loader::{ValidationError, ValidationErrorKind};

/// A fully validated configuration: one compiler spec plus the named
/// network targets. Immutable after load; `Clone` for read-only sharing
/// across consumers.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// The contract compiler version the toolchain should invoke.
    pub solidity: CompilerSpec,
    /// Network targets, keyed by their unique name.
    pub networks: BTreeMap<String, NetworkEndpoint>,
}

impl Configuration {
    /// Look up a network by name without any invariant checks.
    pub fn network(&self, name: &str) -> Option<&NetworkEndpoint> {
        self.networks.get(name)
    }

    /// Select a network for an active signing operation.
    ///
    /// Unlike [`Configuration::network`], this enforces that the endpoint
    /// has at least one credential, since an active operation cannot sign
    /// without one.
    pub fn select(&self, name: &str) -> Result<&NetworkEndpoint, ValidationError> {
        let endpoint = self.networks.get(name).ok_or_else(|| {
            ValidationError::new(format!("networks.{name}"), ValidationErrorKind::MissingField)
        })?;
        if endpoint.accounts.is_empty() {
            return Err(ValidationError::new(
                format!("networks.{name}.accounts"),
                ValidationErrorKind::MissingField,
            ));
        }
        Ok(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    const KEY: &str = "0a2f7c20c19c0cd313a4957c2280496423fdccd82ad5ca4aa99bcb9792c7cf4e";

    fn config_with(accounts: Vec<PrivateKey>) -> Configuration {
        let mut networks = BTreeMap::new();
        networks.insert(
            "goerli".to_string(),
            NetworkEndpoint {
                name: "goerli".to_string(),
                url: Url::parse("https://example-rpc.test/v3/abc").unwrap(),
                accounts,
            },
        );
        Configuration {
            solidity: "0.8.17".parse().unwrap(),
            networks,
        }
    }

    #[test]
    fn test_select_returns_endpoint_with_accounts() {
        let config = config_with(vec![PrivateKey::parse(KEY).unwrap()]);
        let endpoint = config.select("goerli").unwrap();
        assert_eq!(endpoint.name, "goerli");
        assert!(endpoint.first_account().is_some());
    }

    #[test]
    fn test_select_rejects_endpoint_without_accounts() {
        let config = config_with(vec![]);
        let err = config.select("goerli").unwrap_err();
        assert_eq!(err.field, "networks.goerli.accounts");
        assert_eq!(err.kind, ValidationErrorKind::MissingField);
    }

    #[test]
    fn test_select_rejects_unknown_network() {
        let config = config_with(vec![]);
        let err = config.select("mainnet").unwrap_err();
        assert_eq!(err.field, "networks.mainnet");
    }

    #[test]
    fn test_network_lookup_does_not_enforce_accounts() {
        let config = config_with(vec![]);
        assert!(config.network("goerli").is_some());
        assert!(config.network("mainnet").is_none());
    }
}
