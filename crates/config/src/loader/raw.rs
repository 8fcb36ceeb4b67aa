//! Raw (unvalidated) document model.
//!
//! Responsibilities:
//! - Mirror the source document shape for serde, before any validation.
//! - Preserve duplicate network declarations instead of letting the default
//!   map semantics silently keep the last one, so validation can reject the
//!   conflict.
//!
//! Does NOT handle:
//! - Validation, env expansion, or file I/O (see `validate.rs`, `env.rs`,
//!   and `mod.rs`).
//!
//! Invariants:
//! - Unknown document keys are ignored; the external toolchain owns the
//!   wider schema.
//! - `Debug` output never includes raw `accounts` strings, which may hold
//!   literal key material.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// The source document, parsed but not yet validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    /// The declared compiler version, if any.
    pub solidity: Option<String>,
    /// Every declared network entry, duplicates included, in document order.
    #[serde(default)]
    pub networks: RawNetworks,
}

/// All `networks` entries in document order. Duplicate names are kept so
/// that validation can report them.
#[derive(Clone, Default)]
pub struct RawNetworks(pub Vec<(String, RawNetwork)>);

impl fmt::Debug for RawNetworks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|(name, _)| name))
            .finish()
    }
}

impl<'de> Deserialize<'de> for RawNetworks {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NetworksVisitor;

        impl<'de> Visitor<'de> for NetworksVisitor {
            type Value = RawNetworks;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of network name to network entry")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, entry)) = map.next_entry::<String, RawNetwork>()? {
                    entries.push((name, entry));
                }
                Ok(RawNetworks(entries))
            }
        }

        deserializer.deserialize_map(NetworksVisitor)
    }
}

/// One unvalidated network entry.
#[derive(Clone, Default, Deserialize)]
pub struct RawNetwork {
    pub url: Option<String>,
    pub accounts: Option<Vec<String>>,
}

impl fmt::Debug for RawNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawNetwork")
            .field("url", &self.url)
            .field(
                "accounts",
                &self.accounts.as_ref().map(|a| format!("[{} redacted]", a.len())),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_document_shape() {
        let raw: RawConfig = serde_json::from_str(
            r#"{
                "solidity": "0.8.17",
                "networks": {
                    "goerli": { "url": "https://example-rpc.test/v3/abc", "accounts": ["0xaa"] }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(raw.solidity.as_deref(), Some("0.8.17"));
        assert_eq!(raw.networks.0.len(), 1);
        assert_eq!(raw.networks.0[0].0, "goerli");
    }

    #[test]
    fn test_preserves_duplicate_network_declarations() {
        let raw: RawConfig = serde_json::from_str(
            r#"{
                "networks": {
                    "goerli": { "url": "https://one.test" },
                    "goerli": { "url": "https://two.test" }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(raw.networks.0.len(), 2);
        assert_eq!(raw.networks.0[0].0, "goerli");
        assert_eq!(raw.networks.0[1].0, "goerli");
    }

    #[test]
    fn test_missing_networks_defaults_to_empty() {
        let raw: RawConfig = serde_json::from_str(r#"{ "solidity": "0.8.17" }"#).unwrap();
        assert!(raw.networks.0.is_empty());
    }

    #[test]
    fn test_ignores_unknown_keys() {
        let raw: RawConfig = serde_json::from_str(
            r#"{
                "solidity": "0.8.17",
                "etherscan": { "apiKey": "irrelevant" },
                "networks": {}
            }"#,
        )
        .unwrap();
        assert_eq!(raw.solidity.as_deref(), Some("0.8.17"));
    }

    #[test]
    fn test_debug_redacts_account_strings() {
        let raw: RawConfig = serde_json::from_str(
            r#"{ "networks": { "goerli": { "url": "https://x.test", "accounts": ["secretkey"] } } }"#,
        )
        .unwrap();
        let debug_output = format!("{:?}", raw.networks.0[0].1);
        assert!(!debug_output.contains("secretkey"));
        assert!(debug_output.contains("redacted"));
    }
}
