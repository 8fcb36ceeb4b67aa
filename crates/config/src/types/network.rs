//! Network endpoint and signing credential types.
//!
//! Responsibilities:
//! - Define `NetworkEndpoint`, a named remote RPC target plus the ordered
//!   credentials used to sign transactions against it.
//! - Define `PrivateKey`, the fixed-length hexadecimal signing credential.
//!
//! Does NOT handle:
//! - Document parsing or field validation (see the `loader` module).
//! - Transaction signing or any network traffic (owned by the external
//!   toolchain).
//!
//! Invariants:
//! - All key material lives behind `secrecy::SecretString`; `Debug` output
//!   never reveals it.
//! - A `PrivateKey` always holds exactly 64 hexadecimal characters. The
//!   `0x` prefix is accepted on input and stripped.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

use crate::constants::{HEX_PREFIX, PRIVATE_KEY_HEX_LEN};

/// Why a credential string failed to parse as a private key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrivateKeyError {
    #[error("credential is empty")]
    Empty,

    #[error("expected {PRIVATE_KEY_HEX_LEN} hex characters, got {actual}")]
    Length { actual: usize },

    #[error("invalid hex at position {index}")]
    InvalidHex { index: usize },
}

/// A fixed-length hexadecimal private key used for transaction signing.
///
/// The key is stored exactly as it appeared in the source (prefix included)
/// so a loaded configuration reproduces its input verbatim.
#[derive(Clone)]
pub struct PrivateKey(SecretString);

impl PrivateKey {
    /// Parse a credential string, accepting an optional `0x` prefix.
    pub fn parse(raw: &str) -> Result<Self, PrivateKeyError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PrivateKeyError::Empty);
        }

        let digits = trimmed.strip_prefix(HEX_PREFIX).unwrap_or(trimmed);
        if digits.len() != PRIVATE_KEY_HEX_LEN {
            return Err(PrivateKeyError::Length {
                actual: digits.len(),
            });
        }
        if let Some(index) = digits.find(|c: char| !c.is_ascii_hexdigit()) {
            return Err(PrivateKeyError::InvalidHex { index });
        }

        // hex::decode is the authority on well-formedness; the checks above
        // exist to produce positional error messages.
        debug_assert!(hex::decode(digits).is_ok());

        Ok(Self(SecretString::new(trimmed.to_string().into())))
    }

    /// Expose the key material as it appeared in the source document.
    ///
    /// Callers own the responsibility of not logging the returned value.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// The key as 32 raw bytes, prefix stripped.
    pub fn to_bytes(&self) -> [u8; 32] {
        let exposed = self.0.expose_secret();
        let digits = exposed.strip_prefix(HEX_PREFIX).unwrap_or(exposed);
        let decoded = match hex::decode(digits) {
            Ok(bytes) => bytes,
            // Construction validated length and characters; a zeroed or
            // truncated key must never escape silently.
            Err(_) => unreachable!("private key hex was validated at construction"),
        };
        let mut out = [0u8; 32];
        out.copy_from_slice(&decoded);
        out
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// A named remote RPC target plus its signing credentials.
#[derive(Debug, Clone)]
pub struct NetworkEndpoint {
    /// The unique name of this network within the configuration.
    pub name: String,
    /// The RPC endpoint, already validated as an absolute http(s)/ws(s) URL.
    pub url: Url,
    /// Ordered signing credentials. May be empty at load time; selecting the
    /// endpoint for an active operation requires at least one (see
    /// `Configuration::select`).
    pub accounts: Vec<PrivateKey>,
}

impl NetworkEndpoint {
    /// The credential used by default for signing, if any.
    pub fn first_account(&self) -> Option<&PrivateKey> {
        self.accounts.first()
    }
}
