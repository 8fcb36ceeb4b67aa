//! Pure validation of a raw document into a `Configuration`.
//!
//! Responsibilities:
//! - Turn a parsed `RawConfig` into a fully validated `Configuration`, or
//!   fail with the specific field and reason.
//! - Resolve `${VAR}` references against the supplied snapshot before typed
//!   parsing.
//! - Enforce the loader's inline-secret policy.
//!
//! Does NOT handle:
//! - File I/O or JSON parsing (see `mod.rs`); this module is a pure function
//!   of its inputs and therefore idempotent.
//!
//! Invariants:
//! - Per field, checks run presence -> env expansion -> placeholder -> typed
//!   parse, so an unfilled sentinel reports as `PlaceholderValue` rather
//!   than as a malformed URI.
//! - Duplicate network declarations are rejected; neither copy wins.

use std::collections::BTreeMap;

use url::Url;

use crate::constants::{ALLOWED_URL_SCHEMES, PLACEHOLDER_MARKERS};
use crate::loader::env::{EnvVars, expand, is_env_reference};
use crate::loader::error::{ValidationError, ValidationErrorKind};
use crate::loader::raw::{RawConfig, RawNetwork};
use crate::types::{Configuration, NetworkEndpoint, PrivateKey};

/// How to treat credentials embedded as literals in the source document
/// instead of arriving through `${VAR}` indirection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SecretPolicy {
    /// Accept the literal but emit a `tracing` warning naming the field.
    #[default]
    Warn,
    /// Reject the document with `ValidationErrorKind::PlaintextSecret`.
    Deny,
}

/// Validate a raw document against the given environment snapshot.
///
/// Pure and idempotent: no I/O, and the same inputs always produce the same
/// result. Uses the default [`SecretPolicy`].
pub fn validate(raw: &RawConfig, env: &EnvVars) -> Result<Configuration, ValidationError> {
    validate_with_policy(raw, env, SecretPolicy::default())
}

pub(crate) fn validate_with_policy(
    raw: &RawConfig,
    env: &EnvVars,
    policy: SecretPolicy,
) -> Result<Configuration, ValidationError> {
    let solidity = validate_compiler(raw.solidity.as_deref())?;

    let mut networks = BTreeMap::new();
    for (name, entry) in &raw.networks.0 {
        if networks.contains_key(name) {
            return Err(ValidationError::new(
                format!("networks.{name}"),
                ValidationErrorKind::DuplicateNetwork { name: name.clone() },
            ));
        }
        let endpoint = validate_network(name, entry, env, policy)?;
        networks.insert(name.clone(), endpoint);
    }

    Ok(Configuration { solidity, networks })
}

fn validate_compiler(
    raw: Option<&str>,
) -> Result<crate::types::CompilerSpec, ValidationError> {
    let raw = raw.ok_or_else(|| {
        ValidationError::new("solidity", ValidationErrorKind::MissingField)
    })?;
    raw.parse().map_err(|e: semver::Error| {
        ValidationError::new(
            "solidity",
            ValidationErrorKind::MalformedVersion {
                message: e.to_string(),
            },
        )
    })
}

fn validate_network(
    name: &str,
    entry: &RawNetwork,
    env: &EnvVars,
    policy: SecretPolicy,
) -> Result<NetworkEndpoint, ValidationError> {
    let url_field = format!("networks.{name}.url");
    let raw_url = entry.url.as_deref().ok_or_else(|| {
        ValidationError::new(&url_field, ValidationErrorKind::MissingField)
    })?;
    let url = validate_url(raw_url, &url_field, env)?;

    let mut accounts = Vec::new();
    for (index, raw_key) in entry.accounts.iter().flatten().enumerate() {
        let field = format!("networks.{name}.accounts[{index}]");
        accounts.push(validate_credential(raw_key, &field, env, policy)?);
    }

    Ok(NetworkEndpoint {
        name: name.to_string(),
        url,
        accounts,
    })
}

fn validate_url(raw: &str, field: &str, env: &EnvVars) -> Result<Url, ValidationError> {
    let value = expand(raw, field, env)?;
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::new(field, ValidationErrorKind::MissingField));
    }
    if is_placeholder(trimmed) {
        return Err(ValidationError::new(
            field,
            ValidationErrorKind::PlaceholderValue,
        ));
    }

    let parsed = Url::parse(trimmed).map_err(|e| {
        ValidationError::new(
            field,
            ValidationErrorKind::MalformedUri {
                message: format!("must be an absolute URL (e.g. https://rpc.example.test): {e}"),
            },
        )
    })?;

    let scheme = parsed.scheme();
    if !ALLOWED_URL_SCHEMES.contains(&scheme) {
        return Err(ValidationError::new(
            field,
            ValidationErrorKind::MalformedUri {
                message: format!("scheme must be one of {ALLOWED_URL_SCHEMES:?}, got: {scheme}"),
            },
        ));
    }
    if parsed.host_str().is_none() {
        return Err(ValidationError::new(
            field,
            ValidationErrorKind::MalformedUri {
                message: "host is required".to_string(),
            },
        ));
    }

    Ok(parsed)
}

fn validate_credential(
    raw: &str,
    field: &str,
    env: &EnvVars,
    policy: SecretPolicy,
) -> Result<PrivateKey, ValidationError> {
    if !is_env_reference(raw) {
        match policy {
            SecretPolicy::Deny => {
                return Err(ValidationError::new(
                    field,
                    ValidationErrorKind::PlaintextSecret,
                ));
            }
            SecretPolicy::Warn => {
                tracing::warn!(
                    field = %field,
                    "credential is embedded in the document; prefer a ${{VAR}} reference"
                );
            }
        }
    }

    let value = expand(raw, field, env)?;
    let trimmed = value.trim();

    if is_placeholder(trimmed) {
        return Err(ValidationError::new(
            field,
            ValidationErrorKind::PlaceholderValue,
        ));
    }

    PrivateKey::parse(trimmed).map_err(|e| {
        ValidationError::new(
            field,
            ValidationErrorKind::MalformedCredential {
                message: e.to_string(),
            },
        )
    })
}

/// Whether a value is an instructional placeholder left unfilled by the
/// document author, e.g. `YOUR_INFURA_GOERLI_URL` or `<insert url here>`.
fn is_placeholder(value: &str) -> bool {
    if value.starts_with('<') && value.ends_with('>') {
        return true;
    }
    let shouting = value
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
    shouting
        && value
            .split('_')
            .any(|word| PLACEHOLDER_MARKERS.contains(&word))
}
