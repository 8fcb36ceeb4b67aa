//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Keep `NotFound` distinct from read, parse, and validation failures so a
//!   missing file is never misreported.
//! - Carry the dotted field path on every validation failure so callers can
//!   print the specific field and reason before aborting a deployment.
//!
//! Does NOT handle:
//! - Recovery or default substitution. Ambiguous or insecure input must not
//!   silently proceed; every error surfaces to the caller of `load`.
//!
//! Invariants:
//! - No error variant ever embeds credential material. Paths, field names,
//!   and environment variable names only.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a configuration source.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The source path does not exist.
    #[error("configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// The source exists but could not be read (permissions, I/O failure).
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a well-formed declarative document.
    #[error("failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A requested `.env` file has invalid syntax.
    ///
    /// Only the byte index of the failure is reported, never the offending
    /// line content, to prevent leaking secrets.
    #[error("failed to parse .env file at {path} (position {error_index})")]
    DotenvParse { path: PathBuf, error_index: usize },

    /// A requested `.env` file could not be read.
    #[error("failed to read .env file {path}: {kind}")]
    DotenvIo {
        path: PathBuf,
        kind: std::io::ErrorKind,
    },

    /// The document parsed but a field failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A validation failure at a specific field of the document.
///
/// `field` is a dotted path into the source document, e.g.
/// `networks.goerli.url` or `networks.goerli.accounts[0]`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid configuration at `{field}`: {kind}")]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

/// The specific reason a field failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required field is absent.
    #[error("required field is missing")]
    MissingField,

    /// The compiler version is not `MAJOR.MINOR.PATCH`.
    #[error("malformed compiler version: {message}")]
    MalformedVersion { message: String },

    /// The endpoint URL is not a well-formed absolute URI.
    #[error("malformed endpoint URL: {message}")]
    MalformedUri { message: String },

    /// The value is an instructional placeholder left unfilled
    /// (e.g. `YOUR_INFURA_GOERLI_URL`).
    #[error("placeholder value was never filled in")]
    PlaceholderValue,

    /// A credential does not match the fixed-length hexadecimal
    /// private-key format.
    #[error("malformed credential: {message}")]
    MalformedCredential { message: String },

    /// A `${VAR}` reference names a variable that is unset (or the
    /// reference itself is unterminated).
    #[error("environment variable `{var}` is not set")]
    UnresolvedEnvReference { var: String },

    /// The same network name is declared more than once. Neither copy is
    /// authoritative, so the conflict is rejected instead of resolved.
    #[error("network `{name}` is declared more than once")]
    DuplicateNetwork { name: String },

    /// A credential appears as a literal in the document instead of an
    /// environment reference, and the loader's secret policy denies that.
    #[error("credential is embedded in plaintext; use a ${{VAR}} reference")]
    PlaintextSecret,
}
