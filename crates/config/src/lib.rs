//! Configuration loading for the soldeploy contract toolchain.
//!
//! This crate parses, validates, and exposes a typed [`Configuration`]
//! describing compiler settings and named network targets. Compilation,
//! network dispatch, and transaction signing are owned by the external
//! toolchain; this component only answers "what did the user declare, and
//! is it safe to act on".
//!
//! Loading is synchronous and single-shot: one blocking read, no retries,
//! no writes. The returned [`Configuration`] is immutable and can be shared
//! read-only across any number of consumers.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, EnvVars, RawConfig, RawNetwork, RawNetworks, SecretPolicy,
    ValidationError, ValidationErrorKind, expand, load, validate,
};
pub use types::{CompilerSpec, Configuration, NetworkEndpoint, PrivateKey, PrivateKeyError};
