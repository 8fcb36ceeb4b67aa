//! Configuration loader for declarative deployment documents.
//!
//! Responsibilities:
//! - Read and parse a configuration source from disk.
//! - Provide a builder-pattern `ConfigLoader` for loader options (environment
//!   snapshot override, `.env` ingestion, inline-secret policy).
//! - Keep a missing file (`NotFound`) distinct from read, parse, and
//!   validation failures.
//!
//! Does NOT handle:
//! - Validation semantics (see `validate.rs`, a pure function).
//! - Anything beyond reading the source: no network calls, no writes.
//!
//! Invariants / Assumptions:
//! - Loading is single-shot and idempotent; the returned `Configuration` is
//!   immutable and never written back.
//! - `.env` ingestion happens only when `with_dotenv_path` was called, and
//!   never overrides real environment variables.

mod env;
mod error;
mod raw;
mod validate;

pub use env::{EnvVars, expand};
pub use error::{ConfigError, ValidationError, ValidationErrorKind};
pub use raw::{RawConfig, RawNetwork, RawNetworks};
pub use validate::{SecretPolicy, validate};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::types::Configuration;

/// Load a configuration from `path` with default options.
///
/// Convenience wrapper over [`ConfigLoader`]; resolves `${VAR}` references
/// against the current process environment.
pub fn load(path: impl AsRef<Path>) -> Result<Configuration, ConfigError> {
    ConfigLoader::new().load(path)
}

/// Builder for configuration loading options.
///
/// ```no_run
/// use soldeploy_config::{ConfigLoader, SecretPolicy};
///
/// let config = ConfigLoader::new()
///     .with_dotenv_path(".env")
///     .with_secret_policy(SecretPolicy::Deny)
///     .load("soldeploy.json")?;
/// # Ok::<(), soldeploy_config::ConfigError>(())
/// ```
#[derive(Debug, Default)]
pub struct ConfigLoader {
    env: Option<EnvVars>,
    dotenv_path: Option<PathBuf>,
    secret_policy: SecretPolicy,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit environment snapshot instead of the process
    /// environment. Primarily for tests.
    pub fn with_env(mut self, env: EnvVars) -> Self {
        self.env = Some(env);
        self
    }

    /// Merge variables from a `.env` file into the snapshot before
    /// validation. Real environment variables take precedence, and the
    /// `DOTENV_DISABLED` gate is honored.
    pub fn with_dotenv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dotenv_path = Some(path.into());
        self
    }

    /// Set how literal (non-`${VAR}`) credentials in the document are
    /// treated. Defaults to [`SecretPolicy::Warn`].
    pub fn with_secret_policy(mut self, policy: SecretPolicy) -> Self {
        self.secret_policy = policy;
        self
    }

    /// Read, parse, and validate the configuration source at `path`.
    pub fn load(self, path: impl AsRef<Path>) -> Result<Configuration, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let raw: RawConfig = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut env = self.env.unwrap_or_else(EnvVars::from_process);
        if let Some(dotenv_path) = &self.dotenv_path {
            env.merge_dotenv(dotenv_path)?;
        }

        let config = validate::validate_with_policy(&raw, &env, self.secret_policy)?;
        tracing::debug!(
            networks = config.networks.len(),
            solidity = %config.solidity,
            "configuration loaded"
        );
        Ok(config)
    }
}
