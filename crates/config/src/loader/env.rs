//! Environment variable snapshot and `${VAR}` expansion.
//!
//! Responsibilities:
//! - Capture an immutable snapshot of environment variables so validation
//!   stays a pure function of its inputs.
//! - Expand `${VAR}` references inside document values.
//! - Merge `.env` files into the snapshot without mutating the process
//!   environment.
//!
//! Does NOT handle:
//! - Deciding which fields allow references (see `validate.rs`).
//!
//! Invariants:
//! - Empty or whitespace-only variables are treated as unset.
//! - Captured values are trimmed (leading/trailing whitespace removed).
//! - `.env` errors never include raw line contents to prevent secret leakage.
//! - The `DOTENV_DISABLED` gate is checked before any `.env` file is read.

use std::collections::HashMap;
use std::path::Path;

use crate::constants::DOTENV_DISABLED_VAR;
use crate::loader::error::{ConfigError, ValidationError, ValidationErrorKind};

/// Normalize a raw variable value: trim, and treat empty as unset.
fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// An immutable snapshot of environment variables.
///
/// Validation resolves `${VAR}` references against this snapshot rather than
/// the live process environment, which keeps `validate` pure and lets tests
/// supply variables without touching `std::env`.
#[derive(Debug, Clone, Default)]
pub struct EnvVars {
    vars: HashMap<String, String>,
}

impl EnvVars {
    /// An empty snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        let vars = std::env::vars()
            .filter_map(|(key, value)| normalize(&value).map(|v| (key, v)))
            .collect();
        Self { vars }
    }

    /// Build a snapshot from explicit pairs (primarily for tests).
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: AsRef<str>,
    {
        let vars = pairs
            .into_iter()
            .filter_map(|(key, value)| normalize(value.as_ref()).map(|v| (key.into(), v)))
            .collect();
        Self { vars }
    }

    /// Look up a variable. Unset, empty, and whitespace-only all read as `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Merge pairs from a `.env` file into the snapshot. Existing entries
    /// win: real environment variables take precedence over `.env` values.
    ///
    /// Honors the `DOTENV_DISABLED` gate; when set, the file is not read.
    pub fn merge_dotenv(&mut self, path: &Path) -> Result<(), ConfigError> {
        if self.vars.contains_key(DOTENV_DISABLED_VAR)
            || std::env::var_os(DOTENV_DISABLED_VAR).is_some()
        {
            tracing::debug!(path = %path.display(), "dotenv loading disabled, skipping");
            return Ok(());
        }

        for item in dotenvy::from_path_iter(path).map_err(|e| dotenv_error(path, e))? {
            let (key, value) = item.map_err(|e| dotenv_error(path, e))?;
            if self.vars.contains_key(&key) {
                continue;
            }
            if let Some(value) = normalize(&value) {
                self.vars.insert(key, value);
            }
        }
        Ok(())
    }
}

/// Map a dotenvy error without echoing any `.env` line content.
fn dotenv_error(path: &Path, error: dotenvy::Error) -> ConfigError {
    match error {
        dotenvy::Error::LineParse(_, index) => ConfigError::DotenvParse {
            path: path.to_path_buf(),
            error_index: index,
        },
        dotenvy::Error::Io(e) => ConfigError::DotenvIo {
            path: path.to_path_buf(),
            kind: e.kind(),
        },
        _ => ConfigError::DotenvParse {
            path: path.to_path_buf(),
            error_index: 0,
        },
    }
}

/// Expand `${VAR}` references in `value` against the snapshot.
///
/// Any reference to an unset variable fails with `UnresolvedEnvReference`
/// naming the variable; an unterminated `${` fails the same way. A `$` not
/// followed by `{` passes through literally.
pub fn expand(value: &str, field: &str, env: &EnvVars) -> Result<String, ValidationError> {
    if !value.contains("${") {
        return Ok(value.to_string());
    }

    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            return Err(ValidationError::new(
                field,
                ValidationErrorKind::UnresolvedEnvReference {
                    var: after.to_string(),
                },
            ));
        };
        let var = &after[..end];
        let resolved = env.get(var).ok_or_else(|| {
            ValidationError::new(
                field,
                ValidationErrorKind::UnresolvedEnvReference {
                    var: var.to_string(),
                },
            )
        })?;
        out.push_str(resolved);
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Whether the raw value routes through the environment at all. Used to tell
/// literal credentials apart from `${VAR}` indirection.
pub(crate) fn is_env_reference(value: &str) -> bool {
    value.contains("${")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_expand_passes_plain_values_through() {
        let env = EnvVars::empty();
        assert_eq!(
            expand("https://example-rpc.test/v3/abc", "networks.goerli.url", &env).unwrap(),
            "https://example-rpc.test/v3/abc"
        );
    }

    #[test]
    fn test_expand_substitutes_set_variable() {
        let env = EnvVars::from_pairs([("NETWORK_RPC_URL", "https://rpc.test")]);
        assert_eq!(
            expand("${NETWORK_RPC_URL}", "networks.goerli.url", &env).unwrap(),
            "https://rpc.test"
        );
    }

    #[test]
    fn test_expand_substitutes_inside_larger_value() {
        let env = EnvVars::from_pairs([("INFURA_KEY", "abc")]);
        assert_eq!(
            expand("https://rpc.test/v3/${INFURA_KEY}", "f", &env).unwrap(),
            "https://rpc.test/v3/abc"
        );
    }

    #[test]
    fn test_expand_fails_on_unset_variable() {
        let env = EnvVars::empty();
        let err = expand("${MISSING_VAR}", "networks.goerli.url", &env).unwrap_err();
        assert_eq!(err.field, "networks.goerli.url");
        assert_eq!(
            err.kind,
            ValidationErrorKind::UnresolvedEnvReference {
                var: "MISSING_VAR".to_string()
            }
        );
    }

    #[test]
    fn test_expand_fails_on_unterminated_reference() {
        let env = EnvVars::from_pairs([("VAR", "x")]);
        let err = expand("${VAR", "f", &env).unwrap_err();
        assert!(matches!(
            err.kind,
            ValidationErrorKind::UnresolvedEnvReference { .. }
        ));
    }

    #[test]
    fn test_expand_leaves_bare_dollar_alone() {
        let env = EnvVars::empty();
        assert_eq!(expand("cost$10", "f", &env).unwrap(), "cost$10");
    }

    #[test]
    fn test_empty_and_whitespace_variables_read_as_unset() {
        let env = EnvVars::from_pairs([("EMPTY", ""), ("BLANK", "   "), ("SET", " value ")]);
        assert!(env.get("EMPTY").is_none());
        assert!(env.get("BLANK").is_none());
        assert_eq!(env.get("SET"), Some("value"));
    }

    #[test]
    #[serial]
    fn test_from_process_sees_set_variable() {
        temp_env::with_vars([("_SOLDEPLOY_TEST_VAR", Some("hello"))], || {
            let env = EnvVars::from_process();
            assert_eq!(env.get("_SOLDEPLOY_TEST_VAR"), Some("hello"));
        });
    }

    #[test]
    #[serial]
    fn test_merge_dotenv_respects_disabled_gate() {
        let dir = tempfile::tempdir().unwrap();
        let dotenv_path = dir.path().join(".env");
        std::fs::write(&dotenv_path, "FROM_DOTENV=yes\n").unwrap();

        temp_env::with_vars([(DOTENV_DISABLED_VAR, Some("1"))], || {
            let mut env = EnvVars::empty();
            env.merge_dotenv(&dotenv_path).unwrap();
            assert!(env.get("FROM_DOTENV").is_none());
        });
    }

    #[test]
    #[serial]
    fn test_merge_dotenv_does_not_override_existing() {
        let dir = tempfile::tempdir().unwrap();
        let dotenv_path = dir.path().join(".env");
        std::fs::write(&dotenv_path, "SHARED=dotenv\nONLY_DOTENV=here\n").unwrap();

        temp_env::with_vars([(DOTENV_DISABLED_VAR, None::<&str>)], || {
            let mut env = EnvVars::from_pairs([("SHARED", "process")]);
            env.merge_dotenv(&dotenv_path).unwrap();
            assert_eq!(env.get("SHARED"), Some("process"));
            assert_eq!(env.get("ONLY_DOTENV"), Some("here"));
        });
    }
}
