//! Compiler version specification.
//!
//! Responsibilities:
//! - Define `CompilerSpec`, the semantic version of the contract-language
//!   compiler the external toolchain should invoke.
//! - Serialize to and from the plain string form used in the document
//!   (`"0.8.17"`).
//!
//! Does NOT handle:
//! - Compiler discovery or invocation (owned by the external toolchain).
//!
//! Invariants:
//! - The version always matches `MAJOR.MINOR.PATCH`; anything else is
//!   rejected at parse time.

use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The semantic version of the contract compiler to target.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompilerSpec(Version);

impl CompilerSpec {
    /// The parsed semantic version.
    pub fn version(&self) -> &Version {
        &self.0
    }
}

impl FromStr for CompilerSpec {
    type Err = semver::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s.trim()).map(Self)
    }
}

impl fmt::Display for CompilerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_major_minor_patch() {
        let spec: CompilerSpec = "0.8.17".parse().unwrap();
        assert_eq!(spec.version().major, 0);
        assert_eq!(spec.version().minor, 8);
        assert_eq!(spec.version().patch, 17);
        assert_eq!(spec.to_string(), "0.8.17");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let spec: CompilerSpec = " 0.8.17 ".parse().unwrap();
        assert_eq!(spec.to_string(), "0.8.17");
    }

    #[test]
    fn test_rejects_partial_versions() {
        assert!("0.8".parse::<CompilerSpec>().is_err());
        assert!("".parse::<CompilerSpec>().is_err());
        assert!("latest".parse::<CompilerSpec>().is_err());
        assert!("v0.8.17".parse::<CompilerSpec>().is_err());
    }

    #[test]
    fn test_serde_round_trips_as_plain_string() {
        let spec: CompilerSpec = "0.8.17".parse().unwrap();
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, "\"0.8.17\"");
        let back: CompilerSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
