//! Centralized constants for the soldeploy workspace.
//!
//! This module contains fixed values used across the configuration
//! component to avoid magic number duplication and improve maintainability.

// =============================================================================
// Credential Format
// =============================================================================

/// Number of hexadecimal characters in a raw secp256k1 private key (32 bytes).
pub const PRIVATE_KEY_HEX_LEN: usize = 64;

/// Optional prefix accepted (and stripped) on hexadecimal private keys.
pub const HEX_PREFIX: &str = "0x";

// =============================================================================
// Placeholder Detection
// =============================================================================

/// Marker words that identify an instructional placeholder left unfilled by
/// the document author (e.g. `YOUR_INFURA_GOERLI_URL`). A value is treated as
/// a placeholder when it looks like a SHOUTING_SNAKE_CASE token containing
/// one of these words, or when it is wrapped in angle brackets.
pub const PLACEHOLDER_MARKERS: &[&str] = &["YOUR", "INSERT", "REPLACE", "CHANGEME", "FIXME", "TODO"];

// =============================================================================
// Environment
// =============================================================================

/// When set (to any value), `.env` ingestion is skipped entirely. Prevents a
/// developer's local `.env` from leaking into test runs.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Allowed URL schemes for network RPC endpoints.
pub const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "ws", "wss"];
