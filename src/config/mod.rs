//! Configuration Module - TOML-based Operator Configuration
//!
//! Network endpoints and the optional market specification come from
//! `config.toml`; the operator key comes ONLY from the environment
//! (`PRIVATE_KEY_HEX`, optionally via `.env`). Every section has
//! defaults so a missing file still yields a usable mainnet config.

pub mod loader;

use serde::Deserialize;

use crate::domain::market_spec::MarketSpec;

/// Mainnet boundary node.
pub const DEFAULT_HOST: &str = "https://icp-api.io";

/// Production clearing-house canister.
pub const DEFAULT_CANISTER_ID: &str = "5ch5r-aiaaa-aaaao-a4pma-cai";

/// Top-level operator configuration.
///
/// Built once by [`loader`] and passed explicitly to the operator
/// script; nothing below reads the process environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Logging and identity metadata.
  #[serde(default)]
  pub operator: OperatorConfig,
  /// Where the clearing house lives.
  #[serde(default)]
  pub network: NetworkConfig,
  /// Market to provision (demo workflow).
  #[serde(default)]
  pub market: Option<MarketSpec>,
  /// Hex-encoded Ed25519 seed from `PRIVATE_KEY_HEX` (never from the file).
  #[serde(skip)]
  pub private_key_hex: Option<String>,
}

impl AppConfig {
  /// Replace the operator key, treating an empty value as absent.
  #[must_use]
  pub fn with_private_key(mut self, private_key_hex: Option<String>) -> Self {
    self.private_key_hex = private_key_hex.filter(|key| !key.trim().is_empty());
    self
  }
}

/// Operator process settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OperatorConfig {
  /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins.
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Emit JSON log lines instead of human-readable ones.
  #[serde(default)]
  pub json_logs: bool,
}

impl Default for OperatorConfig {
  fn default() -> Self {
    Self {
      log_level: default_log_level(),
      json_logs: false,
    }
  }
}

/// Clearing-house network location.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
  /// Boundary node or local replica URL.
  #[serde(default = "default_host")]
  pub host: String,
  /// Textual principal of the clearing-house canister.
  #[serde(default = "default_canister_id")]
  pub canister_id: String,
  /// Fetch the replica root key (local replicas only, NEVER mainnet).
  #[serde(default)]
  pub fetch_root_key: bool,
}

impl Default for NetworkConfig {
  fn default() -> Self {
    Self {
      host: default_host(),
      canister_id: default_canister_id(),
      fetch_root_key: false,
    }
  }
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

fn default_host() -> String {
  DEFAULT_HOST.to_string()
}

fn default_canister_id() -> String {
  DEFAULT_CANISTER_ID.to_string()
}
