//! Configuration Loader - File Loading, Environment and Validation
//!
//! Handles loading `config.toml`, picking up the operator key from the
//! environment, and validating parameters with clear error messages.

use std::env::VarError;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use candid::Principal;
use tracing::debug;

use super::AppConfig;

/// Environment variable holding the operator key.
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY_HEX";

/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "CLEARING_HOUSE_CONFIG";

/// Default config file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  parse_config(&content)
}

/// Like [`load_config`], but a missing file yields the defaults.
///
/// # Errors
/// Unreadable (other than missing) or invalid files are still errors.
pub fn load_config_or_default(path: &str) -> Result<AppConfig> {
  if Path::new(path).exists() {
    load_config(path)
  } else {
    debug!(path, "Config file not found, using defaults");
    let config = AppConfig::default();
    validate_config(&config)?;
    Ok(config)
  }
}

/// Parse and validate configuration from TOML text.
///
/// # Errors
/// Fails on malformed TOML or invalid values.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig =
    toml::from_str(content).with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;

  Ok(config)
}

/// Read the operator configuration for this process.
///
/// Loads `.env` if present, resolves the config path from
/// `CLEARING_HOUSE_CONFIG`, and attaches `PRIVATE_KEY_HEX`. This is the
/// only place the process environment is read.
///
/// # Errors
/// Propagates config file errors, a malformed or unreadable `.env`, and
/// environment values that are not valid UTF-8.
pub fn load_from_env() -> Result<AppConfig> {
  check_dotenv(dotenvy::dotenv())?;

  let path = optional_env(CONFIG_PATH_ENV, std::env::var(CONFIG_PATH_ENV))?
    .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
  let config = load_config_or_default(&path)?;

  let private_key = optional_env(PRIVATE_KEY_ENV, std::env::var(PRIVATE_KEY_ENV))?;
  Ok(config.with_private_key(private_key))
}

/// A missing `.env` is normal in production; anything else is not.
fn check_dotenv(result: std::result::Result<PathBuf, dotenvy::Error>) -> Result<()> {
  match result {
    Ok(path) => {
      debug!(path = %path.display(), "Loaded .env");
      Ok(())
    }
    Err(e) if e.not_found() => Ok(()),
    Err(e) => Err(e).context("Failed to load .env"),
  }
}

/// Unset is `None`; a set but non-UTF-8 value is an error.
fn optional_env(
  name: &str,
  value: std::result::Result<String, VarError>,
) -> Result<Option<String>> {
  match value {
    Ok(value) => Ok(Some(value)),
    Err(VarError::NotPresent) => Ok(None),
    Err(e @ VarError::NotUnicode(_)) => {
      Err(e).with_context(|| format!("{name} is set but unreadable"))
    }
  }
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty host
/// - A parseable canister principal
/// - A market specification that encodes cleanly
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.network.host.trim().is_empty(),
    "network.host must not be empty"
  );

  Principal::from_text(&config.network.canister_id).with_context(|| {
    format!(
      "network.canister_id is not a valid principal: {}",
      config.network.canister_id
    )
  })?;

  if let Some(market) = &config.market {
    anyhow::ensure!(
      !market.symbol.trim().is_empty(),
      "market.symbol must not be empty"
    );
    market
      .to_params()
      .with_context(|| format!("Invalid market specification for {}", market.symbol))?;
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::{DEFAULT_CANISTER_ID, DEFAULT_HOST};

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_missing_file_falls_back_to_defaults() {
    let config = load_config_or_default("nonexistent.toml").unwrap();
    assert_eq!(config.network.host, DEFAULT_HOST);
    assert_eq!(config.network.canister_id, DEFAULT_CANISTER_ID);
    assert!(!config.network.fetch_root_key);
    assert!(config.market.is_none());
    assert!(config.private_key_hex.is_none());
  }

  #[test]
  fn test_empty_file_uses_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config.operator.log_level, "info");
    assert!(!config.operator.json_logs);
  }

  #[test]
  fn test_local_replica_config() {
    let config = parse_config(
      r#"
      [operator]
      log_level = "debug"

      [network]
      host = "http://127.0.0.1:4943"
      canister_id = "bkyz2-fmaaa-aaaaa-qaaaq-cai"
      fetch_root_key = true
      "#,
    )
    .unwrap();

    assert_eq!(config.operator.log_level, "debug");
    assert_eq!(config.network.host, "http://127.0.0.1:4943");
    assert!(config.network.fetch_root_key);
  }

  #[test]
  fn test_private_key_is_never_read_from_file() {
    let config = parse_config(
      r#"
      private_key_hex = "00"
      "#,
    );
    // Unknown top-level keys are ignored, and the skipped field stays empty.
    assert!(config.unwrap().private_key_hex.is_none());
  }

  #[test]
  fn test_invalid_canister_id_rejected() {
    let err = parse_config(
      r#"
      [network]
      canister_id = "not a principal"
      "#,
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("canister_id"));
  }

  #[test]
  fn test_invalid_market_rejected() {
    let err = parse_config(
      r#"
      [market]
      symbol = "BTC"
      liquidation_factor = -0.01
      max_leverage_factor = 10.0
      max_reserve_factor = 0.5
      funding_factor = 2e-8
      funding_exponent_factor = 1.0
      longs_max_reserve_factor = 0.3
      shorts_max_reserve_factor = 0.3
      longs_base_borrowing_factor = 5e-9
      shorts_base_borrowing_factor = 5e-9
      longs_borrowing_exponent_factor = 1.0
      shorts_borrowing_exponent_factor = 1.0
      "#,
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("liquidationFactor"));
  }

  #[test]
  fn test_missing_dotenv_is_ignored() {
    let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
    assert!(check_dotenv(Err(missing)).is_ok());
    assert!(check_dotenv(Ok(PathBuf::from(".env"))).is_ok());
  }

  #[test]
  fn test_malformed_dotenv_is_an_error() {
    let malformed = dotenvy::Error::LineParse("PRIVATE_KEY_HEX='abc".to_string(), 16);
    let err = check_dotenv(Err(malformed)).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load .env"));

    let unreadable = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
    assert!(check_dotenv(Err(unreadable)).is_err());
  }

  #[test]
  fn test_unset_env_is_none() {
    let value = optional_env(PRIVATE_KEY_ENV, Err(VarError::NotPresent)).unwrap();
    assert!(value.is_none());

    let value = optional_env(PRIVATE_KEY_ENV, Ok("ab".to_string())).unwrap();
    assert_eq!(value.as_deref(), Some("ab"));
  }

  #[test]
  fn test_non_utf8_private_key_is_an_error() {
    let garbled = VarError::NotUnicode(std::ffi::OsString::from("\u{fffd}"));
    let err = optional_env(PRIVATE_KEY_ENV, Err(garbled)).unwrap_err();
    assert!(format!("{err:#}").contains("PRIVATE_KEY_HEX is set but unreadable"));
  }

  #[test]
  fn test_empty_private_key_is_absent() {
    let config = AppConfig::default().with_private_key(Some("  ".to_string()));
    assert!(config.private_key_hex.is_none());

    let config = AppConfig::default().with_private_key(Some("ab".to_string()));
    assert_eq!(config.private_key_hex.as_deref(), Some("ab"));
  }
}
