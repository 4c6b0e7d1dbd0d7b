//! Operator Script - Identity Check
//!
//! Single-shot procedure run by the binary: when an operator key is
//! configured, derive and print the principal it signs as. Without a key
//! the script does nothing and succeeds.

use anyhow::{Context, Result};
use candid::Principal;
use tracing::{debug, info};

use crate::adapters::identity::OperatorIdentity;
use crate::config::AppConfig;

/// What a run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOutcome {
  /// No key configured.
  Skipped,
  /// Key loaded; this is the operator principal.
  IdentityDerived(Principal),
}

/// Run the script against an explicit configuration.
///
/// # Errors
/// Fails when the configured key is malformed.
pub fn run(config: &AppConfig) -> Result<ScriptOutcome> {
  let Some(private_key_hex) = config.private_key_hex.as_deref() else {
    debug!("PRIVATE_KEY_HEX not set, nothing to do");
    return Ok(ScriptOutcome::Skipped);
  };

  let identity = OperatorIdentity::from_private_key_hex(private_key_hex)
    .context("Failed to load operator identity from PRIVATE_KEY_HEX")?;
  let principal = identity.principal();

  info!(principal = %principal, canister = %config.network.canister_id, "Operator identity loaded");
  println!("{principal}");

  Ok(ScriptOutcome::IdentityDerived(principal))
}
