//! IC Agent Construction - ic-agent Connection Management
//!
//! Builds the `ic-agent` HTTP agent that signs every call with the
//! operator identity. The root key is only fetched for local replicas;
//! mainnet's root key is compiled into the agent.

use anyhow::{Context, Result};
use ic_agent::Agent;
use tracing::{info, instrument, warn};

use crate::adapters::identity::OperatorIdentity;
use crate::config::NetworkConfig;

/// Build an agent for `network.host` signing as `identity`.
///
/// # Errors
/// Fails if the host URL is rejected by the agent builder or the root
/// key cannot be fetched.
#[instrument(skip_all, fields(host = %network.host))]
pub async fn connect_agent(network: &NetworkConfig, identity: OperatorIdentity) -> Result<Agent> {
  let principal = identity.principal();

  let agent = Agent::builder()
    .with_url(network.host.as_str())
    .with_identity(identity.into_inner())
    .build()
    .with_context(|| format!("Failed to build agent for {}", network.host))?;

  if network.fetch_root_key {
    warn!("Fetching replica root key (local replica only)");
    agent
      .fetch_root_key()
      .await
      .context("Failed to fetch replica root key")?;
  }

  info!(principal = %principal, "Agent ready");

  Ok(agent)
}
