//! Create Market Demo — Full Provisioning Workflow Against a Live Canister
//!
//! Creates the market from `[market]` in `config.toml` (BTC perpetual if
//! absent), reads back its details and prints them as JSON. Needs an admin
//! key in `PRIVATE_KEY_HEX`; the canister rejects `createNewMarket` from
//! anyone else.
//!
//! Run with: cargo run --example create_market
//!
//! Against a local replica, set `network.host`, `network.canister_id` and
//! `network.fetch_root_key = true`.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use clearing_house_ops::adapters::canister::{CanisterClient, connect_agent};
use clearing_house_ops::adapters::identity::OperatorIdentity;
use clearing_house_ops::config;
use clearing_house_ops::domain::market_spec::MarketSpec;
use clearing_house_ops::usecases::clearing_house_actor::ClearingHouseActor;
use clearing_house_ops::usecases::market_provisioner::MarketProvisioner;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::loader::load_from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.operator.log_level)),
        )
        .init();

    let private_key_hex = config
        .private_key_hex
        .as_deref()
        .context("PRIVATE_KEY_HEX must be set to create a market")?;
    let identity = OperatorIdentity::from_private_key_hex(private_key_hex)?;
    let operator = identity.principal();

    let agent = connect_agent(&config.network, identity).await?;
    let client = CanisterClient::from_text(agent, &config.network.canister_id)?;
    let actor = ClearingHouseActor::new(Arc::new(client));

    let spec = config.market.clone().unwrap_or_else(MarketSpec::btc_perpetual);
    let provisioner = MarketProvisioner::new(actor.clone());
    let market = provisioner.create(&spec).await?;

    info!(market_index = market.market_index, "Market provisioned");
    println!("{}", serde_json::to_string_pretty(&market.details)?);

    let snapshot = actor.query_market_details(market.market_index).await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    let balance = actor.get_user_balance(operator).await?;
    info!(operator = %operator, balance = %balance, "Operator balance");

    Ok(())
}
