//! Market Provisioner - Operator Workflows over the Facade
//!
//! Turns decimal operator inputs into wire parameters and drives the
//! facade: create a market and read back its details, fund the operator
//! account, seed market liquidity. Conversion errors are raised before
//! any remote call is issued.

use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

use crate::domain::fixed_point::to_wire_amount;
use crate::domain::market::{
  AddLiquidityParams, DepositParams, LiquidityOperationResult, MarketDetails,
};
use crate::domain::market_spec::MarketSpec;
use crate::ports::clearing_house::ClearingHouseService;
use crate::usecases::clearing_house_actor::ClearingHouseActor;

/// A freshly created market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedMarket {
  pub market_index: u64,
  pub details: MarketDetails,
}

/// Drives market setup through a [`ClearingHouseActor`].
pub struct MarketProvisioner<S: ClearingHouseService> {
  actor: ClearingHouseActor<S>,
}

impl<S: ClearingHouseService> MarketProvisioner<S> {
  pub const fn new(actor: ClearingHouseActor<S>) -> Self {
    Self { actor }
  }

  /// Create the market described by `spec`, then fetch its details.
  ///
  /// # Errors
  /// Fails on an unencodable spec or any remote failure.
  #[instrument(skip_all, fields(symbol = %spec.symbol))]
  pub async fn create(&self, spec: &MarketSpec) -> Result<ProvisionedMarket> {
    let params = spec
      .to_params()
      .with_context(|| format!("Invalid market specification for {}", spec.symbol))?;

    let market_index = self
      .actor
      .create_market(params)
      .await
      .context("createNewMarket failed")?;
    info!(market_index, "Market created");

    let details = self
      .actor
      .get_market_details(market_index)
      .await
      .with_context(|| format!("Failed to read back market {market_index}"))?;

    Ok(ProvisionedMarket {
      market_index,
      details,
    })
  }

  /// Credit `amount` house-asset units to the operator account.
  ///
  /// # Errors
  /// Fails on a negative/unencodable amount or a remote failure.
  #[instrument(skip(self))]
  pub async fn deposit(&self, amount: f64, block_index: Option<u64>) -> Result<bool> {
    let params = DepositParams {
      amount: to_wire_amount("amount", amount)?,
      block_index,
    };

    let credited = self.actor.deposit_into_account(params).await?;
    if credited {
      info!(amount, "Deposit credited");
    } else {
      warn!(amount, "Deposit was not credited");
    }
    Ok(credited)
  }

  /// Add `amount` to a market's liquidity, accepting no fewer than
  /// `min_amount_out` shares.
  ///
  /// # Errors
  /// Fails on negative/unencodable inputs or a remote failure. A
  /// `Failed` reply is returned as-is, not turned into an error.
  #[instrument(skip(self))]
  pub async fn seed_liquidity(
    &self,
    market_index: u64,
    amount: f64,
    min_amount_out: f64,
  ) -> Result<LiquidityOperationResult> {
    let params = AddLiquidityParams {
      market_index,
      amount: to_wire_amount("amount", amount)?,
      min_amount_out: to_wire_amount("min_amount_out", min_amount_out)?,
    };

    let result = self.actor.add_liquidity(params).await?;
    match &result {
      LiquidityOperationResult::Settled { amount_out } => {
        info!(market_index, amount_out = %amount_out, "Liquidity settled");
      }
      LiquidityOperationResult::Waiting { id } => {
        info!(market_index, ?id, "Liquidity queued until next price update");
      }
      LiquidityOperationResult::Failed(reason) => {
        warn!(market_index, %reason, "Liquidity operation failed");
      }
    }
    Ok(result)
  }
}
