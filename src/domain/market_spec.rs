//! Human-readable market specification.
//!
//! Operators describe a market with plain decimals (0.01 = 1 percent,
//! 10.0 = 10x); [`MarketSpec::to_params`] encodes them for the canister.

use serde::Deserialize;

use super::fixed_point::{ConversionError, to_wire_factor};
use super::market::{AssetClass, AssetPricingDetails, CreateMarketParams, MarketState};

/// Decimal description of a new market.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketSpec {
  /// Index asset symbol (e.g. "BTC").
  pub symbol: String,
  #[serde(default)]
  pub asset_class: AssetClass,
  /// Liquidation threshold (0.01 = 1 percent).
  pub liquidation_factor: f64,
  /// Maximum leverage (10.0 = 10x).
  pub max_leverage_factor: f64,
  /// Price move the reserve is sized for (0.5 = 50 percent).
  pub max_reserve_factor: f64,
  pub funding_factor: f64,
  pub funding_exponent_factor: f64,
  pub longs_max_reserve_factor: f64,
  pub shorts_max_reserve_factor: f64,
  pub longs_base_borrowing_factor: f64,
  pub shorts_base_borrowing_factor: f64,
  pub longs_borrowing_exponent_factor: f64,
  pub shorts_borrowing_exponent_factor: f64,
}

impl MarketSpec {
  /// BTC perpetual with the production launch parameters.
  pub fn btc_perpetual() -> Self {
    Self {
      symbol: "BTC".to_string(),
      asset_class: AssetClass::Cryptocurrency,
      liquidation_factor: 0.01,
      max_leverage_factor: 10.0,
      max_reserve_factor: 0.5,
      funding_factor: 2e-8,
      funding_exponent_factor: 1.0,
      longs_max_reserve_factor: 0.3,
      shorts_max_reserve_factor: 0.3,
      longs_base_borrowing_factor: 5e-9,
      shorts_base_borrowing_factor: 5e-9,
      longs_borrowing_exponent_factor: 1.0,
      shorts_borrowing_exponent_factor: 1.0,
    }
  }

  /// Encode every factor with [`to_wire_factor`].
  ///
  /// # Errors
  /// Fails on the first factor that is non-finite, negative or overflows.
  pub fn to_params(&self) -> Result<CreateMarketParams, ConversionError> {
    Ok(CreateMarketParams {
      asset_pricing_details: AssetPricingDetails {
        class: self.asset_class,
        symbol: self.symbol.clone(),
      },
      init_state: MarketState {
        max_leverage_factor: to_wire_factor("maxLeverageFactor", self.max_leverage_factor)?,
        max_reserve_factor: to_wire_factor("maxReserveFactor", self.max_reserve_factor)?,
        liquidation_factor: to_wire_factor("liquidationFactor", self.liquidation_factor)?,
      },
      funding_factor: to_wire_factor("fundingFactor", self.funding_factor)?,
      funding_exponent_factor: to_wire_factor(
        "fundingExponentFactor",
        self.funding_exponent_factor,
      )?,
      longs_max_reserve_factor: to_wire_factor(
        "longsMaxReserveFactor",
        self.longs_max_reserve_factor,
      )?,
      longs_borrowing_exponent_factor: to_wire_factor(
        "longsBorrowingExponentFactor",
        self.longs_borrowing_exponent_factor,
      )?,
      longs_base_borrowing_factor: to_wire_factor(
        "longsBaseBorrowingFactor",
        self.longs_base_borrowing_factor,
      )?,
      shorts_max_reserve_factor: to_wire_factor(
        "shortsMaxReserveFactor",
        self.shorts_max_reserve_factor,
      )?,
      shorts_borrowing_exponent_factor: to_wire_factor(
        "shortsBorrowingExponentFactor",
        self.shorts_borrowing_exponent_factor,
      )?,
      shorts_base_borrowing_factor: to_wire_factor(
        "shortsBaseBorrowingFactor",
        self.shorts_base_borrowing_factor,
      )?,
    })
  }
}

impl Default for MarketSpec {
  fn default() -> Self {
    Self::btc_perpetual()
  }
}
