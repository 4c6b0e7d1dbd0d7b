//! Clearing-house wire schema.
//!
//! Candid records and variants exchanged with the clearing-house canister.
//! The canister owns these shapes; this crate only populates and reads them.
//! Every fixed-point field is a `nat`/`int` scaled by 10^20
//! (see [`crate::domain::fixed_point`]).

use candid::CandidType;
use serde::{Deserialize, Serialize};

/// Asset class understood by the exchange-rate oracle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub enum AssetClass {
  /// The cryptocurrency asset class.
  #[default]
  Cryptocurrency,
  /// The fiat currency asset class.
  FiatCurrency,
}

/// Index asset of a market, as quoted by the oracle.
#[derive(Debug, Clone, Default, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct AssetPricingDetails {
  pub class: AssetClass,
  pub symbol: String,
}

/// Risk limits of a market.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct MarketState {
  /// Maximum leverage (10x = 10 * 10^20).
  pub max_leverage_factor: u128,
  /// Maximum price move the reserve is sized for.
  pub max_reserve_factor: u128,
  /// Collateral ratio below which a position is liquidated.
  pub liquidation_factor: u128,
}

/// Arguments of `createNewMarket`.
#[derive(Debug, Clone, Default, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct CreateMarketParams {
  #[serde(rename = "assetPricingDetails")]
  pub asset_pricing_details: AssetPricingDetails,
  #[serde(rename = "initState")]
  pub init_state: MarketState,
  #[serde(rename = "fundingFactor")]
  pub funding_factor: u128,
  #[serde(rename = "fundingExponentFactor")]
  pub funding_exponent_factor: u128,
  #[serde(rename = "longsMaxReserveFactor")]
  pub longs_max_reserve_factor: u128,
  #[serde(rename = "longsBorrowingExponentFactor")]
  pub longs_borrowing_exponent_factor: u128,
  #[serde(rename = "longsBaseBorrowingFactor")]
  pub longs_base_borrowing_factor: u128,
  #[serde(rename = "shortsMaxReserveFactor")]
  pub shorts_max_reserve_factor: u128,
  #[serde(rename = "shortsBorrowingExponentFactor")]
  pub shorts_borrowing_exponent_factor: u128,
  #[serde(rename = "shortsBaseBorrowingFactor")]
  pub shorts_base_borrowing_factor: u128,
}

/// House liquidity book of a market.
///
/// Only the fields operators read are declared; Candid record subtyping
/// drops the rest of the remote record on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct HouseLiquidity {
  pub total_liquidity_tokens_minted: u128,
  pub total_deposit: u128,
  pub free_liquidity: u128,
  pub current_longs_reserve: u128,
  pub current_shorts_reserve: u128,
  pub current_net_debt: u128,
  pub bad_debt: u128,
  pub longs_max_reserve_factor: u128,
  pub shorts_max_reserve_factor: u128,
}

/// Reply of `get_market_details`: configuration plus liquidity book.
#[derive(Debug, Clone, Default, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct MarketDetails {
  pub index_asset_pricing_details: AssetPricingDetails,
  pub token_identifier: String,
  pub state: MarketState,
  pub liquidity_manager: HouseLiquidity,
}

/// Live view of a market's mutable state.
#[derive(Debug, Clone, Default, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct MarketSnapshot {
  #[serde(rename = "longsTotalOpenInterest")]
  pub longs_total_open_interest: u128,
  #[serde(rename = "shortsTotalOpenInterest")]
  pub shorts_total_open_interest: u128,
  #[serde(rename = "longsReserveAvailableLiquidity")]
  pub longs_reserve_available_liquidity: u128,
  #[serde(rename = "shortsReserveAvailableLiquidity")]
  pub shorts_reserve_available_liquidity: u128,
  /// Negative when longs pay shorts.
  #[serde(rename = "currentFundingFactorPerHourLong")]
  pub current_funding_factor_per_hour_long: i128,
  /// Negative when shorts pay longs.
  #[serde(rename = "currentFundingFactorPerHourShort")]
  pub current_funding_factor_per_hour_short: i128,
}

/// Reply of `queryMarketDetails`.
#[derive(Debug, Clone, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub enum QueryMarketDetailsResult {
  Ok(MarketSnapshot),
  Err(String),
}

/// Arguments of `addLiquidity`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct AddLiquidityParams {
  pub market_index: u64,
  /// House-asset amount to add.
  pub amount: u128,
  /// Minimum liquidity shares to accept.
  pub min_amount_out: u128,
}

/// Outcome of a liquidity operation.
#[derive(Debug, Clone, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub enum LiquidityOperationResult {
  /// Executed at the current price; `amount_out` shares were minted.
  Settled { amount_out: u128 },
  /// Queued until the next price update: (market index, priority, operation id).
  Waiting { id: Option<(u64, u8, u64)> },
  Failed(String),
}

/// Arguments of `depositIntoAccount`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct DepositParams {
  pub amount: u128,
  /// Ledger block of the incoming transfer, when the ledger needs one.
  pub block_index: Option<u64>,
}
