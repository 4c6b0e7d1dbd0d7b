//! Clearing House Port - Remote Canister Interface
//!
//! The seven remote operations operators use, as an abstract capability.
//! The concrete Candid client lives in `adapters::canister`; tests substitute
//! a mock. Schemas are owned by the canister (see `domain::market`).

use async_trait::async_trait;
use candid::Principal;

use crate::domain::market::{
  AddLiquidityParams, CreateMarketParams, DepositParams, LiquidityOperationResult, MarketDetails,
  QueryMarketDetailsResult,
};

/// Something that can perform the clearing-house calls.
///
/// Implementations return the remote reply untouched. Transport and
/// remote-side failures surface as `Err`; nothing is retried.
#[async_trait]
pub trait ClearingHouseService: Send + Sync + 'static {
  /// `createNewMarket` (update). Returns the new market index.
  async fn create_new_market(&self, params: CreateMarketParams) -> anyhow::Result<u64>;

  /// `queryMarketDetails` (query). Mutable market state.
  async fn query_market_details(
    &self,
    market_index: u64,
  ) -> anyhow::Result<QueryMarketDetailsResult>;

  /// `get_market_details` (query). Market configuration and liquidity book.
  async fn get_market_details(&self, market_index: u64) -> anyhow::Result<MarketDetails>;

  /// `getUserMarketLiquidityShares` (query).
  async fn get_user_market_liquidity_shares(
    &self,
    user: Principal,
    market_index: u64,
  ) -> anyhow::Result<u128>;

  /// `getUserBalance` (query).
  async fn get_user_balance(&self, user: Principal) -> anyhow::Result<u128>;

  /// `addLiquidity` (update).
  async fn add_liquidity(
    &self,
    params: AddLiquidityParams,
  ) -> anyhow::Result<LiquidityOperationResult>;

  /// `depositIntoAccount` (update).
  async fn deposit_into_account(&self, params: DepositParams) -> anyhow::Result<bool>;
}
