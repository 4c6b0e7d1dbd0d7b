//! Clearing House Actor - Typed Facade over the Remote Service
//!
//! One method per remote operation. Arguments go out and replies come
//! back unmodified; there is no retry, timeout or error translation here.

use std::sync::Arc;

use anyhow::Result;
use candid::Principal;
use tracing::instrument;

use crate::domain::market::{
  AddLiquidityParams, CreateMarketParams, DepositParams, LiquidityOperationResult, MarketDetails,
  QueryMarketDetailsResult,
};
use crate::ports::clearing_house::ClearingHouseService;

/// Facade over any [`ClearingHouseService`].
pub struct ClearingHouseActor<S: ClearingHouseService> {
  service: Arc<S>,
}

impl<S: ClearingHouseService> Clone for ClearingHouseActor<S> {
  fn clone(&self) -> Self {
    Self {
      service: Arc::clone(&self.service),
    }
  }
}

impl<S: ClearingHouseService> ClearingHouseActor<S> {
  /// Wrap a service.
  pub const fn new(service: Arc<S>) -> Self {
    Self { service }
  }

  /// Create a market; returns its index.
  #[instrument(level = "debug", skip_all, fields(symbol = %params.asset_pricing_details.symbol))]
  pub async fn create_market(&self, params: CreateMarketParams) -> Result<u64> {
    self.service.create_new_market(params).await
  }

  /// Live state of a market.
  #[instrument(level = "debug", skip(self))]
  pub async fn query_market_details(&self, market_index: u64) -> Result<QueryMarketDetailsResult> {
    self.service.query_market_details(market_index).await
  }

  /// Configuration and liquidity book of a market.
  #[instrument(level = "debug", skip(self))]
  pub async fn get_market_details(&self, market_index: u64) -> Result<MarketDetails> {
    self.service.get_market_details(market_index).await
  }

  /// Liquidity shares `principal` holds in a market.
  #[instrument(level = "debug", skip(self), fields(principal = %principal))]
  pub async fn get_user_shares_balance(
    &self,
    principal: Principal,
    market_index: u64,
  ) -> Result<u128> {
    self
      .service
      .get_user_market_liquidity_shares(principal, market_index)
      .await
  }

  /// Account balance of `principal`.
  #[instrument(level = "debug", skip(self), fields(principal = %principal))]
  pub async fn get_user_balance(&self, principal: Principal) -> Result<u128> {
    self.service.get_user_balance(principal).await
  }

  #[instrument(level = "debug", skip(self))]
  pub async fn add_liquidity(&self, params: AddLiquidityParams) -> Result<LiquidityOperationResult> {
    self.service.add_liquidity(params).await
  }

  #[instrument(level = "debug", skip(self))]
  pub async fn deposit_into_account(&self, params: DepositParams) -> Result<bool> {
    self.service.deposit_into_account(params).await
  }
}
