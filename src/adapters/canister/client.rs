//! Clearing House Candid Client
//!
//! Implements the `ClearingHouseService` port on top of `ic-agent`:
//! Candid-encode the arguments, issue a query or an update-and-wait,
//! Candid-decode the reply. No retries; errors carry the method name.

use anyhow::{Context, Result};
use async_trait::async_trait;
use candid::utils::ArgumentEncoder;
use candid::{CandidType, Principal};
use ic_agent::Agent;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::market::{
  AddLiquidityParams, CreateMarketParams, DepositParams, LiquidityOperationResult, MarketDetails,
  QueryMarketDetailsResult,
};
use crate::ports::clearing_house::ClearingHouseService;

/// Remote method names as published by the canister.
mod method {
  pub const CREATE_NEW_MARKET: &str = "createNewMarket";
  pub const QUERY_MARKET_DETAILS: &str = "queryMarketDetails";
  pub const GET_MARKET_DETAILS: &str = "get_market_details";
  pub const GET_USER_MARKET_LIQUIDITY_SHARES: &str = "getUserMarketLiquidityShares";
  pub const GET_USER_BALANCE: &str = "getUserBalance";
  pub const ADD_LIQUIDITY: &str = "addLiquidity";
  pub const DEPOSIT_INTO_ACCOUNT: &str = "depositIntoAccount";
}

/// Candid client bound to one clearing-house canister.
pub struct CanisterClient {
  agent: Agent,
  canister_id: Principal,
}

impl CanisterClient {
  /// Bind `agent` to the canister at `canister_id`.
  pub const fn new(agent: Agent, canister_id: Principal) -> Self {
    Self { agent, canister_id }
  }

  /// Parse a textual canister id and bind `agent` to it.
  ///
  /// # Errors
  /// Fails if `canister_id` is not a valid principal.
  pub fn from_text(agent: Agent, canister_id: &str) -> Result<Self> {
    let canister_id = Principal::from_text(canister_id)
      .with_context(|| format!("Invalid canister id: {canister_id}"))?;
    Ok(Self::new(agent, canister_id))
  }

  /// Canister this client talks to.
  pub const fn canister_id(&self) -> Principal {
    self.canister_id
  }

  async fn query<A, R>(&self, method: &str, args: A) -> Result<R>
  where
    A: ArgumentEncoder,
    R: CandidType + DeserializeOwned,
  {
    let arg = candid::encode_args(args)
      .with_context(|| format!("Failed to encode arguments for {method}"))?;
    debug!(method, canister = %self.canister_id, "query");

    let reply = self
      .agent
      .query(&self.canister_id, method)
      .with_arg(arg)
      .call()
      .await
      .with_context(|| format!("Query {method} failed"))?;

    candid::decode_one(&reply).with_context(|| format!("Failed to decode {method} reply"))
  }

  async fn update<A, R>(&self, method: &str, args: A) -> Result<R>
  where
    A: ArgumentEncoder,
    R: CandidType + DeserializeOwned,
  {
    let arg = candid::encode_args(args)
      .with_context(|| format!("Failed to encode arguments for {method}"))?;
    debug!(method, canister = %self.canister_id, "update");

    let reply = self
      .agent
      .update(&self.canister_id, method)
      .with_arg(arg)
      .call_and_wait()
      .await
      .with_context(|| format!("Update {method} failed"))?;

    candid::decode_one(&reply).with_context(|| format!("Failed to decode {method} reply"))
  }
}

#[async_trait]
impl ClearingHouseService for CanisterClient {
  async fn create_new_market(&self, params: CreateMarketParams) -> Result<u64> {
    self.update(method::CREATE_NEW_MARKET, (params,)).await
  }

  async fn query_market_details(&self, market_index: u64) -> Result<QueryMarketDetailsResult> {
    self.query(method::QUERY_MARKET_DETAILS, (market_index,)).await
  }

  async fn get_market_details(&self, market_index: u64) -> Result<MarketDetails> {
    self.query(method::GET_MARKET_DETAILS, (market_index,)).await
  }

  async fn get_user_market_liquidity_shares(
    &self,
    user: Principal,
    market_index: u64,
  ) -> Result<u128> {
    self
      .query(method::GET_USER_MARKET_LIQUIDITY_SHARES, (user, market_index))
      .await
  }

  async fn get_user_balance(&self, user: Principal) -> Result<u128> {
    self.query(method::GET_USER_BALANCE, (user,)).await
  }

  async fn add_liquidity(&self, params: AddLiquidityParams) -> Result<LiquidityOperationResult> {
    self.update(method::ADD_LIQUIDITY, (params,)).await
  }

  async fn deposit_into_account(&self, params: DepositParams) -> Result<bool> {
    self.update(method::DEPOSIT_INTO_ACCOUNT, (params,)).await
  }
}
