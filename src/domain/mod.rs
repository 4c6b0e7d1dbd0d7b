//! Domain layer - Wire schema and fixed-point encoding.
//!
//! Pure types and conversions with no I/O. The Candid shapes mirror the
//! clearing-house canister's interface; the conversions turn operator
//! decimals into the canister's 10^20 fixed-point integers.

pub mod fixed_point;
pub mod market;
pub mod market_spec;

// Re-export core types for convenience
pub use fixed_point::{ConversionError, PRECISION_DECIMALS, to_parse_units, to_precision};
pub use market::{
  AddLiquidityParams, AssetClass, AssetPricingDetails, CreateMarketParams, DepositParams,
  LiquidityOperationResult, MarketDetails, MarketSnapshot, MarketState, QueryMarketDetailsResult,
};
pub use market_spec::MarketSpec;
