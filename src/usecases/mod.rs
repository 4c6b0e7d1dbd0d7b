//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces to implement the
//! operator workflows.
//!
//! Use cases:
//! - `ClearingHouseActor`: Typed pass-through facade over the canister
//! - `MarketProvisioner`: Create market, deposit, seed liquidity
//! - `operator_script`: The binary's identity check

pub mod clearing_house_actor;
pub mod market_provisioner;
pub mod operator_script;
