//! Canister Adapters - Internet Computer Interaction Layer
//!
//! Provides clearing-house access via `ic-agent` for:
//! - Agent construction from the network config and operator identity
//! - The Candid client implementing the `ClearingHouseService` port

pub mod agent;
pub mod client;

pub use agent::connect_agent;
pub use client::CanisterClient;
