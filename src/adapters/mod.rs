//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (ic-agent, Candid, Ed25519 keys).
//!
//! Adapter categories:
//! - `canister`: Agent construction and the Candid clearing-house client
//! - `identity`: Operator key loading

pub mod canister;
pub mod identity;
