//! Clearing House Ops — Library Root
//!
//! Re-exports all modules for integration tests, benchmarks and demos.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;
