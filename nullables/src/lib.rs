//! Nullable infrastructure for deterministic testing.
//!
//! Real deployments back the kernel with the host chain's KV store and
//! staking roster. Tests use these in-memory stand-ins instead, so every
//! kernel behavior can be replayed without a live chain.

pub mod roster;
pub mod store;

pub use roster::FixedRoster;
pub use store::NullStore;
