//! Supply equilibrium.
//!
//! Issuance is bound to a hard cap; fee burning steps up once circulating
//! supply crosses the threshold. All mutation inside a block goes through a
//! staged [`SupplyBook`] so a block's monetary effects commit together or
//! not at all.

pub mod book;
pub mod controller;
pub mod error;
pub mod fees;
pub mod mint;
pub mod oracle;

pub use book::SupplyBook;
pub use controller::{SupplyController, SupplyStatus};
pub use error::SupplyError;
pub use fees::{FeeDistributor, FeePolicy};
pub use mint::{MintEngine, MintReceipt};
pub use oracle::PriceOracle;
