//! Fundamental types for the VITAL kernel.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: proof hashes, DIDs, token amounts, timestamps, protocol
//! parameters, and the ledger records the kernel persists.

pub mod amount;
pub mod did;
pub mod event;
pub mod fee;
pub mod hash;
pub mod keys;
pub mod params;
pub mod pool;
pub mod proof;
pub mod time;
pub mod transaction;
pub mod vote;

pub use amount::TokenAmount;
pub use did::Did;
pub use event::LedgerEvent;
pub use fee::FeeDistributionRecord;
pub use hash::ProofHash;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use params::{KernelParams, ParamsError, SupplyEquilibriumParams};
pub use pool::PoolId;
pub use proof::LivenessProof;
pub use time::Timestamp;
pub use transaction::{Transaction, TransferTx, VerificationTx};
pub use vote::{BlacklistEntry, DeepfakeVote};
