//! Abstract storage traits for the VITAL kernel.
//!
//! Every backend (the host chain's ordered KV store in production, the
//! in-memory nullable store in tests) implements these traits. The rest of
//! the workspace depends only on the traits. Each record family is keyed by
//! its natural identifier: proof hash for proofs and blacklist entries,
//! (proof hash, validator) for votes.

pub mod blacklist;
pub mod error;
pub mod fee_record;
pub mod proof;
pub mod roster;
pub mod subject_key;
pub mod supply;
pub mod vote;

pub use blacklist::BlacklistStore;
pub use error::StoreError;
pub use fee_record::FeeRecordStore;
pub use proof::ProofStore;
pub use roster::ValidatorRoster;
pub use subject_key::SubjectKeyStore;
pub use supply::SupplyStore;
pub use vote::VoteStore;

/// Everything the block executor needs from one backend.
///
/// Blanket-implemented, so a backend only has to implement the individual
/// record-family traits.
pub trait KernelStore:
    ProofStore + BlacklistStore + VoteStore + SupplyStore + FeeRecordStore + SubjectKeyStore
{
}

impl<T> KernelStore for T where
    T: ProofStore + BlacklistStore + VoteStore + SupplyStore + FeeRecordStore + SubjectKeyStore
{
}
