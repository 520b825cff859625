//! Consensus of presence.
//!
//! Validators cast deepfake votes on individual liveness proofs. When the
//! votes from the current validator set first reach a 51% floor-percentage
//! majority, the proof is blacklisted — permanently and globally. Later
//! votes never reverse the verdict.

pub mod blacklist;
pub mod error;
pub mod voting;

pub use blacklist::BlacklistRegistry;
pub use error::ConsensusError;
pub use vital_store::ValidatorRoster;
pub use voting::{ConsensusOfPresence, VoteOutcome};
