//! Deepfake-vote storage trait.

use crate::StoreError;
use vital_types::{DeepfakeVote, Did, ProofHash};

/// Votes keyed by (proof hash, validator).
///
/// `put_vote` overwrites any prior vote from the same validator for the same
/// proof; votes are never deleted. `votes_for_proof` is the prefix scan the
/// tally runs over.
pub trait VoteStore {
    fn put_vote(&self, vote: &DeepfakeVote) -> Result<(), StoreError>;
    fn get_vote(
        &self,
        hash: &ProofHash,
        validator: &Did,
    ) -> Result<Option<DeepfakeVote>, StoreError>;
    fn votes_for_proof(&self, hash: &ProofHash) -> Result<Vec<DeepfakeVote>, StoreError>;
    fn vote_count(&self) -> Result<u64, StoreError>;
}
