//! Liveness-proof storage trait.

use crate::StoreError;
use vital_types::{LivenessProof, ProofHash};

/// Proofs keyed by canonical proof hash.
///
/// A proof enters the store the moment it anchors a block (already marked
/// used); unanchored proofs only persist if the host caches them, so absence
/// means "never consumed".
pub trait ProofStore {
    fn get_proof(&self, hash: &ProofHash) -> Result<Option<LivenessProof>, StoreError>;
    fn put_proof(&self, hash: &ProofHash, proof: &LivenessProof) -> Result<(), StoreError>;
    fn proof_count(&self) -> Result<u64, StoreError>;
    fn iter_proofs(&self) -> Result<Vec<(ProofHash, LivenessProof)>, StoreError>;

    /// Remove a proof record. Only the stale-proof sweep calls this, and only
    /// for proofs that never anchored a block.
    fn delete_proof(&self, hash: &ProofHash) -> Result<(), StoreError>;

    /// Whether this hash has already anchored a block.
    fn proof_used(&self, hash: &ProofHash) -> Result<bool, StoreError> {
        Ok(self.get_proof(hash)?.map(|p| p.used).unwrap_or(false))
    }
}
