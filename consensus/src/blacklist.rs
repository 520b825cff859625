//! The permanent blacklist of forged proofs.

use crate::error::ConsensusError;
use vital_store::BlacklistStore;
use vital_types::{BlacklistEntry, ProofHash};

/// Gatekeeper over the blacklist store.
///
/// Entries are write-once: recording against an already-blacklisted proof
/// returns the original entry untouched, so the first quorum decision is the
/// one that sticks. There is no removal path at any layer.
pub struct BlacklistRegistry;

impl BlacklistRegistry {
    /// Membership test used by proof validation and the query surface.
    pub fn is_blacklisted(
        &self,
        store: &dyn BlacklistStore,
        hash: &ProofHash,
    ) -> Result<bool, ConsensusError> {
        Ok(store.is_blacklisted(hash)?)
    }

    pub fn get(
        &self,
        store: &dyn BlacklistStore,
        hash: &ProofHash,
    ) -> Result<Option<BlacklistEntry>, ConsensusError> {
        Ok(store.get_blacklist_entry(hash)?)
    }

    /// Record a quorum decision. Idempotent: if the proof is already
    /// blacklisted the existing entry wins and is returned.
    pub fn record(
        &self,
        store: &dyn BlacklistStore,
        entry: BlacklistEntry,
    ) -> Result<BlacklistEntry, ConsensusError> {
        if let Some(existing) = store.get_blacklist_entry(&entry.proof_hash)? {
            return Ok(existing);
        }
        store.put_blacklist_entry(&entry)?;
        tracing::info!(
            proof = %entry.proof_hash,
            votes = entry.deepfake_vote_count,
            validators = entry.total_validators_at_decision,
            "proof blacklisted as deepfake"
        );
        Ok(entry)
    }
}
