//! Deepfake votes and the permanent blacklist record.

use crate::did::Did;
use crate::hash::ProofHash;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// A validator's verdict on whether a specific liveness proof is synthetic.
///
/// One live vote per (proof, validator); a later vote from the same validator
/// overwrites its prior one. Votes are never deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepfakeVote {
    pub proof_hash: ProofHash,
    pub validator_id: Did,
    pub is_deepfake: bool,
    /// Validator's confidence in the verdict, 0–100.
    pub confidence: u8,
    pub cast_at: Timestamp,
    pub reason: String,
}

/// A permanently rejected proof, created exactly once when the deepfake tally
/// first reaches quorum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistEntry {
    pub proof_hash: ProofHash,
    pub reason: String,
    pub blacklisted_at: Timestamp,
    /// Deepfake votes counted at the moment of decision.
    pub deepfake_vote_count: u32,
    /// Size of the validator set at the moment of decision.
    pub total_validators_at_decision: u32,
    /// Subject the proof claimed, when known at decision time.
    pub subject_id: Option<String>,
}
