//! Liveness proof — the attestation that a human was present at capture time.

use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// A liveness proof as delivered by the external capture pipeline.
///
/// The identifier and subject fields arrive as raw strings and are untrusted
/// until `ProofValidator` has parsed and checked them. `used` and
/// `block_height` are ledger state: they start unset and are written exactly
/// once, when the proof anchors a block. A used proof never validates again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivenessProof {
    /// 64-hex-char proof identifier.
    pub proof_hash: String,

    /// Subject DID (`did:<method>:<jurisdiction>:<id>`).
    pub subject_id: String,

    /// Capture time claimed by the pipeline.
    pub captured_at: Timestamp,

    /// Liveness score on a 0–100 scale.
    pub liveness_score: u8,

    /// Ed25519 signature over [`LivenessProof::signing_bytes`], made with the
    /// subject's registered verification key.
    pub signature: Vec<u8>,

    /// Height of the block this proof anchored, once admitted.
    pub block_height: Option<u64>,

    /// Whether this proof has already anchored a block.
    pub used: bool,
}

impl LivenessProof {
    /// Construct a fresh, unused proof.
    pub fn new(
        proof_hash: impl Into<String>,
        subject_id: impl Into<String>,
        captured_at: Timestamp,
        liveness_score: u8,
        signature: Vec<u8>,
    ) -> Self {
        Self {
            proof_hash: proof_hash.into(),
            subject_id: subject_id.into(),
            captured_at,
            liveness_score,
            signature,
            block_height: None,
            used: false,
        }
    }

    /// The canonical payload the subject signs:
    /// `proof_hash || subject_id || captured_at (BE bytes) || score`.
    pub fn signing_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.proof_hash.len() + self.subject_id.len() + 9);
        bytes.extend_from_slice(self.proof_hash.as_bytes());
        bytes.extend_from_slice(self.subject_id.as_bytes());
        bytes.extend_from_slice(&self.captured_at.as_secs().to_be_bytes());
        bytes.push(self.liveness_score);
        bytes
    }

    /// Mark the proof as consumed by a block. Single-use: returns `false`
    /// without mutating if the proof was already used.
    pub fn mark_used(&mut self, block_height: u64) -> bool {
        if self.used {
            return false;
        }
        self.used = true;
        self.block_height = Some(block_height);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LivenessProof {
        LivenessProof::new(
            "ab".repeat(32),
            "did:vital:np:alice",
            Timestamp::new(1000),
            85,
            vec![1, 2, 3],
        )
    }

    #[test]
    fn signing_bytes_is_order_sensitive() {
        let a = sample();
        let mut b = sample();
        b.liveness_score = 86;
        assert_ne!(a.signing_bytes(), b.signing_bytes());
    }

    #[test]
    fn mark_used_is_single_shot() {
        let mut proof = sample();
        assert!(proof.mark_used(7));
        assert_eq!(proof.block_height, Some(7));
        assert!(!proof.mark_used(8));
        assert_eq!(proof.block_height, Some(7));
    }
}
