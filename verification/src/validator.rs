//! The proof validator and its ledger-lookup seam.

use crate::error::ValidationError;
use vital_crypto::verify_signature;
use vital_store::StoreError;
use vital_types::{Did, KernelParams, LivenessProof, ProofHash, PublicKey, Timestamp};

/// The ledger lookups validation needs.
///
/// The block executor implements this over the durable store plus its
/// in-block staging, so a proof consumed earlier in the same block already
/// reads as used.
pub trait ValidationContext {
    fn proof_used(&self, hash: &ProofHash) -> Result<bool, StoreError>;
    fn is_blacklisted(&self, hash: &ProofHash) -> Result<bool, StoreError>;
    fn verification_key(&self, subject: &Did) -> Result<Option<PublicKey>, StoreError>;
}

/// Validates a single liveness proof.
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. proof hash is 64 hex chars
/// 2. subject is a well-formed DID
/// 3. liveness score is on-scale and at least the configured floor
/// 4. signature is non-empty and verifies under the subject's registered key
/// 5. capture time is not in the future and within the freshness window
/// 6. the hash has not already anchored a block
/// 7. the hash is not blacklisted
#[derive(Clone, Copy, Debug)]
pub struct ProofValidator {
    min_liveness_score: u8,
    proof_max_age_secs: u64,
}

impl ProofValidator {
    pub fn new(params: &KernelParams) -> Self {
        Self {
            min_liveness_score: params.min_liveness_score,
            proof_max_age_secs: params.proof_max_age_secs,
        }
    }

    /// Validate one proof. Returns the canonical hash on success so callers
    /// key further bookkeeping off the parsed form, not the raw string.
    pub fn validate(
        &self,
        proof: &LivenessProof,
        ctx: &dyn ValidationContext,
        now: Timestamp,
    ) -> Result<ProofHash, ValidationError> {
        let hash = ProofHash::parse(&proof.proof_hash)?;
        let subject = Did::parse(&proof.subject_id)?;

        if proof.liveness_score > 100 {
            return Err(ValidationError::ScoreOutOfRange(proof.liveness_score));
        }
        if proof.liveness_score < self.min_liveness_score {
            return Err(ValidationError::ScoreTooLow {
                score: proof.liveness_score,
                min: self.min_liveness_score,
            });
        }

        if proof.signature.is_empty() {
            return Err(ValidationError::EmptySignature);
        }
        let key = ctx
            .verification_key(&subject)?
            .ok_or_else(|| ValidationError::UnknownSubjectKey(subject.to_string()))?;
        if !verify_signature(&proof.signing_bytes(), &proof.signature, &key) {
            return Err(ValidationError::BadSignature);
        }

        if proof.captured_at.is_after(now) {
            return Err(ValidationError::FutureDated {
                captured_at: proof.captured_at.as_secs(),
                now: now.as_secs(),
            });
        }
        let age_secs = proof.captured_at.elapsed_since(now);
        if age_secs > self.proof_max_age_secs {
            return Err(ValidationError::Expired {
                age_secs,
                max_secs: self.proof_max_age_secs,
            });
        }

        if proof.used || ctx.proof_used(&hash)? {
            return Err(ValidationError::AlreadyUsed(hash.to_string()));
        }
        if ctx.is_blacklisted(&hash)? {
            return Err(ValidationError::Blacklisted(hash.to_string()));
        }

        Ok(hash)
    }
}
