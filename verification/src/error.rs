use thiserror::Error;
use vital_types::did::DidError;
use vital_types::hash::ProofHashError;

/// Why a liveness proof was rejected.
///
/// Variants appear in check order; the validator returns the first that
/// fires. Every variant names the identifier or values involved so the host
/// can audit rejections without re-running validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("malformed proof hash: {0}")]
    MalformedProofHash(#[from] ProofHashError),

    #[error("malformed subject DID: {0}")]
    MalformedSubjectDid(#[from] DidError),

    #[error("liveness score {0} outside the 0-100 scale")]
    ScoreOutOfRange(u8),

    #[error("liveness score {score} below minimum {min}")]
    ScoreTooLow { score: u8, min: u8 },

    #[error("proof carries an empty signature")]
    EmptySignature,

    #[error("no verification key registered for subject {0}")]
    UnknownSubjectKey(String),

    #[error("signature does not verify under the subject's registered key")]
    BadSignature,

    #[error("proof captured in the future: captured_at {captured_at}, now {now}")]
    FutureDated { captured_at: u64, now: u64 },

    #[error("proof expired: age {age_secs}s exceeds maximum {max_secs}s")]
    Expired { age_secs: u64, max_secs: u64 },

    #[error("proof {0} already anchored a block")]
    AlreadyUsed(String),

    #[error("proof {0} is blacklisted as a deepfake")]
    Blacklisted(String),

    #[error("storage error during validation: {0}")]
    Storage(#[from] vital_store::StoreError),
}
