use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsensusError {
    /// No validators are registered — a configuration error, fatal to vote
    /// processing until the roster is non-empty. Never auto-retried.
    #[error("validator set is empty; cannot tally deepfake votes")]
    NoValidators,

    #[error("validator {0} is not in the current validator set")]
    UnknownValidator(String),

    #[error("vote confidence {0} outside the 0-100 scale")]
    ConfidenceOutOfRange(u8),

    #[error("storage error: {0}")]
    Storage(#[from] vital_store::StoreError),
}
