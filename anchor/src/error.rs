use std::fmt;
use thiserror::Error;
use vital_store::StoreError;
use vital_supply::SupplyError;
use vital_types::did::DidError;

/// One candidate proof the block gate turned away, with the check that
/// rejected it. Carried inside [`AnchorError::NoValidProof`] so the host can
/// audit a rejected block without re-running validation.
#[derive(Clone, Debug)]
pub struct ProofRejection {
    /// Index of the carrying transaction within the block.
    pub tx_index: usize,
    /// The proof identifier as submitted (possibly malformed).
    pub proof_hash: String,
    pub reason: String,
}

impl fmt::Display for ProofRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tx {}: {}", self.tx_index, self.reason)
    }
}

/// Why a block was rejected by the anchor pipeline.
#[derive(Debug, Error)]
pub enum AnchorError {
    /// No transaction in the block carried a proof that validates. A block
    /// never finalizes without verified-human evidence.
    #[error("block {height} carries no valid liveness proof ({} candidates rejected)", rejections.len())]
    NoValidProof {
        height: u64,
        rejections: Vec<ProofRejection>,
    },

    #[error("malformed requester DID in transaction {tx_index}: {source}")]
    MalformedRequester {
        tx_index: usize,
        #[source]
        source: DidError,
    },

    #[error(transparent)]
    Supply(#[from] SupplyError),

    #[error("storage error during block execution: {0}")]
    Storage(#[from] StoreError),
}
