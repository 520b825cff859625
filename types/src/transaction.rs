//! Block transaction kinds.
//!
//! A closed tagged union: the anchor gate discovers attached proofs by
//! matching on the kind, never by inspecting opaque payloads.

use crate::amount::TokenAmount;
use crate::proof::LivenessProof;
use serde::{Deserialize, Serialize};

/// A verification request: a jurisdiction-tagged requester identity, the
/// liveness proof backing it, and the fee collected with the transaction.
///
/// `requester` arrives as a raw DID string and is parsed (and its
/// jurisdiction re-derived) inside the kernel; any client-supplied
/// jurisdiction tag is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationTx {
    pub requester: String,
    pub proof: LivenessProof,
    pub fee_paid: TokenAmount,
}

/// A plain value transfer. Executed by the host transfer path; the kernel
/// only looks at it for an optionally attached proof.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferTx {
    pub source: String,
    pub destination: String,
    pub amount: TokenAmount,
    pub proof: Option<LivenessProof>,
}

/// The closed set of transaction kinds a block may carry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transaction {
    Verification(VerificationTx),
    Transfer(TransferTx),
}

impl Transaction {
    /// The liveness proof attached to this transaction, if any.
    pub fn attached_proof(&self) -> Option<&LivenessProof> {
        match self {
            Transaction::Verification(tx) => Some(&tx.proof),
            Transaction::Transfer(tx) => tx.proof.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Timestamp;

    #[test]
    fn attached_proof_per_kind() {
        let proof = LivenessProof::new(
            "cd".repeat(32),
            "did:vital:np:bob",
            Timestamp::new(5),
            90,
            vec![1],
        );
        let verification = Transaction::Verification(VerificationTx {
            requester: "did:vital:np:bob".into(),
            proof: proof.clone(),
            fee_paid: TokenAmount::new(1),
        });
        assert!(verification.attached_proof().is_some());

        let bare_transfer = Transaction::Transfer(TransferTx {
            source: "did:vital:np:bob".into(),
            destination: "did:vital:np:carol".into(),
            amount: TokenAmount::new(3),
            proof: None,
        });
        assert!(bare_transfer.attached_proof().is_none());

        let proven_transfer = Transaction::Transfer(TransferTx {
            source: "did:vital:np:bob".into(),
            destination: "did:vital:np:carol".into(),
            amount: TokenAmount::new(3),
            proof: Some(proof),
        });
        assert!(proven_transfer.attached_proof().is_some());
    }
}
