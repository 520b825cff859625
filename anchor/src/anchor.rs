//! The block gate: no block finalizes without one valid liveness proof.

use crate::error::{AnchorError, ProofRejection};
use vital_verification::{ProofValidator, ValidationContext, ValidationError};
use vital_types::{Did, KernelParams, ProofHash, Timestamp, Transaction};

/// The proof that anchored a block, and where it sat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdmittedProof {
    pub proof_hash: ProofHash,
    pub subject: Did,
    /// Index of the carrying transaction within the block.
    pub tx_index: usize,
}

/// Scans a block's transactions for an acceptable liveness proof.
///
/// One valid proof is enough: the scan stops at the first transaction whose
/// attached proof passes validation. If none does, the whole block is
/// rejected, carrying a per-candidate rejection reason for audit. The caller
/// is responsible for marking the admitted proof used.
#[derive(Clone, Copy, Debug)]
pub struct VitalityAnchor {
    validator: ProofValidator,
}

impl VitalityAnchor {
    pub fn new(params: &KernelParams) -> Self {
        Self {
            validator: ProofValidator::new(params),
        }
    }

    pub fn admit(
        &self,
        txs: &[Transaction],
        ctx: &dyn ValidationContext,
        height: u64,
        now: Timestamp,
    ) -> Result<AdmittedProof, AnchorError> {
        let mut rejections = Vec::new();

        for (tx_index, tx) in txs.iter().enumerate() {
            let Some(proof) = tx.attached_proof() else {
                continue;
            };
            // Parsed up front so the admitted subject is available without a
            // second fallible step after validation.
            let subject = match Did::parse(&proof.subject_id) {
                Ok(subject) => subject,
                Err(err) => {
                    rejections.push(ProofRejection {
                        tx_index,
                        proof_hash: proof.proof_hash.clone(),
                        reason: ValidationError::from(err).to_string(),
                    });
                    continue;
                }
            };
            match self.validator.validate(proof, ctx, now) {
                Ok(proof_hash) => {
                    tracing::info!(
                        height,
                        %proof_hash,
                        subject = %subject,
                        tx_index,
                        "block anchored by liveness proof"
                    );
                    return Ok(AdmittedProof {
                        proof_hash,
                        subject,
                        tx_index,
                    });
                }
                Err(ValidationError::Storage(err)) => return Err(err.into()),
                Err(err) => {
                    tracing::warn!(height, tx_index, reason = %err, "candidate proof rejected");
                    rejections.push(ProofRejection {
                        tx_index,
                        proof_hash: proof.proof_hash.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        tracing::warn!(
            height,
            candidates = rejections.len(),
            "block rejected: no valid liveness proof"
        );
        Err(AnchorError::NoValidProof { height, rejections })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use vital_crypto::{keypair_from_seed, sign_message};
    use vital_store::StoreError;
    use vital_types::{KeyPair, LivenessProof, PublicKey, TokenAmount, TransferTx, VerificationTx};

    #[derive(Default)]
    struct MapCtx {
        keys: Mutex<Vec<(String, PublicKey)>>,
        used: Mutex<HashSet<ProofHash>>,
    }

    impl ValidationContext for MapCtx {
        fn proof_used(&self, hash: &ProofHash) -> Result<bool, StoreError> {
            Ok(self.used.lock().unwrap().contains(hash))
        }

        fn is_blacklisted(&self, _hash: &ProofHash) -> Result<bool, StoreError> {
            Ok(false)
        }

        fn verification_key(&self, subject: &Did) -> Result<Option<PublicKey>, StoreError> {
            Ok(self
                .keys
                .lock()
                .unwrap()
                .iter()
                .find(|(raw, _)| raw == &subject.to_string())
                .map(|(_, key)| key.clone()))
        }
    }

    const SUBJECT: &str = "did:vital:np:alice";

    fn keypair() -> KeyPair {
        keypair_from_seed(&[7u8; 32])
    }

    fn signed_proof(hash_byte: &str, now: Timestamp) -> LivenessProof {
        let mut proof = LivenessProof::new(
            hash_byte.repeat(32),
            SUBJECT,
            now,
            90,
            Vec::new(),
        );
        proof.signature = sign_message(&proof.signing_bytes(), &keypair().private)
            .as_bytes()
            .to_vec();
        proof
    }

    fn ctx_with_key() -> MapCtx {
        let ctx = MapCtx::default();
        ctx.keys
            .lock()
            .unwrap()
            .push((SUBJECT.to_string(), keypair().public));
        ctx
    }

    fn verification_tx(proof: LivenessProof) -> Transaction {
        Transaction::Verification(VerificationTx {
            requester: SUBJECT.into(),
            proof,
            fee_paid: TokenAmount::new(1),
        })
    }

    fn anchor() -> VitalityAnchor {
        VitalityAnchor::new(&KernelParams::default())
    }

    #[test]
    fn first_valid_proof_wins() {
        let now = Timestamp::new(10_000);
        let ctx = ctx_with_key();

        // Captured far outside the freshness window.
        let stale = signed_proof("aa", Timestamp::new(1));
        let txs = vec![
            verification_tx(stale),
            verification_tx(signed_proof("bb", now)),
            verification_tx(signed_proof("cc", now)),
        ];

        let admitted = anchor().admit(&txs, &ctx, 5, now).unwrap();
        assert_eq!(admitted.tx_index, 1);
        assert_eq!(admitted.proof_hash, ProofHash::parse(&"bb".repeat(32)).unwrap());
        assert_eq!(admitted.subject.to_string(), SUBJECT);
    }

    #[test]
    fn transfer_attached_proof_can_anchor() {
        let now = Timestamp::new(10_000);
        let ctx = ctx_with_key();
        let txs = vec![Transaction::Transfer(TransferTx {
            source: SUBJECT.into(),
            destination: "did:vital:np:bob".into(),
            amount: TokenAmount::new(3),
            proof: Some(signed_proof("dd", now)),
        })];

        let admitted = anchor().admit(&txs, &ctx, 5, now).unwrap();
        assert_eq!(admitted.tx_index, 0);
    }

    #[test]
    fn all_invalid_rejects_with_per_proof_reasons() {
        let now = Timestamp::new(10_000);
        let ctx = ctx_with_key();

        let mut low_score = signed_proof("aa", now);
        low_score.liveness_score = 10;
        let mut bad_hash = signed_proof("bb", now);
        bad_hash.proof_hash = "not-hex".into();
        let txs = vec![verification_tx(low_score), verification_tx(bad_hash)];

        match anchor().admit(&txs, &ctx, 5, now) {
            Err(AnchorError::NoValidProof { height, rejections }) => {
                assert_eq!(height, 5);
                assert_eq!(rejections.len(), 2);
                assert_eq!(rejections[0].tx_index, 0);
                assert!(rejections[0].reason.contains("score"));
                assert_eq!(rejections[1].tx_index, 1);
            }
            other => panic!("expected NoValidProof, got {other:?}"),
        }
    }

    #[test]
    fn block_without_any_proof_is_rejected() {
        let ctx = ctx_with_key();
        let txs = vec![Transaction::Transfer(TransferTx {
            source: SUBJECT.into(),
            destination: "did:vital:np:bob".into(),
            amount: TokenAmount::new(3),
            proof: None,
        })];

        match anchor().admit(&txs, &ctx, 5, Timestamp::new(10_000)) {
            Err(AnchorError::NoValidProof { rejections, .. }) => {
                assert!(rejections.is_empty());
            }
            other => panic!("expected NoValidProof, got {other:?}"),
        }
    }

    #[test]
    fn used_proof_does_not_anchor_again() {
        let now = Timestamp::new(10_000);
        let ctx = ctx_with_key();
        let proof = signed_proof("ee", now);
        ctx.used
            .lock()
            .unwrap()
            .insert(ProofHash::parse(&proof.proof_hash).unwrap());

        let result = anchor().admit(&[verification_tx(proof)], &ctx, 5, now);
        assert!(matches!(result, Err(AnchorError::NoValidProof { .. })));
    }
}
