//! Block execution: the single-writer state transition for one block.

use crate::anchor::{AdmittedProof, VitalityAnchor};
use crate::config::KernelConfig;
use crate::error::{AnchorError, ProofRejection};
use std::collections::BTreeSet;
use vital_store::KernelStore;
use vital_supply::{
    FeeDistributor, MintEngine, MintReceipt, PriceOracle, SupplyBook, SupplyController, SupplyError,
};
use vital_types::{
    Did, FeeDistributionRecord, KernelParams, LedgerEvent, LivenessProof, ParamsError, ProofHash,
    SupplyEquilibriumParams, Timestamp, TokenAmount, Transaction,
};
use vital_verification::{ProofValidator, ValidationContext, ValidationError};

/// Everything a committed block produced.
#[derive(Clone, Debug)]
pub struct BlockReceipt {
    pub height: u64,
    /// The proof that anchored the block.
    pub anchored: AdmittedProof,
    pub minted: Vec<MintReceipt>,
    pub fees: Vec<FeeDistributionRecord>,
    /// Verification transactions skipped because their proof failed
    /// validation. The block still committed: at least one proof was valid.
    pub rejected_proofs: Vec<ProofRejection>,
    pub events: Vec<LedgerEvent>,
}

/// Validation lookups over the durable store plus the block's staged proof
/// marks, so a proof consumed earlier in the same block already reads as
/// used.
struct BlockContext<'a, S: ?Sized> {
    store: &'a S,
    staged_used: &'a BTreeSet<ProofHash>,
}

impl<S: KernelStore + ?Sized> ValidationContext for BlockContext<'_, S> {
    fn proof_used(&self, hash: &ProofHash) -> Result<bool, vital_store::StoreError> {
        Ok(self.staged_used.contains(hash) || self.store.proof_used(hash)?)
    }

    fn is_blacklisted(&self, hash: &ProofHash) -> Result<bool, vital_store::StoreError> {
        self.store.is_blacklisted(hash)
    }

    fn verification_key(
        &self,
        subject: &Did,
    ) -> Result<Option<vital_types::PublicKey>, vital_store::StoreError> {
        self.store.subject_key(subject)
    }
}

/// Executes one block as an all-or-nothing state transition.
///
/// The host consensus engine serializes block execution, so a single
/// executor call owns the store for the duration of the block. The pipeline:
///
/// 1. open a staged [`SupplyBook`] on the live circulating supply
/// 2. per verification transaction: fee check, requester parse, jurisdiction
///    check, proof validation, mint against the running book supply
/// 3. anchoring: the first consumed verification proof anchors the block;
///    failing that, [`VitalityAnchor::admit`] scans for a transfer-attached
///    proof; zero valid proofs rejects the whole block
/// 4. fee distribution at the post-mint burn rate
/// 5. commit: proof marks, supply, balances, pool credits, and fee records
///    written back in one pass
///
/// Any error before step 5 returns without touching the store. A production
/// backend wraps the commit pass in a single write transaction.
pub struct BlockExecutor {
    validator: ProofValidator,
    anchor: VitalityAnchor,
    controller: SupplyController,
    mint: MintEngine,
    fees: FeeDistributor,
    oracle: PriceOracle,
}

impl BlockExecutor {
    pub fn new(config: &KernelConfig) -> Result<Self, ParamsError> {
        Self::with_params(&config.kernel, config.supply.clone(), config.fee_policy)
    }

    pub fn with_params(
        kernel: &KernelParams,
        supply: SupplyEquilibriumParams,
        fee_policy: vital_supply::FeePolicy,
    ) -> Result<Self, ParamsError> {
        kernel.validate()?;
        Ok(Self {
            validator: ProofValidator::new(kernel),
            anchor: VitalityAnchor::new(kernel),
            controller: SupplyController::new(supply)?,
            mint: MintEngine::new(kernel),
            fees: FeeDistributor::new(fee_policy),
            oracle: PriceOracle::new(kernel),
        })
    }

    pub fn controller(&self) -> &SupplyController {
        &self.controller
    }

    pub fn execute_block<S: KernelStore>(
        &self,
        store: &S,
        height: u64,
        txs: &[Transaction],
        now: Timestamp,
    ) -> Result<BlockReceipt, AnchorError> {
        let mut book = SupplyBook::open(store)?;
        let mut staged_used: BTreeSet<ProofHash> = BTreeSet::new();
        let mut consumed: Vec<(ProofHash, LivenessProof)> = Vec::new();
        let mut anchored: Option<AdmittedProof> = None;
        let mut rejected: Vec<ProofRejection> = Vec::new();
        let mut minted: Vec<MintReceipt> = Vec::new();
        let mut pending_fees: Vec<(TokenAmount, Did)> = Vec::new();

        for (tx_index, tx) in txs.iter().enumerate() {
            let Transaction::Verification(vtx) = tx else {
                continue;
            };

            self.oracle.check_fee(vtx.fee_paid)?;
            let requester = Did::parse(&vtx.requester)
                .map_err(|source| AnchorError::MalformedRequester { tx_index, source })?;
            if !store.has_jurisdiction_pool(requester.jurisdiction())? {
                return Err(
                    SupplyError::UnknownJurisdiction(requester.jurisdiction().to_string()).into(),
                );
            }

            let subject = match Did::parse(&vtx.proof.subject_id) {
                Ok(subject) => subject,
                Err(err) => {
                    rejected.push(ProofRejection {
                        tx_index,
                        proof_hash: vtx.proof.proof_hash.clone(),
                        reason: ValidationError::from(err).to_string(),
                    });
                    continue;
                }
            };
            let ctx = BlockContext {
                store,
                staged_used: &staged_used,
            };
            let proof_hash = match self.validator.validate(&vtx.proof, &ctx, now) {
                Ok(hash) => hash,
                Err(ValidationError::Storage(err)) => return Err(err.into()),
                Err(err) => {
                    tracing::warn!(height, tx_index, reason = %err, "verification proof rejected");
                    rejected.push(ProofRejection {
                        tx_index,
                        proof_hash: vtx.proof.proof_hash.clone(),
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            let mut used_proof = vtx.proof.clone();
            used_proof.mark_used(height);
            staged_used.insert(proof_hash);
            consumed.push((proof_hash, used_proof));

            let receipt =
                self.mint
                    .mint_on_verification(&self.controller, &mut book, &subject, height)?;
            minted.push(receipt);
            pending_fees.push((vtx.fee_paid, requester));

            if anchored.is_none() {
                anchored = Some(AdmittedProof {
                    proof_hash,
                    subject,
                    tx_index,
                });
            }
        }

        // Verification transactions self-anchor; a block carrying none falls
        // back to scanning transfer-attached proofs through the gate.
        let anchored = match anchored {
            Some(admitted) => admitted,
            None => {
                let ctx = BlockContext {
                    store,
                    staged_used: &staged_used,
                };
                let admitted = self.anchor.admit(txs, &ctx, height, now)?;
                if let Some(proof) = txs
                    .get(admitted.tx_index)
                    .and_then(Transaction::attached_proof)
                {
                    let mut used_proof = proof.clone();
                    used_proof.mark_used(height);
                    staged_used.insert(admitted.proof_hash);
                    consumed.push((admitted.proof_hash, used_proof));
                }
                admitted
            }
        };

        // Fees distribute after all mints, so the burn rate reflects the
        // block's post-mint supply position.
        for (fee, requester) in &pending_fees {
            self.fees
                .distribute(&self.controller, &mut book, store, *fee, requester, height, now)?;
        }

        book.push_event(LedgerEvent::ProofAnchored {
            proof_hash: anchored.proof_hash,
            subject: anchored.subject.clone(),
            block_height: height,
        });

        // Commit pass.
        let fee_records = book.take_fee_records();
        let events = book.commit(store)?;
        for (hash, proof) in &consumed {
            store.put_proof(hash, proof)?;
        }
        for record in &fee_records {
            store.append_fee_record(record)?;
        }

        tracing::info!(
            height,
            anchored = %anchored.proof_hash,
            mints = minted.len(),
            fees = fee_records.len(),
            skipped = rejected.len(),
            "block committed"
        );

        Ok(BlockReceipt {
            height,
            anchored,
            minted,
            fees: fee_records,
            rejected_proofs: rejected,
            events,
        })
    }
}
