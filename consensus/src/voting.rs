//! Deepfake voting and quorum tally.

use crate::blacklist::BlacklistRegistry;
use crate::error::ConsensusError;
use vital_store::{BlacklistStore, ProofStore, ValidatorRoster, VoteStore};
use vital_types::{BlacklistEntry, DeepfakeVote, KernelParams, Timestamp};

/// The outcome of submitting a deepfake vote.
#[derive(Clone, Debug)]
pub enum VoteOutcome {
    /// Vote recorded; quorum not (yet) reached.
    Accepted {
        deepfake_votes: u32,
        total_validators: u32,
        /// floor(deepfake_votes * 100 / total_validators)
        percent: u64,
    },
    /// The proof is blacklisted — either this vote tipped the tally over
    /// quorum, or a prior decision already stands.
    Blacklisted(BlacklistEntry),
}

/// Tallies validator votes per proof and decides, on each new vote, whether
/// the rejection quorum is now reached.
pub struct ConsensusOfPresence {
    quorum_percent: u64,
    registry: BlacklistRegistry,
}

impl ConsensusOfPresence {
    pub fn new(params: &KernelParams) -> Self {
        Self {
            quorum_percent: params.deepfake_quorum_percent,
            registry: BlacklistRegistry,
        }
    }

    /// Submit one validator's verdict on a proof.
    ///
    /// A repeat vote from the same validator overwrites its prior one; votes
    /// are never deleted. The validator-set size is read from the live
    /// roster on every call. The tally uses integer floor percentage, so
    /// with 10 validators 5 deepfake votes (50%) do not blacklist and 6
    /// (60%) do.
    pub fn submit_vote(
        &self,
        votes: &dyn VoteStore,
        blacklist: &dyn BlacklistStore,
        proofs: &dyn ProofStore,
        roster: &dyn ValidatorRoster,
        vote: DeepfakeVote,
        now: Timestamp,
    ) -> Result<VoteOutcome, ConsensusError> {
        if vote.confidence > 100 {
            return Err(ConsensusError::ConfidenceOutOfRange(vote.confidence));
        }
        let total_validators = roster.validator_count();
        if total_validators == 0 {
            return Err(ConsensusError::NoValidators);
        }
        if !roster.contains(&vote.validator_id) {
            return Err(ConsensusError::UnknownValidator(
                vote.validator_id.to_string(),
            ));
        }

        let proof_hash = vote.proof_hash;
        votes.put_vote(&vote)?;

        // A standing decision is permanent; later votes are recorded above
        // but can never reverse it.
        if let Some(existing) = self.registry.get(blacklist, &proof_hash)? {
            return Ok(VoteOutcome::Blacklisted(existing));
        }

        let deepfake_votes = votes
            .votes_for_proof(&proof_hash)?
            .iter()
            .filter(|v| v.is_deepfake)
            .count() as u32;
        let percent = u64::from(deepfake_votes) * 100 / u64::from(total_validators);

        if percent >= self.quorum_percent {
            let subject_id = proofs
                .get_proof(&proof_hash)?
                .map(|proof| proof.subject_id);
            let entry = self.registry.record(
                blacklist,
                BlacklistEntry {
                    proof_hash,
                    reason: format!(
                        "deepfake quorum: {deepfake_votes} of {total_validators} validators ({percent}%)"
                    ),
                    blacklisted_at: now,
                    deepfake_vote_count: deepfake_votes,
                    total_validators_at_decision: total_validators,
                    subject_id,
                },
            )?;
            return Ok(VoteOutcome::Blacklisted(entry));
        }

        Ok(VoteOutcome::Accepted {
            deepfake_votes,
            total_validators,
            percent,
        })
    }
}
