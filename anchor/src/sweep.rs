//! Advisory maintenance sweep for stale, never-anchored proofs.

use vital_store::{BlacklistStore, ProofStore, StoreError};
use vital_types::Timestamp;

/// What one sweep pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub scanned: u64,
    pub pruned: u64,
}

/// Prune cached proofs that never anchored a block and are past the
/// freshness window, so they can never validate again anyway.
///
/// Used proofs are ledger history and blacklisted proofs are evidence; both
/// are kept forever. The sweep is advisory: the host may run it periodically
/// or never, correctness does not depend on it.
pub fn sweep_stale_proofs(
    proofs: &dyn ProofStore,
    blacklist: &dyn BlacklistStore,
    max_age_secs: u64,
    now: Timestamp,
) -> Result<SweepReport, StoreError> {
    let mut report = SweepReport::default();
    for (hash, proof) in proofs.iter_proofs()? {
        report.scanned += 1;
        if proof.used
            || blacklist.is_blacklisted(&hash)?
            || !proof.captured_at.has_expired(max_age_secs, now)
        {
            continue;
        }
        proofs.delete_proof(&hash)?;
        report.pruned += 1;
    }
    if report.pruned > 0 {
        tracing::debug!(scanned = report.scanned, pruned = report.pruned, "stale proofs pruned");
    }
    Ok(report)
}
