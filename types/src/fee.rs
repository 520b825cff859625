//! Append-only fee-distribution audit record.

use crate::amount::TokenAmount;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// One record per fee-bearing verification.
///
/// Conservation holds for every record regardless of policy:
/// `burned + jurisdiction_pool + global_pool == total`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeDistributionRecord {
    pub total: TokenAmount,
    pub burned: TokenAmount,
    pub jurisdiction_pool: TokenAmount,
    /// Jurisdiction derived from the requester's DID.
    pub jurisdiction_pool_id: String,
    pub global_pool: TokenAmount,
    /// The burn rate in force when the split was computed (basis points).
    pub burn_rate_applied_bps: u32,
    pub at: Timestamp,
    pub block_height: u64,
}

impl FeeDistributionRecord {
    /// Exact-conservation check, used by audit tooling and tests.
    pub fn is_conserved(&self) -> bool {
        self.burned
            .checked_add(self.jurisdiction_pool)
            .and_then(|sum| sum.checked_add(self.global_pool))
            == Some(self.total)
    }
}
