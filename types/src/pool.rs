//! Ledger pool identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A ledger account receiving fee-distribution credits.
///
/// Jurisdiction pools are keyed by the jurisdiction segment of the requester's
/// DID. The remaining variants are protocol-wide accounts; the citizen
/// dividend, R&D vault, and infrastructure pools exist for the four-equal-pools
/// fee policy.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PoolId {
    Jurisdiction(String),
    Global,
    BurnSink,
    CitizenDividend,
    ResearchVault,
    Infrastructure,
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolId::Jurisdiction(code) => write!(f, "pool:jurisdiction:{code}"),
            PoolId::Global => write!(f, "pool:global"),
            PoolId::BurnSink => write!(f, "pool:burn"),
            PoolId::CitizenDividend => write!(f, "pool:citizen-dividend"),
            PoolId::ResearchVault => write!(f, "pool:rd-vault"),
            PoolId::Infrastructure => write!(f, "pool:infrastructure"),
        }
    }
}
