//! Outbound ledger events.
//!
//! Every supply-affecting transition emits one event, consumed by read-only
//! analytics and explorer services. The kernel itself never reads these back.

use crate::amount::TokenAmount;
use crate::did::Did;
use crate::hash::ProofHash;
use crate::pool::PoolId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// Reward minted to a citizen after a successful verification.
    Mint {
        recipient: Did,
        amount: TokenAmount,
        block_height: u64,
    },
    /// Fee portion destroyed; circulating supply shrinks by `amount`.
    Burn {
        sink: String,
        amount: TokenAmount,
        block_height: u64,
    },
    /// Fee portion credited to a pool.
    FeeDistributed {
        pool: PoolId,
        amount: TokenAmount,
        block_height: u64,
    },
    /// The proof that anchored a block.
    ProofAnchored {
        proof_hash: ProofHash,
        subject: Did,
        block_height: u64,
    },
}
