use thiserror::Error;
use vital_types::TokenAmount;

#[derive(Debug, Error)]
pub enum SupplyError {
    /// The mint would push circulating supply past the immutable ceiling.
    /// A policy decision, not a bug; the mint is permanently rejected.
    #[error("mint of {attempted} rejected: supply {circulating} + mint > cap {max}")]
    CapExceeded {
        attempted: TokenAmount,
        circulating: TokenAmount,
        max: TokenAmount,
    },

    #[error("usage-based minting is disabled")]
    MintingDisabled,

    #[error("no fee pool registered for jurisdiction {0}")]
    UnknownJurisdiction(String),

    #[error("verification fee is zero")]
    ZeroFee,

    #[error("verification fee {paid} below the fixed price {required}")]
    InsufficientFee {
        required: TokenAmount,
        paid: TokenAmount,
    },

    #[error("supply arithmetic overflow")]
    Overflow,

    #[error("storage error: {0}")]
    Storage(#[from] vital_store::StoreError),
}
