//! Supply, balance, and pool storage trait.

use crate::StoreError;
use vital_types::{Did, PoolId, TokenAmount};

/// The monetary side of the ledger: the circulating-supply counter, citizen
/// balances, pool balances, and the registry of known jurisdiction pools.
///
/// Mutation happens only through the block executor's commit; mid-block
/// arithmetic lives in the staged supply book, never here.
pub trait SupplyStore {
    fn circulating_supply(&self) -> Result<TokenAmount, StoreError>;
    fn set_circulating_supply(&self, supply: TokenAmount) -> Result<(), StoreError>;

    fn balance(&self, citizen: &Did) -> Result<TokenAmount, StoreError>;
    fn set_balance(&self, citizen: &Did, amount: TokenAmount) -> Result<(), StoreError>;

    fn pool_balance(&self, pool: &PoolId) -> Result<TokenAmount, StoreError>;
    fn set_pool_balance(&self, pool: &PoolId, amount: TokenAmount) -> Result<(), StoreError>;

    /// Create the fee pool for a jurisdiction code. Idempotent.
    fn register_jurisdiction(&self, code: &str) -> Result<(), StoreError>;
    fn has_jurisdiction_pool(&self, code: &str) -> Result<bool, StoreError>;
}
