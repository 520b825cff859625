//! Read-only query surface over committed kernel state.

use vital_store::{KernelStore, StoreError};
use vital_supply::{PriceOracle, SupplyController, SupplyStatus};
use vital_types::{
    BlacklistEntry, Did, FeeDistributionRecord, KernelParams, LivenessProof, PoolId, ProofHash,
    SupplyEquilibriumParams, TokenAmount,
};

/// Thin projections over the store for dashboards and explorer services.
/// Every method reads committed state only; nothing here mutates.
pub struct KernelQueries<'a, S: ?Sized> {
    store: &'a S,
    controller: SupplyController,
    oracle: PriceOracle,
}

impl<'a, S: KernelStore + ?Sized> KernelQueries<'a, S> {
    pub fn new(store: &'a S, controller: SupplyController, params: &KernelParams) -> Self {
        Self {
            store,
            controller,
            oracle: PriceOracle::new(params),
        }
    }

    /// The burn rate in force for the committed circulating supply.
    pub fn burn_rate_bps(&self) -> Result<u32, StoreError> {
        Ok(self.controller.burn_rate_bps(self.store.circulating_supply()?))
    }

    pub fn supply_status(&self) -> Result<SupplyStatus, StoreError> {
        Ok(self.controller.supply_status(self.store.circulating_supply()?))
    }

    pub fn supply_params(&self) -> &SupplyEquilibriumParams {
        self.controller.params()
    }

    pub fn verification_price(&self) -> TokenAmount {
        self.oracle.price()
    }

    pub fn is_blacklisted(&self, hash: &ProofHash) -> Result<bool, StoreError> {
        self.store.is_blacklisted(hash)
    }

    pub fn blacklist_entry(&self, hash: &ProofHash) -> Result<Option<BlacklistEntry>, StoreError> {
        self.store.get_blacklist_entry(hash)
    }

    pub fn proof(&self, hash: &ProofHash) -> Result<Option<LivenessProof>, StoreError> {
        self.store.get_proof(hash)
    }

    pub fn citizen_balance(&self, citizen: &Did) -> Result<TokenAmount, StoreError> {
        self.store.balance(citizen)
    }

    pub fn pool_balance(&self, pool: &PoolId) -> Result<TokenAmount, StoreError> {
        self.store.pool_balance(pool)
    }

    pub fn fee_records(&self) -> Result<Vec<FeeDistributionRecord>, StoreError> {
        self.store.fee_records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vital_nullables::NullStore;
    use vital_store::SupplyStore as _;

    fn queries(store: &NullStore) -> KernelQueries<'_, NullStore> {
        let params = KernelParams::default();
        let controller = SupplyController::new(SupplyEquilibriumParams {
            max_total_supply: TokenAmount::new(1_000_000),
            supply_threshold: TokenAmount::new(500_000),
            ..SupplyEquilibriumParams::default()
        })
        .expect("valid params");
        KernelQueries::new(store, controller, &params)
    }

    #[test]
    fn burn_rate_tracks_committed_supply() {
        let store = NullStore::new();
        store
            .set_circulating_supply(TokenAmount::new(100_000))
            .unwrap();
        assert_eq!(queries(&store).burn_rate_bps().unwrap(), 200);

        store
            .set_circulating_supply(TokenAmount::new(600_000))
            .unwrap();
        assert_eq!(queries(&store).burn_rate_bps().unwrap(), 500);
    }

    #[test]
    fn supply_status_projection() {
        let store = NullStore::new();
        store
            .set_circulating_supply(TokenAmount::new(250_000))
            .unwrap();
        let status = queries(&store).supply_status().unwrap();
        assert_eq!(status.percent_of_max_bps, 2_500);
        assert_eq!(status.remaining_mintable, TokenAmount::new(750_000));
    }
}
