//! Fee distribution.

use crate::book::SupplyBook;
use crate::controller::SupplyController;
use crate::error::SupplyError;
use serde::{Deserialize, Serialize};
use vital_store::SupplyStore;
use vital_types::{Did, FeeDistributionRecord, PoolId, Timestamp, TokenAmount};

/// Which split applies to collected verification fees.
///
/// Exactly one policy is active per deployment, chosen at configuration
/// time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeePolicy {
    /// Burn at the active equilibrium rate; the remainder splits 50/50
    /// between the requester's jurisdiction pool and the global pool (the
    /// odd unit goes to the global pool).
    DynamicSplit,
    /// Four equal 25% shares: citizen dividend, R&D vault, infrastructure,
    /// burn. Independent of the dynamic rate; the burn share absorbs
    /// division remainders so conservation stays exact.
    FourEqualPools,
}

impl Default for FeePolicy {
    fn default() -> Self {
        FeePolicy::DynamicSplit
    }
}

/// Splits a collected fee among the burn sink and the fee pools.
#[derive(Clone, Copy, Debug)]
pub struct FeeDistributor {
    policy: FeePolicy,
}

impl FeeDistributor {
    pub fn new(policy: FeePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> FeePolicy {
        self.policy
    }

    /// Distribute one collected fee.
    ///
    /// The jurisdiction is derived from the requester's DID, never from a
    /// client-supplied tag, and must have a registered pool. A zero fee is
    /// a no-op (`Ok(None)`): nothing moves, no record is written. All
    /// transfers land in the staged book, so they commit with the block or
    /// not at all.
    pub fn distribute(
        &self,
        controller: &SupplyController,
        book: &mut SupplyBook,
        store: &dyn SupplyStore,
        fee: TokenAmount,
        requester: &Did,
        block_height: u64,
        now: Timestamp,
    ) -> Result<Option<FeeDistributionRecord>, SupplyError> {
        if fee.is_zero() {
            return Ok(None);
        }
        let jurisdiction = requester.jurisdiction();
        if !store.has_jurisdiction_pool(jurisdiction)? {
            return Err(SupplyError::UnknownJurisdiction(jurisdiction.to_string()));
        }

        let rate_bps = controller.burn_rate_bps(book.circulating());
        let sink = controller.params().burn_sink.clone();

        let record = match self.policy {
            FeePolicy::DynamicSplit => {
                let burned = fee.apply_bps(rate_bps);
                let remainder = fee - burned;
                let jurisdiction_share = TokenAmount::new(remainder.raw() / 2);
                let global_share = remainder - jurisdiction_share;

                book.burn(&sink, burned, block_height)?;
                book.credit_pool(
                    PoolId::Jurisdiction(jurisdiction.to_string()),
                    jurisdiction_share,
                    block_height,
                )?;
                book.credit_pool(PoolId::Global, global_share, block_height)?;

                FeeDistributionRecord {
                    total: fee,
                    burned,
                    jurisdiction_pool: jurisdiction_share,
                    jurisdiction_pool_id: jurisdiction.to_string(),
                    global_pool: global_share,
                    burn_rate_applied_bps: rate_bps,
                    at: now,
                    block_height,
                }
            }
            FeePolicy::FourEqualPools => {
                let quarter = TokenAmount::new(fee.raw() / 4);
                let burned = fee - quarter - quarter - quarter;

                book.burn(&sink, burned, block_height)?;
                book.credit_pool(PoolId::CitizenDividend, quarter, block_height)?;
                book.credit_pool(PoolId::ResearchVault, quarter, block_height)?;
                book.credit_pool(PoolId::Infrastructure, quarter, block_height)?;

                // The citizen dividend reads as the jurisdiction-side share;
                // R&D and infrastructure are protocol-wide.
                FeeDistributionRecord {
                    total: fee,
                    burned,
                    jurisdiction_pool: quarter,
                    jurisdiction_pool_id: jurisdiction.to_string(),
                    global_pool: quarter.checked_add(quarter).ok_or(SupplyError::Overflow)?,
                    burn_rate_applied_bps: rate_bps,
                    at: now,
                    block_height,
                }
            }
        };

        tracing::debug!(
            total = %record.total,
            burned = %record.burned,
            jurisdiction = %record.jurisdiction_pool_id,
            rate_bps = record.burn_rate_applied_bps,
            "fee distributed"
        );
        book.record_fee(record.clone());
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vital_nullables::NullStore;
    use vital_store::{FeeRecordStore as _, SupplyStore as _};
    use vital_types::SupplyEquilibriumParams;

    fn controller() -> SupplyController {
        SupplyController::new(SupplyEquilibriumParams {
            max_total_supply: TokenAmount::new(1_000_000),
            supply_threshold: TokenAmount::new(500_000),
            base_burn_rate_bps: 200,
            elevated_burn_rate_bps: 500,
            burn_sink: "pool:burn".into(),
            enabled: true,
        })
        .unwrap()
    }

    fn requester() -> Did {
        Did::parse("did:vital:np:alice").unwrap()
    }

    fn store_with(supply: u128) -> NullStore {
        let store = NullStore::new();
        store
            .set_circulating_supply(TokenAmount::new(supply))
            .unwrap();
        store.register_jurisdiction("np").unwrap();
        store
    }

    fn distribute(
        policy: FeePolicy,
        store: &NullStore,
        fee: u128,
    ) -> Result<Option<FeeDistributionRecord>, SupplyError> {
        let mut book = SupplyBook::open(store).unwrap();
        let result = FeeDistributor::new(policy).distribute(
            &controller(),
            &mut book,
            store,
            TokenAmount::new(fee),
            &requester(),
            9,
            Timestamp::new(1234),
        );
        if result.is_ok() {
            book.commit(store).unwrap();
        }
        result
    }

    #[test]
    fn dynamic_split_at_base_rate() {
        let store = store_with(100_000);
        let record = distribute(FeePolicy::DynamicSplit, &store, 1000)
            .unwrap()
            .unwrap();
        // 2% of 1000 burned, remainder 980 split 490/490.
        assert_eq!(record.burned, TokenAmount::new(20));
        assert_eq!(record.jurisdiction_pool, TokenAmount::new(490));
        assert_eq!(record.global_pool, TokenAmount::new(490));
        assert_eq!(record.burn_rate_applied_bps, 200);
        assert!(record.is_conserved());

        assert_eq!(
            store
                .pool_balance(&PoolId::Jurisdiction("np".into()))
                .unwrap(),
            TokenAmount::new(490)
        );
        assert_eq!(
            store.pool_balance(&PoolId::Global).unwrap(),
            TokenAmount::new(490)
        );
        // Burned amount left circulation.
        assert_eq!(
            store.circulating_supply().unwrap(),
            TokenAmount::new(99_980)
        );
    }

    #[test]
    fn dynamic_split_odd_unit_goes_global() {
        let store = store_with(100_000);
        // 2% of 51 floors to 1 burned; remainder 50 splits 25/25. Use 53:
        // burned 1, remainder 52 -> 26/26. Try 1001: burned 20, remainder
        // 981 -> 490 jurisdiction, 491 global.
        let record = distribute(FeePolicy::DynamicSplit, &store, 1001)
            .unwrap()
            .unwrap();
        assert_eq!(record.burned, TokenAmount::new(20));
        assert_eq!(record.jurisdiction_pool, TokenAmount::new(490));
        assert_eq!(record.global_pool, TokenAmount::new(491));
        assert!(record.is_conserved());
    }

    #[test]
    fn dynamic_split_uses_elevated_rate_above_threshold() {
        let store = store_with(600_000);
        let record = distribute(FeePolicy::DynamicSplit, &store, 1000)
            .unwrap()
            .unwrap();
        assert_eq!(record.burned, TokenAmount::new(50));
        assert_eq!(record.burn_rate_applied_bps, 500);
        assert!(record.is_conserved());
    }

    #[test]
    fn four_equal_pools_split() {
        let store = store_with(100_000);
        let record = distribute(FeePolicy::FourEqualPools, &store, 1000)
            .unwrap()
            .unwrap();
        assert_eq!(record.burned, TokenAmount::new(250));
        assert_eq!(record.jurisdiction_pool, TokenAmount::new(250));
        assert_eq!(record.global_pool, TokenAmount::new(500));
        assert!(record.is_conserved());

        for pool in [
            PoolId::CitizenDividend,
            PoolId::ResearchVault,
            PoolId::Infrastructure,
        ] {
            assert_eq!(store.pool_balance(&pool).unwrap(), TokenAmount::new(250));
        }
    }

    #[test]
    fn four_equal_pools_burn_absorbs_remainder() {
        let store = store_with(100_000);
        let record = distribute(FeePolicy::FourEqualPools, &store, 1003)
            .unwrap()
            .unwrap();
        // quarter = 250, burn = 1003 - 750 = 253.
        assert_eq!(record.burned, TokenAmount::new(253));
        assert!(record.is_conserved());
    }

    #[test]
    fn zero_fee_is_noop() {
        let store = store_with(100_000);
        let result = distribute(FeePolicy::DynamicSplit, &store, 0).unwrap();
        assert!(result.is_none());
        assert_eq!(store.fee_record_count().unwrap(), 0);
        assert_eq!(
            store.circulating_supply().unwrap(),
            TokenAmount::new(100_000)
        );
    }

    #[test]
    fn unknown_jurisdiction_rejected_before_any_transfer() {
        let store = NullStore::new();
        store
            .set_circulating_supply(TokenAmount::new(100_000))
            .unwrap();
        // "np" never registered.
        let mut book = SupplyBook::open(&store).unwrap();
        let err = FeeDistributor::new(FeePolicy::DynamicSplit)
            .distribute(
                &controller(),
                &mut book,
                &store,
                TokenAmount::new(1000),
                &requester(),
                9,
                Timestamp::new(1234),
            )
            .unwrap_err();
        assert!(matches!(err, SupplyError::UnknownJurisdiction(code) if code == "np"));
        // No staged movement.
        assert_eq!(book.circulating(), TokenAmount::new(100_000));
    }

    #[test]
    fn jurisdiction_comes_from_did_not_caller() {
        let store = store_with(100_000);
        store.register_jurisdiction("us").unwrap();
        let record = distribute(FeePolicy::DynamicSplit, &store, 1000)
            .unwrap()
            .unwrap();
        // Requester DID says "np"; the "us" pool stays untouched.
        assert_eq!(record.jurisdiction_pool_id, "np");
        assert_eq!(
            store
                .pool_balance(&PoolId::Jurisdiction("us".into()))
                .unwrap(),
            TokenAmount::ZERO
        );
    }
}
