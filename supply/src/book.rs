//! Staged monetary state for one block.

use crate::error::SupplyError;
use std::collections::BTreeMap;
use vital_store::SupplyStore;
use vital_types::{Did, FeeDistributionRecord, LedgerEvent, PoolId, TokenAmount};

/// The running monetary state of a block under execution.
///
/// Opened from the live circulating supply, mutated by the mint and fee
/// engines, and written back in a single [`SupplyBook::commit`]. Because the
/// cap check reads `circulating()` from the book, a second mint in the same
/// block sees the first mint's effect — never a block-start snapshot.
/// Dropping the book without committing discards every staged change.
#[derive(Debug)]
pub struct SupplyBook {
    circulating: TokenAmount,
    credits: BTreeMap<Did, TokenAmount>,
    pool_credits: BTreeMap<PoolId, TokenAmount>,
    fee_records: Vec<FeeDistributionRecord>,
    events: Vec<LedgerEvent>,
}

impl SupplyBook {
    /// Open a book seeded with the live circulating supply.
    pub fn open(store: &dyn SupplyStore) -> Result<Self, SupplyError> {
        Ok(Self {
            circulating: store.circulating_supply()?,
            credits: BTreeMap::new(),
            pool_credits: BTreeMap::new(),
            fee_records: Vec::new(),
            events: Vec::new(),
        })
    }

    /// The running circulating supply, including every staged mint and burn.
    pub fn circulating(&self) -> TokenAmount {
        self.circulating
    }

    /// Stage a mint: supply and the recipient's balance rise by `amount`.
    /// Cap enforcement is the caller's job (see `MintEngine`).
    pub fn mint(
        &mut self,
        recipient: &Did,
        amount: TokenAmount,
        block_height: u64,
    ) -> Result<(), SupplyError> {
        self.circulating = self
            .circulating
            .checked_add(amount)
            .ok_or(SupplyError::Overflow)?;
        let credit = self.credits.entry(recipient.clone()).or_insert(TokenAmount::ZERO);
        *credit = credit.checked_add(amount).ok_or(SupplyError::Overflow)?;
        self.events.push(LedgerEvent::Mint {
            recipient: recipient.clone(),
            amount,
            block_height,
        });
        Ok(())
    }

    /// Stage a burn: circulating supply shrinks by `amount` and the burn-sink
    /// tally grows by it, so cumulative burn is queryable as a pool balance.
    /// No-op on zero.
    pub fn burn(
        &mut self,
        sink: &str,
        amount: TokenAmount,
        block_height: u64,
    ) -> Result<(), SupplyError> {
        if amount.is_zero() {
            return Ok(());
        }
        self.circulating = self
            .circulating
            .checked_sub(amount)
            .ok_or(SupplyError::Overflow)?;
        let tally = self
            .pool_credits
            .entry(PoolId::BurnSink)
            .or_insert(TokenAmount::ZERO);
        *tally = tally.checked_add(amount).ok_or(SupplyError::Overflow)?;
        self.events.push(LedgerEvent::Burn {
            sink: sink.to_string(),
            amount,
            block_height,
        });
        Ok(())
    }

    /// Stage a pool credit. No-op on zero.
    pub fn credit_pool(
        &mut self,
        pool: PoolId,
        amount: TokenAmount,
        block_height: u64,
    ) -> Result<(), SupplyError> {
        if amount.is_zero() {
            return Ok(());
        }
        let credit = self.pool_credits.entry(pool.clone()).or_insert(TokenAmount::ZERO);
        *credit = credit.checked_add(amount).ok_or(SupplyError::Overflow)?;
        self.events.push(LedgerEvent::FeeDistributed {
            pool,
            amount,
            block_height,
        });
        Ok(())
    }

    /// Stage a fee-distribution audit record.
    pub fn record_fee(&mut self, record: FeeDistributionRecord) {
        self.fee_records.push(record);
    }

    pub fn push_event(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }

    /// Write every staged change back to the store and hand the events to
    /// the caller. Called exactly once, at block commit.
    pub fn commit(self, store: &dyn SupplyStore) -> Result<Vec<LedgerEvent>, SupplyError> {
        store.set_circulating_supply(self.circulating)?;
        for (citizen, credit) in &self.credits {
            let balance = store.balance(citizen)?;
            let updated = balance.checked_add(*credit).ok_or(SupplyError::Overflow)?;
            store.set_balance(citizen, updated)?;
        }
        for (pool, credit) in &self.pool_credits {
            let balance = store.pool_balance(pool)?;
            let updated = balance.checked_add(*credit).ok_or(SupplyError::Overflow)?;
            store.set_pool_balance(pool, updated)?;
        }
        Ok(self.events)
    }

    /// Staged fee records, drained at commit by the block executor (the
    /// record store sits outside `SupplyStore`).
    pub fn take_fee_records(&mut self) -> Vec<FeeDistributionRecord> {
        std::mem::take(&mut self.fee_records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vital_nullables::NullStore;
    use vital_store::SupplyStore as _;

    fn citizen() -> Did {
        Did::parse("did:vital:np:alice").unwrap()
    }

    #[test]
    fn staged_changes_invisible_until_commit() {
        let store = NullStore::new();
        store.set_circulating_supply(TokenAmount::new(100)).unwrap();

        let mut book = SupplyBook::open(&store).unwrap();
        book.mint(&citizen(), TokenAmount::new(10), 1).unwrap();
        assert_eq!(book.circulating(), TokenAmount::new(110));
        assert_eq!(store.circulating_supply().unwrap(), TokenAmount::new(100));
        assert_eq!(store.balance(&citizen()).unwrap(), TokenAmount::ZERO);

        let events = book.commit(&store).unwrap();
        assert_eq!(store.circulating_supply().unwrap(), TokenAmount::new(110));
        assert_eq!(store.balance(&citizen()).unwrap(), TokenAmount::new(10));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn dropping_book_discards_staging() {
        let store = NullStore::new();
        store.set_circulating_supply(TokenAmount::new(100)).unwrap();

        let mut book = SupplyBook::open(&store).unwrap();
        book.mint(&citizen(), TokenAmount::new(10), 1).unwrap();
        drop(book);
        assert_eq!(store.circulating_supply().unwrap(), TokenAmount::new(100));
    }

    #[test]
    fn burn_shrinks_running_supply() {
        let store = NullStore::new();
        store.set_circulating_supply(TokenAmount::new(100)).unwrap();

        let mut book = SupplyBook::open(&store).unwrap();
        book.burn("pool:burn", TokenAmount::new(30), 1).unwrap();
        assert_eq!(book.circulating(), TokenAmount::new(70));
        book.commit(&store).unwrap();
        assert_eq!(store.circulating_supply().unwrap(), TokenAmount::new(70));
        assert_eq!(
            store.pool_balance(&PoolId::BurnSink).unwrap(),
            TokenAmount::new(30)
        );
    }

    #[test]
    fn zero_burn_and_zero_credit_emit_nothing() {
        let store = NullStore::new();
        let mut book = SupplyBook::open(&store).unwrap();
        book.burn("pool:burn", TokenAmount::ZERO, 1).unwrap();
        book.credit_pool(PoolId::Global, TokenAmount::ZERO, 1).unwrap();
        let events = book.commit(&store).unwrap();
        assert!(events.is_empty());
    }
}
