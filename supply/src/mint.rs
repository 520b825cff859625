//! Verification reward minting.

use crate::book::SupplyBook;
use crate::controller::SupplyController;
use crate::error::SupplyError;
use vital_types::{Did, KernelParams, TokenAmount};

/// Audit record for one successful mint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintReceipt {
    pub recipient: Did,
    pub amount: TokenAmount,
    pub block_height: u64,
}

/// Mints the fixed per-verification reward, delegating the cap decision to
/// the [`SupplyController`].
#[derive(Clone, Debug)]
pub struct MintEngine {
    reward: TokenAmount,
    enabled: bool,
}

impl MintEngine {
    pub fn new(params: &KernelParams) -> Self {
        Self {
            reward: params.mint_per_verification,
            enabled: params.minting_enabled,
        }
    }

    pub fn reward(&self) -> TokenAmount {
        self.reward
    }

    /// Mint the reward to `recipient`.
    ///
    /// The cap check runs against the book's running supply, so successive
    /// mints inside one block each see the previous mint's effect. On any
    /// rejection nothing is staged.
    pub fn mint_on_verification(
        &self,
        controller: &SupplyController,
        book: &mut SupplyBook,
        recipient: &Did,
        block_height: u64,
    ) -> Result<MintReceipt, SupplyError> {
        if !self.enabled {
            return Err(SupplyError::MintingDisabled);
        }
        controller.can_mint(book.circulating(), self.reward)?;
        book.mint(recipient, self.reward, block_height)?;
        tracing::info!(
            recipient = %recipient,
            amount = %self.reward,
            block_height,
            "verification reward minted"
        );
        Ok(MintReceipt {
            recipient: recipient.clone(),
            amount: self.reward,
            block_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vital_nullables::NullStore;
    use vital_store::SupplyStore as _;
    use vital_types::SupplyEquilibriumParams;

    fn controller(max: u128) -> SupplyController {
        SupplyController::new(SupplyEquilibriumParams {
            max_total_supply: TokenAmount::new(max),
            supply_threshold: TokenAmount::new(max / 2),
            ..SupplyEquilibriumParams::default()
        })
        .unwrap()
    }

    fn engine(reward: u128) -> MintEngine {
        MintEngine::new(&KernelParams {
            mint_per_verification: TokenAmount::new(reward),
            ..KernelParams::default()
        })
    }

    fn citizen() -> Did {
        Did::parse("did:vital:np:alice").unwrap()
    }

    #[test]
    fn mint_credits_recipient_and_supply() {
        let store = NullStore::new();
        let mut book = SupplyBook::open(&store).unwrap();
        let receipt = engine(10)
            .mint_on_verification(&controller(1_000_000), &mut book, &citizen(), 3)
            .unwrap();
        assert_eq!(receipt.amount, TokenAmount::new(10));
        assert_eq!(book.circulating(), TokenAmount::new(10));

        book.commit(&store).unwrap();
        assert_eq!(store.balance(&citizen()).unwrap(), TokenAmount::new(10));
        assert_eq!(store.circulating_supply().unwrap(), TokenAmount::new(10));
    }

    #[test]
    fn cap_scenario_999_995_of_a_million() {
        let store = NullStore::new();
        store
            .set_circulating_supply(TokenAmount::new(999_995))
            .unwrap();
        let mut book = SupplyBook::open(&store).unwrap();

        let err = engine(10)
            .mint_on_verification(&controller(1_000_000), &mut book, &citizen(), 3)
            .unwrap_err();
        assert!(matches!(err, SupplyError::CapExceeded { .. }));

        // Nothing staged, nothing committed.
        assert_eq!(book.circulating(), TokenAmount::new(999_995));
        book.commit(&store).unwrap();
        assert_eq!(store.balance(&citizen()).unwrap(), TokenAmount::ZERO);
        assert_eq!(
            store.circulating_supply().unwrap(),
            TokenAmount::new(999_995)
        );
    }

    #[test]
    fn second_mint_in_block_sees_first() {
        let store = NullStore::new();
        store
            .set_circulating_supply(TokenAmount::new(999_985))
            .unwrap();
        let mut book = SupplyBook::open(&store).unwrap();
        let ctrl = controller(1_000_000);
        let eng = engine(10);

        // 999,985 + 10 = 999,995: fine.
        eng.mint_on_verification(&ctrl, &mut book, &citizen(), 3)
            .unwrap();
        // 999,995 + 10 = 1,000,005: must fail against the *running* total.
        let err = eng
            .mint_on_verification(&ctrl, &mut book, &citizen(), 3)
            .unwrap_err();
        assert!(matches!(err, SupplyError::CapExceeded { .. }));
    }

    #[test]
    fn disabled_minting_is_permanent_rejection() {
        let store = NullStore::new();
        let mut book = SupplyBook::open(&store).unwrap();
        let eng = MintEngine::new(&KernelParams {
            minting_enabled: false,
            ..KernelParams::default()
        });
        let err = eng
            .mint_on_verification(&controller(1_000_000), &mut book, &citizen(), 3)
            .unwrap_err();
        assert!(matches!(err, SupplyError::MintingDisabled));
    }
}
