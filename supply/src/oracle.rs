//! Fixed per-verification price check.

use crate::error::SupplyError;
use vital_types::{KernelParams, TokenAmount};

/// Supplies the fixed price a verification transaction must pay, validated
/// before any mint happens.
#[derive(Clone, Copy, Debug)]
pub struct PriceOracle {
    price: TokenAmount,
}

impl PriceOracle {
    pub fn new(params: &KernelParams) -> Self {
        Self {
            price: params.verification_price,
        }
    }

    pub fn price(&self) -> TokenAmount {
        self.price
    }

    /// Reject zero and underpaying fees. Overpayment is accepted and fully
    /// distributed downstream.
    pub fn check_fee(&self, fee_paid: TokenAmount) -> Result<(), SupplyError> {
        if fee_paid.is_zero() {
            return Err(SupplyError::ZeroFee);
        }
        if fee_paid < self.price {
            return Err(SupplyError::InsufficientFee {
                required: self.price,
                paid: fee_paid,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle(price: u128) -> PriceOracle {
        PriceOracle::new(&KernelParams {
            verification_price: TokenAmount::new(price),
            ..KernelParams::default()
        })
    }

    #[test]
    fn accepts_exact_and_overpaid() {
        oracle(5).check_fee(TokenAmount::new(5)).unwrap();
        oracle(5).check_fee(TokenAmount::new(9)).unwrap();
    }

    #[test]
    fn rejects_zero() {
        assert!(matches!(
            oracle(5).check_fee(TokenAmount::ZERO),
            Err(SupplyError::ZeroFee)
        ));
    }

    #[test]
    fn rejects_underpayment() {
        match oracle(5).check_fee(TokenAmount::new(4)) {
            Err(SupplyError::InsufficientFee { required, paid }) => {
                assert_eq!(required, TokenAmount::new(5));
                assert_eq!(paid, TokenAmount::new(4));
            }
            other => panic!("expected InsufficientFee, got {other:?}"),
        }
    }
}
