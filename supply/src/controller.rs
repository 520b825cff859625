//! Supply controller — the cap, the threshold, and the stepped burn rate.

use crate::error::SupplyError;
use vital_types::{ParamsError, SupplyEquilibriumParams, TokenAmount};

/// Read-only projection of the supply position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupplyStatus {
    pub circulating: TokenAmount,
    pub max_total_supply: TokenAmount,
    /// Circulating supply as basis points of the cap.
    pub percent_of_max_bps: u32,
    /// Circulating supply as basis points of the threshold.
    pub percent_of_threshold_bps: u32,
    pub is_above_threshold: bool,
    pub remaining_mintable: TokenAmount,
}

/// Holds the immutable equilibrium parameters and answers the two monetary
/// questions: what is the burn rate right now, and may this mint happen.
#[derive(Clone, Debug)]
pub struct SupplyController {
    params: SupplyEquilibriumParams,
}

impl SupplyController {
    /// Construct a controller, enforcing the parameter invariants
    /// (`base <= elevated <= 100%`, `threshold <= max`).
    pub fn new(params: SupplyEquilibriumParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &SupplyEquilibriumParams {
        &self.params
    }

    /// The burn rate in force for the given circulating supply.
    ///
    /// A pure step function with no hysteresis: elevated at or above the
    /// threshold, base below it, and always base when equilibrium control is
    /// disabled.
    pub fn burn_rate_bps(&self, circulating: TokenAmount) -> u32 {
        if self.params.enabled && circulating >= self.params.supply_threshold {
            self.params.elevated_burn_rate_bps
        } else {
            self.params.base_burn_rate_bps
        }
    }

    /// Whether minting `amount` on top of `circulating` stays under the cap.
    pub fn can_mint(
        &self,
        circulating: TokenAmount,
        amount: TokenAmount,
    ) -> Result<(), SupplyError> {
        let exceeds = match circulating.checked_add(amount) {
            Some(sum) => sum > self.params.max_total_supply,
            // u128 overflow is far past any cap.
            None => true,
        };
        if exceeds {
            return Err(SupplyError::CapExceeded {
                attempted: amount,
                circulating,
                max: self.params.max_total_supply,
            });
        }
        Ok(())
    }

    /// Pure read-only projection for the query surface.
    pub fn supply_status(&self, circulating: TokenAmount) -> SupplyStatus {
        SupplyStatus {
            circulating,
            max_total_supply: self.params.max_total_supply,
            percent_of_max_bps: circulating.as_bps_of(self.params.max_total_supply),
            percent_of_threshold_bps: circulating.as_bps_of(self.params.supply_threshold),
            is_above_threshold: self.params.enabled
                && circulating >= self.params.supply_threshold,
            remaining_mintable: self.params.max_total_supply.saturating_sub(circulating),
        }
    }
}
