//! Kernel parameters — supply equilibrium plus the fixed verification economics.
//!
//! All rates are basis points (10_000 = 100%) so splits stay exact integers.
//! Parameters are fixed at configuration time and read-mostly afterwards.

use crate::amount::TokenAmount;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supply-equilibrium policy: a hard cap plus a burn rate that steps up once
/// circulating supply crosses the threshold.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplyEquilibriumParams {
    /// The immutable hard ceiling on circulating supply (raw units).
    pub max_total_supply: TokenAmount,

    /// Circulating supply at/above which the elevated burn rate applies.
    pub supply_threshold: TokenAmount,

    /// Burn rate below the threshold (basis points).
    pub base_burn_rate_bps: u32,

    /// Burn rate at/above the threshold (basis points).
    pub elevated_burn_rate_bps: u32,

    /// Label for the account that absorbs burned fees, for audit events.
    pub burn_sink: String,

    /// When disabled, the base rate applies regardless of supply.
    pub enabled: bool,
}

/// Fixed verification economics.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelParams {
    /// Reward minted to a citizen per successful verification (raw units).
    pub mint_per_verification: TokenAmount,

    /// Whether usage-based minting is enabled at all.
    pub minting_enabled: bool,

    /// The fixed fee a verification transaction must carry (raw units).
    pub verification_price: TokenAmount,

    /// Minimum acceptable liveness score (0–100 scale).
    pub min_liveness_score: u8,

    /// Maximum proof age at admission, in seconds.
    pub proof_max_age_secs: u64,

    /// Deepfake-vote quorum as an integer percentage of the validator set.
    /// The tally uses floor(count * 100 / total), so 51 means a strict
    /// majority under integer division.
    pub deepfake_quorum_percent: u64,
}

/// Parameter invariant violations, caught at configuration time.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("burn rates out of order: base {base_bps}bps > elevated {elevated_bps}bps")]
    RatesOutOfOrder { base_bps: u32, elevated_bps: u32 },

    #[error("burn rate above 100%: {0}bps")]
    RateAboveOne(u32),

    #[error("supply threshold {threshold} exceeds max supply {max}")]
    ThresholdAboveMax {
        threshold: TokenAmount,
        max: TokenAmount,
    },

    #[error("liveness score floor {0} above the 0-100 scale")]
    ScoreFloorOutOfRange(u8),

    #[error("quorum percent {0} out of range (1-100)")]
    QuorumOutOfRange(u64),
}

impl SupplyEquilibriumParams {
    /// Enforce `0 <= base <= elevated <= 1` and `threshold <= max`.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.elevated_burn_rate_bps > 10_000 {
            return Err(ParamsError::RateAboveOne(self.elevated_burn_rate_bps));
        }
        if self.base_burn_rate_bps > self.elevated_burn_rate_bps {
            return Err(ParamsError::RatesOutOfOrder {
                base_bps: self.base_burn_rate_bps,
                elevated_bps: self.elevated_burn_rate_bps,
            });
        }
        if self.supply_threshold > self.max_total_supply {
            return Err(ParamsError::ThresholdAboveMax {
                threshold: self.supply_threshold,
                max: self.max_total_supply,
            });
        }
        Ok(())
    }
}

impl Default for SupplyEquilibriumParams {
    fn default() -> Self {
        Self {
            // One raw unit per human at current population, with the elevated
            // rate kicking in at half issuance.
            max_total_supply: TokenAmount::new(8_000_000_000),
            supply_threshold: TokenAmount::new(4_000_000_000),
            base_burn_rate_bps: 200,      // 2%
            elevated_burn_rate_bps: 500,  // 5%
            burn_sink: "pool:burn".to_string(),
            enabled: true,
        }
    }
}

impl KernelParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.min_liveness_score > 100 {
            return Err(ParamsError::ScoreFloorOutOfRange(self.min_liveness_score));
        }
        if self.deepfake_quorum_percent == 0 || self.deepfake_quorum_percent > 100 {
            return Err(ParamsError::QuorumOutOfRange(self.deepfake_quorum_percent));
        }
        Ok(())
    }
}

impl Default for KernelParams {
    fn default() -> Self {
        Self {
            mint_per_verification: TokenAmount::new(10),
            minting_enabled: true,
            verification_price: TokenAmount::new(1),
            min_liveness_score: 70,
            proof_max_age_secs: 5 * 60,
            deepfake_quorum_percent: 51,
        }
    }
}
