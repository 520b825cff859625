//! Validator-roster seam.

use vital_types::Did;

/// Live view of the validator set, implemented by the host
/// consensus/staking layer (and by the nullable `FixedRoster` in tests).
///
/// Callers must query this on every tally — the set size changes between
/// blocks and must never be cached stale.
pub trait ValidatorRoster {
    fn contains(&self, validator: &Did) -> bool;
    fn validator_count(&self) -> u32;
}
