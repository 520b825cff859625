//! Token amount type.
//!
//! Amounts are fixed-point integers (u128) to avoid floating-point errors.
//! The smallest unit is 1 raw; burn-rate splits are computed in basis points
//! so every division is exact integer arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A VITAL token amount in raw units (u128).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenAmount(u128);

impl TokenAmount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Apply a basis-point rate (0..=10_000), rounding down.
    pub fn apply_bps(self, bps: u32) -> Self {
        Self(self.0 / 10_000 * u128::from(bps) + self.0 % 10_000 * u128::from(bps) / 10_000)
    }

    /// This amount as basis points of `total` (floor). Returns 10_000 for a
    /// zero total so "percent of nothing" reads as fully consumed.
    pub fn as_bps_of(self, total: Self) -> u32 {
        if total.0 == 0 {
            return 10_000;
        }
        ((self.0.saturating_mul(10_000) / total.0).min(10_000)) as u32
    }
}

impl Add for TokenAmount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for TokenAmount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} VITAL", self.0)
    }
}
