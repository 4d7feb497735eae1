//! Basis-point representation for tolerances.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::Result;
use crate::math::mul_div;

/// Denominator for basis points: 10 000 bp = 100%.
const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%).
///
/// Used for the keeper's slippage buffer: a tolerance of 300 bp means the
/// subsidy reserve must cover 103% of the rebalance amount.
///
/// # Examples
///
/// ```
/// use tranche_rebalancer::domain::{Amount, BasisPoints, Rounding};
///
/// let slippage = BasisPoints::new(300);
/// let buffered = slippage.inflate(Amount::new(1_000), Rounding::Up).expect("fits");
/// assert_eq!(buffered, Amount::new(1_030));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Computes `amount * (1 + self)`, i.e. the amount grown by this tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`](crate::error::EngineError::Overflow)
    /// if the result exceeds `u128`.
    pub fn inflate(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        let factor = u128::from(MAX_BPS) + u128::from(self.0);
        mul_div(amount.get(), factor, u128::from(MAX_BPS), rounding).map(Amount::new)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
