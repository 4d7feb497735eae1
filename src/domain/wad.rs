//! 18-decimal unsigned fixed-point number.

use core::fmt;

use super::Rounding;
use crate::error::{EngineError, Result};
use crate::math::{mul_div, SCALE};

/// An unsigned fixed-point value with 18 decimals (`1.0 == 10^18`).
///
/// Used for target ratios, current ratios, relative deviations (`r_div`)
/// and thresholds.  [`Wad::MAX`] doubles as the "all value is in A"
/// sentinel returned by [`current_ratio`](crate::calc::current_ratio)
/// when a tranche holds no B at all.
///
/// # Examples
///
/// ```
/// use tranche_rebalancer::domain::Wad;
///
/// let target = Wad::from_fraction(30, 70).expect("non-zero denominator");
/// assert_eq!(target.get(), 428_571_428_571_428_571);
/// assert_eq!(target.to_string(), "0.428571428571428571");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wad(u128);

impl Wad {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// One (`10^18`).
    pub const ONE: Self = Self(SCALE);

    /// Largest representable value; also the unbounded-ratio sentinel.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a raw 18-decimal value.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// `numerator / denominator` as a fixed-point value, truncated.
    ///
    /// # Errors
    ///
    /// - [`EngineError::DivisionByZero`] if `denominator` is zero.
    /// - [`EngineError::Overflow`] if the quotient exceeds the representable range.
    pub fn from_fraction(numerator: u128, denominator: u128) -> Result<Self> {
        mul_div(numerator, SCALE, denominator, Rounding::Down).map(Self)
    }

    /// Parts-per-thousand convenience, e.g. `Wad::from_per_mille(5)` is 0.005.
    #[must_use]
    pub const fn from_per_mille(per_mille: u64) -> Self {
        Self(per_mille as u128 * (SCALE / 1_000))
    }

    /// Returns the raw 18-decimal value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` for the [`Wad::MAX`] sentinel.
    #[must_use]
    pub const fn is_max(&self) -> bool {
        self.0 == u128::MAX
    }

    /// Validates a value used as a target ratio.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRatio`] for zero or the max sentinel:
    /// neither describes a reachable A/B value split.
    pub const fn ensure_target(self) -> Result<Self> {
        if self.is_zero() {
            return Err(EngineError::InvalidRatio("target ratio must be non-zero"));
        }
        if self.is_max() {
            return Err(EngineError::InvalidRatio(
                "target ratio cannot be the unbounded sentinel",
            ));
        }
        Ok(self)
    }
}

impl fmt::Display for Wad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_max() {
            return f.write_str("max");
        }
        write!(f, "{}.{:018}", self.0 / SCALE, self.0 % SCALE)
    }
}
