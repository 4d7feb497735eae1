//! Live A-in-terms-of-B exchange rate.

use core::fmt;

use super::Wad;
use crate::error::{EngineError, Result};
use crate::math::SCALE;

/// Value of one whole unit of Asset A expressed in whole units of Asset B,
/// as an 18-decimal fixed-point number.
///
/// A rate is a caller-supplied snapshot: the engine performs no staleness
/// checks, but it refuses a zero rate outright because every ratio derived
/// from it would be meaningless.
///
/// # Examples
///
/// ```
/// use tranche_rebalancer::domain::ExchangeRate;
///
/// let eth_usd = ExchangeRate::from_integer(1_850).expect("non-zero");
/// assert_eq!(eth_usd.get(), 1_850_000_000_000_000_000_000);
/// assert!(ExchangeRate::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExchangeRate(u128);

impl ExchangeRate {
    /// Validates a raw 18-decimal rate.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRate`] if `raw` is zero.
    pub const fn new(raw: u128) -> Result<Self> {
        if raw == 0 {
            return Err(EngineError::InvalidRate("exchange rate must be positive"));
        }
        Ok(Self(raw))
    }

    /// Rate for a whole-number price, e.g. `from_integer(1_800)` for 1 A = 1800 B.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidRate`] if `units` is zero.
    /// - [`EngineError::Overflow`] if the scaled value exceeds `u128`.
    pub const fn from_integer(units: u128) -> Result<Self> {
        match units.checked_mul(SCALE) {
            Some(raw) => Self::new(raw),
            None => Err(EngineError::Overflow("exchange rate scaling")),
        }
    }

    /// Returns the raw 18-decimal value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// The rate as a generic fixed-point value.
    #[must_use]
    pub const fn as_wad(&self) -> Wad {
        Wad::from_raw(self.0)
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_wad(), f)
    }
}
