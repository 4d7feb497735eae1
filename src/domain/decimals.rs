//! Native decimal scale of an asset or share token.

use super::Amount;
use crate::error::{EngineError, Result};
use crate::math::WAD_DECIMALS;

/// Number of decimal places of a token's native unit.
///
/// Valid range is `0..=18`.  The upper bound matches the 18-decimal
/// internal fixed-point scale, which lets every native amount be lifted
/// to that scale by multiplication alone ([`to_wad`](Self::to_wad)) and
/// brought back by truncating division ([`from_wad`](Self::from_wad)).
///
/// # Examples
///
/// ```
/// use tranche_rebalancer::domain::{Amount, Decimals};
///
/// let usdc = Decimals::new(6).expect("6 is valid");
/// let wad = usdc.to_wad(Amount::new(1_500_000)).expect("fits");
/// assert_eq!(wad, 1_500_000_000_000_000_000);
/// assert_eq!(usdc.from_wad(wad), Amount::new(1_500_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Decimals(u8);

impl Default for Decimals {
    fn default() -> Self {
        Self::MAX
    }
}

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// The internal fixed-point precision (18).
    pub const MAX: Self = Self(WAD_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self> {
        if value > WAD_DECIMALS {
            return Err(EngineError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`, the size of one whole token in native units.
    #[must_use]
    pub const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }

    /// Multiplier lifting a native amount to 18 decimals.
    const fn wad_gap(&self) -> u128 {
        10u128.pow((WAD_DECIMALS - self.0) as u32)
    }

    /// Lifts a native amount to the 18-decimal internal scale.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the scaled value exceeds `u128`.
    pub const fn to_wad(&self, amount: Amount) -> Result<u128> {
        match amount.get().checked_mul(self.wad_gap()) {
            Some(v) => Ok(v),
            None => Err(EngineError::Overflow("native amount to 18-decimal scale")),
        }
    }

    /// Brings an 18-decimal value back to native units, truncating.
    pub const fn from_wad(&self, wad: u128) -> Amount {
        Amount::new(wad / self.wad_gap())
    }
}

impl TryFrom<u8> for Decimals {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(value: Decimals) -> Self {
        value.0
    }
}
