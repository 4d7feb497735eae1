//! Asset identity with its native decimal scale.

use super::{Amount, Decimals, TokenAddress};
use crate::error::Result;

/// An asset held by the pool (or a subsidy reserve), identified by address
/// and carrying the decimal scale of its native unit.
///
/// # Examples
///
/// ```
/// use tranche_rebalancer::domain::{Amount, Decimals, Token, TokenAddress};
///
/// let usdc = Token::new(TokenAddress::from_bytes([2u8; 32]), Decimals::new(6).expect("valid"));
/// assert_eq!(usdc.whole(1_800), Amount::new(1_800_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    address: TokenAddress,
    decimals: Decimals,
}

impl Token {
    /// Creates a new `Token`.
    #[must_use]
    pub const fn new(address: TokenAddress, decimals: Decimals) -> Self {
        Self { address, decimals }
    }

    /// Returns the token address.
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    /// Returns the token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Native amount for `units` whole tokens.
    ///
    /// Cannot overflow: `u64::MAX * 10^18 < u128::MAX`.
    pub const fn whole(&self, units: u64) -> Amount {
        Amount::new(units as u128 * self.decimals.factor())
    }

    /// Lifts a native amount of this token to the 18-decimal scale.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`](crate::error::EngineError::Overflow)
    /// if the scaled amount exceeds `u128`.
    pub const fn to_wad(&self, amount: Amount) -> Result<u128> {
        self.decimals.to_wad(amount)
    }

    /// Converts an 18-decimal value back to this token's native units,
    /// truncating.
    pub const fn from_wad(&self, wad: u128) -> Amount {
        self.decimals.from_wad(wad)
    }
}
