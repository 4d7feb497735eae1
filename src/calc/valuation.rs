//! Cross-asset valuation in the 18-decimal A-equivalent accounting unit.

use crate::domain::{Amount, ExchangeRate, Rounding, TokenPair};
use crate::error::{EngineError, Result};
use crate::math::{mul_div, SCALE};

/// An asset pair bound to one exchange-rate snapshot.
///
/// Every cross-asset quantity in the engine is expressed as the value of
/// Asset A at 18-decimal scale ("A-wad").  A `Valuation` is the only place
/// that converts between that unit and native token amounts, so a single
/// calculation never mixes two rate readings.
///
/// # Examples
///
/// ```
/// use tranche_rebalancer::calc::Valuation;
/// use tranche_rebalancer::domain::{
///     Amount, Decimals, ExchangeRate, Token, TokenAddress, TokenPair,
/// };
///
/// let eth = Token::new(TokenAddress::from_bytes([1; 32]), Decimals::new(18).expect("valid"));
/// let usdc = Token::new(TokenAddress::from_bytes([2; 32]), Decimals::new(6).expect("valid"));
/// let pair = TokenPair::new(eth, usdc).expect("distinct");
/// let valuation = Valuation::new(pair, ExchangeRate::from_integer(2_000).expect("non-zero"));
///
/// // 1 ETH + 2000 USDC is worth 2 ETH.
/// let v = valuation.value_of(eth.whole(1), usdc.whole(2_000)).expect("in range");
/// assert_eq!(v, 2_000_000_000_000_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Valuation {
    pair: TokenPair,
    rate: ExchangeRate,
}

impl Valuation {
    /// Binds `pair` to a rate snapshot.
    #[must_use]
    pub const fn new(pair: TokenPair, rate: ExchangeRate) -> Self {
        Self { pair, rate }
    }

    /// Validates a raw rate reading and binds it to `pair`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRate`] if `raw_rate` is zero.
    pub fn from_raw(pair: TokenPair, raw_rate: u128) -> Result<Self> {
        let rate = ExchangeRate::new(raw_rate).inspect_err(|_| {
            tracing::warn!(raw_rate, "rejecting zero exchange rate");
        })?;
        Ok(Self::new(pair, rate))
    }

    /// The asset pair.
    #[must_use]
    pub const fn pair(&self) -> TokenPair {
        self.pair
    }

    /// The rate snapshot.
    #[must_use]
    pub const fn rate(&self) -> ExchangeRate {
        self.rate
    }

    /// Native A amount at 18-decimal scale.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the scaled amount exceeds `u128`.
    pub const fn a_wad(&self, amount: Amount) -> Result<u128> {
        self.pair.asset_a().to_wad(amount)
    }

    /// Native B amount at 18-decimal scale (still denominated in B).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the scaled amount exceeds `u128`.
    pub const fn b_wad(&self, amount: Amount) -> Result<u128> {
        self.pair.asset_b().to_wad(amount)
    }

    /// Converts a B-denominated wad into A-wad, truncating.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the result exceeds `u128`.
    pub fn b_wad_in_a(&self, b_wad: u128) -> Result<u128> {
        mul_div(b_wad, SCALE, self.rate.get(), Rounding::Down)
    }

    /// Converts an A-wad into a B-denominated wad, truncating.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the result exceeds `u128`.
    pub fn a_wad_in_b(&self, a_wad: u128) -> Result<u128> {
        mul_div(a_wad, self.rate.get(), SCALE, Rounding::Down)
    }

    /// `valueOf(a, b)`: the combined value of both amounts in A-wad.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if any intermediate exceeds `u128`.
    pub fn value_of(&self, amount_a: Amount, amount_b: Amount) -> Result<u128> {
        let a = self.a_wad(amount_a)?;
        let b = self.b_wad_in_a(self.b_wad(amount_b)?)?;
        a.checked_add(b)
            .ok_or(EngineError::Overflow("combined tranche value"))
    }

    /// A-wad back to native A units, truncating.
    pub const fn a_from_wad(&self, wad: u128) -> Amount {
        self.pair.asset_a().from_wad(wad)
    }

    /// B-denominated wad back to native B units, truncating.
    pub const fn b_from_wad(&self, wad: u128) -> Amount {
        self.pair.asset_b().from_wad(wad)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Decimals, Token, TokenAddress};

    fn valuation(rate: u128) -> Valuation {
        let (Ok(d18), Ok(d6)) = (Decimals::new(18), Decimals::new(6)) else {
            panic!("valid decimals");
        };
        let Ok(pair) = TokenPair::new(
            Token::new(TokenAddress::from_bytes([1; 32]), d18),
            Token::new(TokenAddress::from_bytes([2; 32]), d6),
        ) else {
            panic!("valid pair");
        };
        let Ok(v) = Valuation::from_raw(pair, rate * SCALE) else {
            panic!("valid rate");
        };
        v
    }

    #[test]
    fn zero_rate_rejected() {
        let v = valuation(1);
        let Err(EngineError::InvalidRate(_)) = Valuation::from_raw(v.pair(), 0) else {
            panic!("expected InvalidRate");
        };
    }

    #[test]
    fn value_of_mixes_decimals() {
        let v = valuation(1_800);
        // 30 ETH + 126 000 USDC at 1800 = 30 + 70 ETH.
        let Ok(total) = v.value_of(Amount::new(30 * SCALE), Amount::new(126_000_000_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(total, 100 * SCALE);
    }

    #[test]
    fn conversions_truncate() {
        let v = valuation(3);
        assert_eq!(v.b_wad_in_a(10), Ok(3));
        assert_eq!(v.a_wad_in_b(SCALE), Ok(3 * SCALE));
        assert_eq!(v.b_from_wad(1_000_000_000_000 - 1), Amount::ZERO);
        assert_eq!(v.b_from_wad(1_000_000_000_000), Amount::new(1));
    }

    #[test]
    fn overflow_is_reported() {
        let v = valuation(1);
        let Err(EngineError::Overflow(_)) = v.value_of(Amount::ZERO, Amount::MAX) else {
            panic!("expected Overflow");
        };
    }
}
