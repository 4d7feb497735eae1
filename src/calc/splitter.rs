//! Splits a single-asset amount into the A/B pair implied by a ratio.
//!
//! For a ratio `r = value(A) / value(B)`, the B share of a total value is
//! `1 / (1 + r)` and the A share is the remainder.  Both components are
//! truncated toward zero, so re-summing the split never exceeds the
//! input.

use crate::calc::Valuation;
use crate::domain::{Amount, Rounding, Wad};
use crate::error::{EngineError, Result};
use crate::math::{mul_div, SCALE};

/// Fraction `1 / (1 + ratio)` of `total`, truncated.
fn b_fraction(total: u128, ratio: Wad) -> Result<u128> {
    let denominator = SCALE
        .checked_add(ratio.get())
        .ok_or(EngineError::Overflow("1 + split ratio"))?;
    mul_div(total, SCALE, denominator, Rounding::Down)
}

/// Splits a value in A-wad into native `(amount_a, amount_b)`.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] if any intermediate exceeds the
/// representable range.
pub fn split_value(value: u128, ratio: Wad, valuation: &Valuation) -> Result<(Amount, Amount)> {
    let b_part = b_fraction(value, ratio)?;
    // b_part <= value since the denominator is at least SCALE.
    let a_part = value - b_part;
    let amount_a = valuation.a_from_wad(a_part);
    let amount_b = valuation.b_from_wad(valuation.a_wad_in_b(b_part)?);
    Ok((amount_a, amount_b))
}

/// Splits an amount of Asset A so that `value(A) / value(B) == ratio`.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] if any intermediate exceeds the
/// representable range.
///
/// # Examples
///
/// ```
/// use tranche_rebalancer::calc::{split_from_a, Valuation};
/// use tranche_rebalancer::domain::*;
///
/// let eth = Token::new(TokenAddress::from_bytes([1; 32]), Decimals::new(18).expect("valid"));
/// let usdc = Token::new(TokenAddress::from_bytes([2; 32]), Decimals::new(6).expect("valid"));
/// let valuation = Valuation::new(
///     TokenPair::new(eth, usdc).expect("distinct"),
///     ExchangeRate::from_integer(2_000).expect("non-zero"),
/// );
///
/// // Half the value stays in ETH, half becomes USDC.
/// let (a, b) = split_from_a(eth.whole(2), Wad::ONE, &valuation).expect("in range");
/// assert_eq!(a, eth.whole(1));
/// assert_eq!(b, usdc.whole(2_000));
/// ```
pub fn split_from_a(
    total_a: Amount,
    ratio: Wad,
    valuation: &Valuation,
) -> Result<(Amount, Amount)> {
    split_value(valuation.a_wad(total_a)?, ratio, valuation)
}

/// Splits an amount of Asset B so that `value(A) / value(B) == ratio`.
///
/// The B component keeps `1 / (1 + ratio)` of the total in B terms; the
/// rest is converted to A at the snapshot rate.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] if any intermediate exceeds the
/// representable range.
pub fn split_from_b(
    total_b: Amount,
    ratio: Wad,
    valuation: &Valuation,
) -> Result<(Amount, Amount)> {
    let total = valuation.b_wad(total_b)?;
    let b_part = b_fraction(total, ratio)?;
    let a_part = valuation.b_wad_in_a(total - b_part)?;
    Ok((valuation.a_from_wad(a_part), valuation.b_from_wad(b_part)))
}
