//! Claim-share issuance and redemption.
//!
//! The first deposit into an empty tranche defines the share unit
//! geometrically: `shares = sqrt(value · shareScale² / SCALE)`, so the count
//! depends only on the deposit's value and not on its A/B mix.  Every later
//! deposit or redemption is linear in the outstanding supply.
//!
//! All results are truncated, which always favours the tranche over the
//! depositor or redeemer.

use crate::calc::{split_value, Valuation};
use crate::domain::{Amount, Rounding, Tranche};
use crate::error::{EngineError, Result};
use crate::math::{div_wide, isqrt_wide, mul_div, narrow, U256, SCALE};

/// `shareScale²` for the tranche's share token.
fn share_scale_squared(tranche: &Tranche) -> U256 {
    let scale = U256::from(tranche.share_decimals().factor());
    scale * scale
}

/// Claim shares minted for depositing `(amount_a, amount_b)`.
///
/// # Errors
///
/// - [`EngineError::InvalidState`] if the reserves and the share supply
///   disagree about whether the tranche is empty.
/// - [`EngineError::Overflow`] if any intermediate exceeds the
///   representable range.
///
/// # Examples
///
/// ```
/// use tranche_rebalancer::calc::{shares_for_deposit, Valuation};
/// use tranche_rebalancer::domain::*;
///
/// let eth = Token::new(TokenAddress::from_bytes([1; 32]), Decimals::new(18).expect("valid"));
/// let usdc = Token::new(TokenAddress::from_bytes([2; 32]), Decimals::new(6).expect("valid"));
/// let valuation = Valuation::new(
///     TokenPair::new(eth, usdc).expect("distinct"),
///     ExchangeRate::from_integer(2_000).expect("non-zero"),
/// );
/// let empty = Tranche::new(TrancheId::new(0), Wad::ONE, Decimals::MAX).expect("valid target");
///
/// // The first deposit worth 4 ETH mints sqrt(4) = 2 whole shares, whatever its mix.
/// let mixed = shares_for_deposit(&empty, eth.whole(2), usdc.whole(4_000), &valuation);
/// let all_a = shares_for_deposit(&empty, eth.whole(4), Amount::ZERO, &valuation);
/// assert_eq!(mixed, Ok(Amount::new(2_000_000_000_000_000_000)));
/// assert_eq!(mixed, all_a);
/// ```
pub fn shares_for_deposit(
    tranche: &Tranche,
    amount_a: Amount,
    amount_b: Amount,
    valuation: &Valuation,
) -> Result<Amount> {
    let supply = tranche.share_supply();
    if tranche.is_empty() {
        if !supply.is_zero() {
            return Err(EngineError::InvalidState("empty tranche with outstanding shares"));
        }
    } else if supply.is_zero() {
        return Err(EngineError::InvalidState("funded tranche without shares"));
    }

    let value = valuation.value_of(amount_a, amount_b)?;
    if value == 0 {
        return Ok(Amount::ZERO);
    }

    if tranche.is_empty() {
        let radicand = div_wide(
            U256::from(value) * share_scale_squared(tranche),
            U256::from(SCALE),
            Rounding::Down,
        )?;
        let shares = narrow(isqrt_wide(radicand), "bootstrap share count")?;
        tracing::debug!(tranche = %tranche.id(), value, shares, "bootstrap issuance");
        return Ok(Amount::new(shares));
    }

    let reserves_value = valuation.value_of(tranche.reserve_a(), tranche.reserve_b())?;
    if reserves_value == 0 {
        return Err(EngineError::InvalidState("tranche reserves carry no value"));
    }
    mul_div(value, supply.get(), reserves_value, Rounding::Down).map(Amount::new)
}

/// Asset amounts released for redeeming `shares`.
///
/// A funded tranche pays out along its current reserve mix.  For an
/// empty tranche the bootstrap rule is inverted and the resulting value is
/// split at the target ratio, which quotes what `shares` would be worth at
/// the bootstrap price.  A funded tranche with no supply yields `(0, 0)`:
/// there is no claim to honour.
///
/// # Errors
///
/// - [`EngineError::InvalidState`] if an empty tranche reports
///   outstanding shares.
/// - [`EngineError::InsufficientShares`] if `shares` exceeds the supply of
///   a funded tranche.
/// - [`EngineError::Overflow`] if any intermediate exceeds the
///   representable range.
pub fn assets_for_redemption(
    tranche: &Tranche,
    shares: Amount,
    valuation: &Valuation,
) -> Result<(Amount, Amount)> {
    if shares.is_zero() {
        return Ok((Amount::ZERO, Amount::ZERO));
    }

    if tranche.is_empty() {
        if !tranche.share_supply().is_zero() {
            return Err(EngineError::InvalidState("empty tranche with outstanding shares"));
        }
        let s = U256::from(shares.get());
        let numerator = (s * s)
            .checked_mul(U256::from(SCALE))
            .ok_or(EngineError::Overflow("inverse bootstrap value"))?;
        let value = narrow(
            div_wide(numerator, share_scale_squared(tranche), Rounding::Down)?,
            "inverse bootstrap value",
        )?;
        return split_value(value, tranche.target_ratio(), valuation);
    }

    let supply = tranche.share_supply();
    if supply.is_zero() {
        tracing::debug!(tranche = %tranche.id(), "redemption against zero supply");
        return Ok((Amount::ZERO, Amount::ZERO));
    }
    if shares > supply {
        return Err(EngineError::InsufficientShares);
    }

    let amount_a = mul_div(shares.get(), tranche.reserve_a().get(), supply.get(), Rounding::Down)?;
    let amount_b = mul_div(shares.get(), tranche.reserve_b().get(), supply.get(), Rounding::Down)?;
    Ok((Amount::new(amount_a), Amount::new(amount_b)))
}
