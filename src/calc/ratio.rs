//! Deviation of tranche reserves from their target value ratio.
//!
//! | Reserves | `current_ratio` |
//! |----------|-----------------|
//! | both zero | the tranche's target |
//! | A zero | `0` |
//! | B zero, or negligible against A | [`Wad::MAX`] |
//! | otherwise | `value(A) / value(B)` |
//!
//! A computed correction that truncates to zero in either asset's native
//! units is reported as [`TrancheDelta::balanced`].  This is the only
//! place where the engine rounds a non-zero deviation away.

use crate::calc::Valuation;
use crate::domain::{Amount, Direction, PoolDelta, Rounding, Tranche, TrancheDelta, Wad};
use crate::error::{EngineError, Result};
use crate::math::{abs_diff, div_wide, mul_div, U256, SCALE};

/// Current value ratio `value(A) / value(B)` of a tranche.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] if a reserve cannot be normalized to
/// the wad scale.  A ratio beyond the finite range is not an error: it is
/// reported as [`Wad::MAX`], the same as an empty B reserve.
///
/// # Examples
///
/// ```
/// use tranche_rebalancer::calc::{current_ratio, Valuation};
/// use tranche_rebalancer::domain::*;
///
/// let eth = Token::new(TokenAddress::from_bytes([1; 32]), Decimals::new(18).expect("valid"));
/// let usdc = Token::new(TokenAddress::from_bytes([2; 32]), Decimals::new(6).expect("valid"));
/// let valuation = Valuation::new(
///     TokenPair::new(eth, usdc).expect("distinct"),
///     ExchangeRate::from_integer(2_000).expect("non-zero"),
/// );
/// let tranche = Tranche::new(TrancheId::new(0), Wad::ONE, Decimals::MAX)
///     .expect("valid target")
///     .with_reserves(eth.whole(1), usdc.whole(4_000));
///
/// assert_eq!(current_ratio(&tranche, &valuation), Ok(Wad::from_fraction(1, 2).expect("valid")));
/// ```
pub fn current_ratio(tranche: &Tranche, valuation: &Valuation) -> Result<Wad> {
    match (tranche.reserve_a().is_zero(), tranche.reserve_b().is_zero()) {
        (true, true) => Ok(tranche.target_ratio()),
        (true, false) => Ok(Wad::ZERO),
        (false, true) => Ok(Wad::MAX),
        (false, false) => {
            let a = valuation.a_wad(tranche.reserve_a())?;
            let b = valuation.b_wad(tranche.reserve_b())?;
            let ratio = div_wide(
                U256::from(a) * U256::from(valuation.rate().get()),
                U256::from(b),
                Rounding::Down,
            )?;
            // Dust B against a large A reserve: all value sits in A.
            if ratio >= U256::from(u128::MAX) {
                tracing::debug!(tranche = %tranche.id(), "B reserve negligible; ratio unbounded");
                return Ok(Wad::MAX);
            }
            Ok(Wad::from_raw(ratio.low_u128()))
        }
    }
}

/// Relative deviation `|ratio − target| / target`, or `1.0` when the
/// tranche holds no B at all.
fn relative_deviation(ratio: Wad, target: Wad) -> Result<Wad> {
    if ratio.is_max() {
        return Ok(Wad::ONE);
    }
    mul_div(abs_diff(ratio.get(), target.get()), SCALE, target.get(), Rounding::Down)
        .map(Wad::from_raw)
}

/// Direction, deviation and one-step correction for a single tranche.
///
/// The correction moves `delta_a` of A against `delta_b` of B (equal value
/// at the snapshot rate) so that the post-trade ratio equals the target.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] if any intermediate exceeds the
/// representable range.
pub fn tranche_delta(tranche: &Tranche, valuation: &Valuation) -> Result<TrancheDelta> {
    let target = tranche.target_ratio();
    let ratio = current_ratio(tranche, valuation)?;
    let direction = if ratio < target {
        Direction::NeedMoreA
    } else {
        Direction::NeedMoreB
    };
    let r_div = relative_deviation(ratio, target)?;

    let rate = valuation.rate().get();
    let a = valuation.a_wad(tranche.reserve_a())?;
    let b = valuation.b_wad(tranche.reserve_b())?;
    // A-wad the tranche would hold if its B side were exactly on target.
    let implied_a = mul_div(b, target.get(), rate, Rounding::Down)?;
    let one_plus_target = SCALE
        .checked_add(target.get())
        .ok_or(EngineError::Overflow("1 + target ratio"))?;
    let delta_a_wad = mul_div(abs_diff(a, implied_a), SCALE, one_plus_target, Rounding::Down)?;

    let delta_a = valuation.a_from_wad(delta_a_wad);
    let delta_b = valuation.b_from_wad(valuation.a_wad_in_b(delta_a_wad)?);

    if delta_a.is_zero() || delta_b.is_zero() {
        tracing::debug!(
            tranche = %tranche.id(),
            %ratio,
            %target,
            "correction truncates to zero; reporting balanced"
        );
        return Ok(TrancheDelta::balanced());
    }

    tracing::debug!(
        tranche = %tranche.id(),
        %direction,
        %ratio,
        %r_div,
        %delta_a,
        %delta_b,
        "tranche delta"
    );
    Ok(TrancheDelta {
        direction,
        r_div,
        delta_a,
        delta_b,
    })
}

/// Net correction across all tranches.
///
/// Per-tranche corrections are summed with sign (`NeedMoreB` as −A/+B,
/// `NeedMoreA` as +A/−B).  Only the two opposite-sign outcomes are
/// actionable; every other net pattern, including a tie on either asset,
/// is reported as [`PoolDelta::balanced`].
///
/// `r_div` of the result is the largest deviation among the tranches that
/// pull in the net direction.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] if a per-tranche computation or the
/// signed sum exceeds the representable range.
pub fn pool_delta<'a, I>(tranches: I, valuation: &Valuation) -> Result<PoolDelta>
where
    I: IntoIterator<Item = &'a Tranche>,
{
    let deltas = tranches
        .into_iter()
        .map(|t| tranche_delta(t, valuation))
        .collect::<Result<Vec<_>>>()?;
    aggregate(&deltas)
}

fn aggregate(deltas: &[TrancheDelta]) -> Result<PoolDelta> {
    let (mut net_a, mut net_b) = (0i128, 0i128);
    for d in deltas {
        let (a, b) = d.signed()?;
        net_a = net_a
            .checked_add(a)
            .ok_or(EngineError::Overflow("pool delta_a sum"))?;
        net_b = net_b
            .checked_add(b)
            .ok_or(EngineError::Overflow("pool delta_b sum"))?;
    }

    let direction = match (net_a.signum(), net_b.signum()) {
        (1, -1) => Direction::NeedMoreA,
        (-1, 1) => Direction::NeedMoreB,
        _ => {
            if deltas.iter().any(|d| !d.is_balanced()) {
                tracing::debug!(net_a, net_b, "tranche corrections cancel at pool level");
            }
            return Ok(PoolDelta::balanced());
        }
    };

    let (r_div, contributing) = deltas
        .iter()
        .filter(|d| d.direction == direction)
        .fold((Wad::ZERO, 0usize), |(max, n), d| (max.max(d.r_div), n + 1));

    Ok(PoolDelta {
        direction,
        r_div,
        delta_a: Amount::new(net_a.unsigned_abs()),
        delta_b: Amount::new(net_b.unsigned_abs()),
        contributing,
    })
}
