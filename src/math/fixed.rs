//! 18-decimal fixed-point primitives with 256-bit intermediates.
//!
//! Reserves are `u128`, and products such as `reserve · SCALE` or
//! `value · shareScale²` routinely exceed that range before the final
//! division brings them back.  Every helper here widens to [`U256`],
//! performs the operation, and narrows with an explicit range check, so
//! overflow is always reported and never wrapped.

use super::U256;
use crate::domain::Rounding;
use crate::error::{EngineError, Result};

/// Number of decimals of the internal fixed-point scale.
pub const WAD_DECIMALS: u8 = 18;

/// `10^18`: the value `1.0` in every ratio, rate and deviation.
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// Absolute difference of two unsigned integers without underflow.
///
/// ```
/// use tranche_rebalancer::math::abs_diff;
///
/// assert_eq!(abs_diff(3, 10), 7);
/// assert_eq!(abs_diff(10, 3), 7);
/// ```
#[must_use]
pub const fn abs_diff(a: u128, b: u128) -> u128 {
    if a >= b {
        a - b
    } else {
        b - a
    }
}

/// Narrows a 256-bit value to `u128`.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] with `context` if `value` does not fit.
pub fn narrow(value: U256, context: &'static str) -> Result<u128> {
    if value.bits() > 128 {
        return Err(EngineError::Overflow(context));
    }
    Ok(value.low_u128())
}

/// 256-bit division with explicit rounding.
///
/// # Errors
///
/// Returns [`EngineError::DivisionByZero`] if `denominator` is zero.
pub fn div_wide(numerator: U256, denominator: U256, rounding: Rounding) -> Result<U256> {
    if denominator.is_zero() {
        return Err(EngineError::DivisionByZero);
    }
    let (q, r) = numerator.div_mod(denominator);
    // q + 1 cannot overflow: a non-zero remainder implies denominator > 1.
    if rounding.bumps(!r.is_zero()) {
        Ok(q + U256::one())
    } else {
        Ok(q)
    }
}

/// Computes `a · b / d` without intermediate overflow.
///
/// # Errors
///
/// - [`EngineError::DivisionByZero`] if `d` is zero.
/// - [`EngineError::Overflow`] if the quotient exceeds `u128`.
///
/// # Examples
///
/// ```
/// use tranche_rebalancer::domain::Rounding;
/// use tranche_rebalancer::math::{mul_div, SCALE};
///
/// // u128::MAX · SCALE overflows u128, but the quotient fits.
/// let q = mul_div(u128::MAX, SCALE, SCALE, Rounding::Down).expect("fits");
/// assert_eq!(q, u128::MAX);
/// assert_eq!(mul_div(10, 1, 3, Rounding::Up), Ok(4));
/// ```
pub fn mul_div(a: u128, b: u128, d: u128, rounding: Rounding) -> Result<u128> {
    // A 128×128-bit product always fits in 256 bits.
    let product = U256::from(a) * U256::from(b);
    let q = div_wide(product, U256::from(d), rounding)?;
    narrow(q, "mul_div quotient exceeds u128")
}

/// Integer square root (floor) via Newton's method.
///
/// ```
/// use tranche_rebalancer::math::isqrt;
///
/// assert_eq!(isqrt(0), 0);
/// assert_eq!(isqrt(15), 3);
/// assert_eq!(isqrt(16), 4);
/// ```
#[must_use]
pub fn isqrt(n: u128) -> u128 {
    // The root of a u128 fits in 64 bits, so the narrowing is lossless.
    isqrt_wide(U256::from(n)).low_u128()
}

/// Integer square root (floor) of a 256-bit value.
#[must_use]
pub fn isqrt_wide(n: U256) -> U256 {
    if n.is_zero() {
        return U256::zero();
    }
    // Start above the root: 2^ceil(bits/2) >= sqrt(n).
    let mut x = U256::one() << ((n.bits() + 1) / 2);
    loop {
        let y = (x + n / x) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}
