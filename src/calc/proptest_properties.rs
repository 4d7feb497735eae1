//! Property-based tests for the rebalancing arithmetic.
//!
//! 1. **Delta zero-floor**: a tranche delta is either fully balanced or
//!    carries a non-zero amount of both assets.
//! 2. **Split identity**: re-summing a split never exceeds the input and
//!    loses at most one unit of the coarser asset.
//! 3. **Bootstrap symmetry**: first-deposit shares depend only on value.
//! 4. **Round-trip**: redeeming freshly issued shares returns the
//!    deposited value within one share's worth plus unit truncation.

use proptest::prelude::*;

use crate::calc::{
    assets_for_redemption, current_ratio, shares_for_deposit, split_from_a, tranche_delta,
    Valuation,
};
use crate::domain::{
    Amount, Decimals, Direction, ExchangeRate, Rounding, Token, TokenAddress, TokenPair, Tranche,
    TrancheId, Wad,
};
use crate::math::{mul_div, SCALE};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// One native unit of the 6-decimal asset, in wad.
const B_UNIT_WAD: u128 = 1_000_000_000_000;

fn make_pair() -> TokenPair {
    let (Ok(d18), Ok(d6)) = (Decimals::new(18), Decimals::new(6)) else {
        panic!("valid decimals");
    };
    let Ok(pair) = TokenPair::new(
        Token::new(TokenAddress::from_bytes([1u8; 32]), d18),
        Token::new(TokenAddress::from_bytes([2u8; 32]), d6),
    ) else {
        panic!("valid pair");
    };
    pair
}

fn make_valuation(rate: u128) -> Valuation {
    let Ok(rate) = ExchangeRate::new(rate) else {
        panic!("valid rate");
    };
    Valuation::new(make_pair(), rate)
}

fn make_tranche(target: u128) -> Tranche {
    let Ok(t) = Tranche::new(TrancheId::new(0), Wad::from_raw(target), Decimals::MAX) else {
        panic!("valid tranche");
    };
    t
}

/// Worst-case A-wad lost by truncating one B amount to native units.
fn b_unit_in_a(rate: u128) -> u128 {
    let Ok(v) = mul_div(B_UNIT_WAD + 1, SCALE, rate, Rounding::Up) else {
        panic!("tolerance in range");
    };
    v + 1
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Rates from 0.01 to 100 000 B per A.
fn rate_strategy() -> impl Strategy<Value = u128> {
    (SCALE / 100)..=(100_000 * SCALE)
}

/// Target ratios from 0.01 to 10.
fn target_strategy() -> impl Strategy<Value = u128> {
    (SCALE / 100)..=(10 * SCALE)
}

/// Asset A reserves up to one million whole units (18 decimals).
fn reserve_a_strategy() -> impl Strategy<Value = u128> {
    0u128..=1_000_000 * SCALE
}

/// Asset B reserves up to ten million whole units (6 decimals).
fn reserve_b_strategy() -> impl Strategy<Value = u128> {
    0u128..=10_000_000_000_000
}

// ---------------------------------------------------------------------------
// Property 1: Delta zero-floor
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_delta_zero_floor(
        ra in reserve_a_strategy(),
        rb in reserve_b_strategy(),
        target in target_strategy(),
        rate in rate_strategy(),
    ) {
        let t = make_tranche(target).with_reserves(Amount::new(ra), Amount::new(rb));
        let v = make_valuation(rate);
        let Ok(d) = tranche_delta(&t, &v) else {
            return Err(TestCaseError::fail("tranche_delta failed in range"));
        };

        if d.is_balanced() {
            prop_assert!(d.delta_a.is_zero() && d.delta_b.is_zero());
            prop_assert!(d.r_div.is_zero());
        } else {
            prop_assert!(!d.delta_a.is_zero() && !d.delta_b.is_zero());
            let Ok(ratio) = current_ratio(&t, &v) else {
                return Err(TestCaseError::fail("current_ratio failed in range"));
            };
            let expected = if ratio < t.target_ratio() {
                Direction::NeedMoreA
            } else {
                Direction::NeedMoreB
            };
            prop_assert_eq!(d.direction, expected);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Split identity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_split_identity(
        total in 0u128..=1_000_000 * SCALE,
        ratio in target_strategy(),
        rate in rate_strategy(),
    ) {
        let v = make_valuation(rate);
        let Ok((a, b)) = split_from_a(Amount::new(total), Wad::from_raw(ratio), &v) else {
            return Err(TestCaseError::fail("split failed in range"));
        };
        let Ok(resummed) = v.value_of(a, b) else {
            return Err(TestCaseError::fail("value_of failed in range"));
        };

        prop_assert!(resummed <= total, "split exceeds total: {} > {}", resummed, total);
        let tolerance = b_unit_in_a(rate) + 1;
        prop_assert!(
            total - resummed <= tolerance,
            "split lost {} > tolerance {}",
            total - resummed,
            tolerance
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: Bootstrap symmetry
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_bootstrap_symmetry(
        a in reserve_a_strategy(),
        b in reserve_b_strategy(),
        rate in rate_strategy(),
    ) {
        let empty = make_tranche(SCALE);
        let v = make_valuation(rate);
        let Ok(value) = v.value_of(Amount::new(a), Amount::new(b)) else {
            return Err(TestCaseError::fail("value_of failed in range"));
        };

        // The same value deposited entirely as A (18 decimals, exact).
        let mixed = shares_for_deposit(&empty, Amount::new(a), Amount::new(b), &v);
        let single = shares_for_deposit(&empty, Amount::new(value), Amount::ZERO, &v);
        prop_assert!(mixed.is_ok());
        prop_assert_eq!(mixed, single);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Deposit -> redeem round-trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_redeem_round_trip(
        ra in SCALE / 1_000..=1_000_000 * SCALE,
        rb in reserve_b_strategy(),
        supply in SCALE / 1_000..=1_000_000 * SCALE,
        a in 0u128..=10_000 * SCALE,
        b in 0u128..=1_000_000_000_000,
        rate in rate_strategy(),
    ) {
        let v = make_valuation(rate);
        let before = make_tranche(SCALE)
            .with_reserves(Amount::new(ra), Amount::new(rb))
            .with_share_supply(Amount::new(supply));

        let (Ok(value), Ok(reserves_value)) = (
            v.value_of(Amount::new(a), Amount::new(b)),
            v.value_of(before.reserve_a(), before.reserve_b()),
        ) else {
            return Err(TestCaseError::fail("value_of failed in range"));
        };
        let Ok(shares) = shares_for_deposit(&before, Amount::new(a), Amount::new(b), &v) else {
            return Err(TestCaseError::fail("issuance failed in range"));
        };

        let after = before
            .with_reserves(Amount::new(ra + a), Amount::new(rb + b))
            .with_share_supply(Amount::new(supply + shares.get()));
        let Ok((out_a, out_b)) = assets_for_redemption(&after, shares, &v) else {
            return Err(TestCaseError::fail("redemption failed in range"));
        };
        let Ok(returned) = v.value_of(out_a, out_b) else {
            return Err(TestCaseError::fail("value_of failed in range"));
        };

        prop_assert!(returned <= value + 2, "round-trip gained value: {} > {}", returned, value);

        let Ok(share_worth) = mul_div(reserves_value, 1, supply, Rounding::Up) else {
            return Err(TestCaseError::fail("share worth in range"));
        };
        let tolerance = share_worth + b_unit_in_a(rate) + 3;
        prop_assert!(
            returned + tolerance >= value,
            "round-trip lost {} > tolerance {}",
            value - returned,
            tolerance
        );
    }
}
