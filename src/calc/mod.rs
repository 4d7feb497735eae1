//! Pure rebalancing calculations over tranche snapshots.
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`current_ratio`] | value(A) / value(B) of a tranche |
//! | [`tranche_delta`] | direction, deviation and correction for one tranche |
//! | [`pool_delta`] | signed aggregate across tranches |
//! | [`shares_for_deposit`] | claim shares minted for a deposit |
//! | [`assets_for_redemption`] | assets released for burned shares |
//! | [`split_from_a`] / [`split_from_b`] / [`split_value`] | single-asset amount to a ratio-matched pair |
//!
//! Every function takes a [`Valuation`] so that one calculation reads
//! exactly one exchange-rate snapshot.

mod issuance;
mod ratio;
mod splitter;
mod valuation;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use issuance::{assets_for_redemption, shares_for_deposit};
pub use ratio::{current_ratio, pool_delta, tranche_delta};
pub use splitter::{split_from_a, split_from_b, split_value};
pub use valuation::Valuation;
