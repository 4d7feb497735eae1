//! Explicit rounding direction for fixed-point division.

/// Rounding direction for every division performed by the engine.
///
/// Amounts handed to users (shares minted, assets redeemed, split legs)
/// always use [`Rounding::Down`].  Amounts the protocol must *hold* (the
/// slippage-buffered funding requirement) use [`Rounding::Up`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ceiling.
    Up,
    /// Floor.
    Down,
}

impl Rounding {
    /// Whether a truncated quotient must be bumped by one unit.
    ///
    /// ```
    /// use tranche_rebalancer::domain::Rounding;
    ///
    /// assert!(Rounding::Up.bumps(true));
    /// assert!(!Rounding::Up.bumps(false));
    /// assert!(!Rounding::Down.bumps(true));
    /// ```
    #[must_use]
    pub const fn bumps(&self, inexact: bool) -> bool {
        inexact && matches!(self, Self::Up)
    }
}
