//! Tranche state: reserves, target ratio and share accounting.

use core::fmt;

use super::{Amount, Decimals, Wad};
use crate::error::Result;

/// Stable index of a tranche inside its [`TranchePool`](crate::pool::TranchePool).
///
/// Identifiers are assigned in creation order and never reused, since
/// tranches are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrancheId(usize);

impl TrancheId {
    /// Wraps an arena index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for TrancheId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A sub-pool with its own target value ratio and claim-share token.
///
/// `Tranche` is a plain snapshot: the engine reads it, computes amounts,
/// and the external deposit/withdraw/rebalance path writes the results
/// back through [`TranchePool::update_reserves`](crate::pool::TranchePool::update_reserves).
///
/// # Examples
///
/// ```
/// use tranche_rebalancer::domain::{Amount, Decimals, Tranche, TrancheId, Wad};
///
/// let target = Wad::from_fraction(30, 70).expect("valid");
/// let tranche = Tranche::new(TrancheId::new(0), target, Decimals::MAX)
///     .expect("non-zero target")
///     .with_reserves(Amount::new(30), Amount::new(126_000));
///
/// assert!(!tranche.is_empty());
/// assert_eq!(tranche.target_ratio(), target);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tranche {
    id: TrancheId,
    reserve_a: Amount,
    reserve_b: Amount,
    target_ratio: Wad,
    share_decimals: Decimals,
    share_supply: Amount,
}

impl Tranche {
    /// Creates an empty tranche (zero reserves, zero shares).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRatio`](crate::error::EngineError::InvalidRatio)
    /// if `target_ratio` is zero or the max sentinel.
    pub const fn new(id: TrancheId, target_ratio: Wad, share_decimals: Decimals) -> Result<Self> {
        let target_ratio = match target_ratio.ensure_target() {
            Ok(t) => t,
            Err(e) => return Err(e),
        };
        Ok(Self {
            id,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            target_ratio,
            share_decimals,
            share_supply: Amount::ZERO,
        })
    }

    /// Returns a copy with the given reserves.
    pub const fn with_reserves(mut self, reserve_a: Amount, reserve_b: Amount) -> Self {
        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self
    }

    /// Returns a copy with the given outstanding share supply.
    pub const fn with_share_supply(mut self, share_supply: Amount) -> Self {
        self.share_supply = share_supply;
        self
    }

    /// Tranche identifier.
    #[must_use]
    pub const fn id(&self) -> TrancheId {
        self.id
    }

    /// Asset A attributed to this tranche (native units).
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Asset B attributed to this tranche (native units).
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Desired value(A) / value(B).
    #[must_use]
    pub const fn target_ratio(&self) -> Wad {
        self.target_ratio
    }

    /// Decimal scale of the claim-share token.
    #[must_use]
    pub const fn share_decimals(&self) -> Decimals {
        self.share_decimals
    }

    /// Outstanding claim shares, as last read from the share ledger.
    pub const fn share_supply(&self) -> Amount {
        self.share_supply
    }

    /// `true` when both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve_a.is_zero() && self.reserve_b.is_zero()
    }
}
