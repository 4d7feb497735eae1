//! Deviation reports produced by the ratio calculator.

use super::{Amount, Direction, Wad};
use crate::error::{EngineError, Result};

/// How far a single tranche sits from its target, and the asset amounts
/// that would restore it in one step.
///
/// `delta_a` and `delta_b` are the same correction expressed in each
/// asset's native units.  Either both are non-zero or the whole report is
/// [`TrancheDelta::balanced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrancheDelta {
    /// Direction of the correction.
    pub direction: Direction,
    /// Relative deviation `|ratio − target| / target`.
    pub r_div: Wad,
    /// Asset A to move (native units).
    pub delta_a: Amount,
    /// Asset B to move (native units).
    pub delta_b: Amount,
}

impl TrancheDelta {
    /// The exactly-balanced report: zero amounts, zero deviation.
    pub const fn balanced() -> Self {
        Self {
            direction: Direction::Balanced,
            r_div: Wad::ZERO,
            delta_a: Amount::ZERO,
            delta_b: Amount::ZERO,
        }
    }

    /// `true` if no correction is required.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.direction.is_balanced()
    }

    /// Signed contribution `(a, b)` to the pool aggregate.
    ///
    /// `NeedMoreB` contributes (−A, +B); `NeedMoreA` contributes (+A, −B).
    pub(crate) fn signed(&self) -> Result<(i128, i128)> {
        let a = i128::try_from(self.delta_a.get())
            .map_err(|_| EngineError::Overflow("tranche delta_a exceeds signed range"))?;
        let b = i128::try_from(self.delta_b.get())
            .map_err(|_| EngineError::Overflow("tranche delta_b exceeds signed range"))?;
        Ok(match self.direction {
            Direction::NeedMoreA => (a, -b),
            Direction::NeedMoreB => (-a, b),
            Direction::Balanced => (0, 0),
        })
    }
}

/// Pool-wide aggregate of every tranche's delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolDelta {
    /// Net direction; `Balanced` when tranche corrections cancel out.
    pub direction: Direction,
    /// Largest deviation among tranches pulling in the net direction.
    pub r_div: Wad,
    /// Net asset A to move (native units).
    pub delta_a: Amount,
    /// Net asset B to move (native units).
    pub delta_b: Amount,
    /// Number of tranches pulling in the net direction.
    pub contributing: usize,
}

impl PoolDelta {
    /// Nothing to do at pool level.
    pub const fn balanced() -> Self {
        Self {
            direction: Direction::Balanced,
            r_div: Wad::ZERO,
            delta_a: Amount::ZERO,
            delta_b: Amount::ZERO,
            contributing: 0,
        }
    }

    /// `true` if no correction is required.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.direction.is_balanced()
    }

    /// The net amount of the owed asset (the one whose reserve must grow).
    pub const fn owed_amount(&self) -> Amount {
        match self.direction {
            Direction::NeedMoreA => self.delta_a,
            Direction::NeedMoreB => self.delta_b,
            Direction::Balanced => Amount::ZERO,
        }
    }
}
