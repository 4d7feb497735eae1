//! Which way a tranche (or the whole pool) must move to reach its target.

use core::fmt;

use super::{Token, TokenPair};

/// Rebalance direction.
///
/// `NeedMoreA` means the A reserve must grow and the B reserve shrink,
/// i.e. the current value ratio sits below target.  `NeedMoreB` is the
/// mirror case.  `Balanced` is reported whenever the computed correction
/// rounds to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Current ratio below target: acquire A, release B.
    NeedMoreA,
    /// Current ratio at or above target: acquire B, release A.
    NeedMoreB,
    /// No actionable deviation.
    #[default]
    Balanced,
}

impl Direction {
    /// Returns `true` for [`Direction::Balanced`].
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        matches!(self, Self::Balanced)
    }

    /// The asset whose reserve must increase, if any.
    #[must_use]
    pub const fn owed_asset(&self, pair: &TokenPair) -> Option<Token> {
        match self {
            Self::NeedMoreA => Some(pair.asset_a()),
            Self::NeedMoreB => Some(pair.asset_b()),
            Self::Balanced => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NeedMoreA => "need-more-a",
            Self::NeedMoreB => "need-more-b",
            Self::Balanced => "balanced",
        })
    }
}
