//! Outcomes of an upkeep check.

use core::fmt;

use crate::domain::{Amount, Direction, Token, Wad};

/// Why the keeper decided not to rebalance.
///
/// Idle outcomes are normal negative decisions, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdleReason {
    /// The pool-level correction is zero or cancels out across tranches.
    Balanced,
    /// The deviation is below the configured `min_r_div`.
    BelowThreshold,
    /// Too little time has passed since the last upkeep.
    IntervalNotElapsed,
    /// The subsidy reserve cannot cover the owed amount plus slippage.
    InsufficientFunding,
}

impl fmt::Display for IdleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Balanced => "pool is balanced",
            Self::BelowThreshold => "deviation below threshold",
            Self::IntervalNotElapsed => "rebalance interval has not elapsed",
            Self::InsufficientFunding => "subsidy reserve cannot cover the rebalance",
        })
    }
}

/// What an automated rebalance must move, as decided from one snapshot.
///
/// The caller executes the swap: it acquires `delta_a` or `delta_b` of the
/// `owed` asset (whichever the direction calls for) and may draw up to
/// `required` of it from the subsidy reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebalancePlan {
    /// Net pool direction.
    pub direction: Direction,
    /// Net A to move (native units).
    pub delta_a: Amount,
    /// Net B to move (native units).
    pub delta_b: Amount,
    /// Largest deviation among tranches pulling in `direction`.
    pub r_div: Wad,
    /// Asset whose reserve must grow.
    pub owed: Token,
    /// Owed amount inflated by the slippage buffer, rounded up.
    pub required: Amount,
}

/// Result of [`Keeper::check_upkeep`](super::Keeper::check_upkeep).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpkeepState {
    /// No rebalance now.
    Idle(IdleReason),
    /// A rebalance should fire with this plan.
    UpkeepNeeded(RebalancePlan),
}

impl UpkeepState {
    /// `true` when a rebalance should fire.
    #[must_use]
    pub const fn is_needed(&self) -> bool {
        matches!(self, Self::UpkeepNeeded(_))
    }

    /// The plan, if a rebalance should fire.
    #[must_use]
    pub const fn plan(&self) -> Option<&RebalancePlan> {
        match self {
            Self::UpkeepNeeded(plan) => Some(plan),
            Self::Idle(_) => None,
        }
    }

    /// The idle reason, if no rebalance should fire.
    #[must_use]
    pub const fn idle_reason(&self) -> Option<IdleReason> {
        match self {
            Self::Idle(reason) => Some(*reason),
            Self::UpkeepNeeded(_) => None,
        }
    }
}
