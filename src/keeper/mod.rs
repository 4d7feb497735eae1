//! Rebalance trigger: when should an automated rebalance fire?
//!
//! [`Keeper::check_upkeep`] is a pure decision over one snapshot;
//! [`Keeper::perform_upkeep`] repeats the decision and, if positive,
//! records the upkeep timestamp.  Neither moves assets: the returned
//! [`RebalancePlan`] tells the caller what to swap.

mod state;
mod trigger;

pub use state::{IdleReason, RebalancePlan, UpkeepState};
pub use trigger::Keeper;
