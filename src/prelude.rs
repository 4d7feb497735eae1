//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use tranche_rebalancer::prelude::*;
//! ```

pub use crate::domain::{
    Amount, BasisPoints, Decimals, Direction, ExchangeRate, PoolDelta, Rounding, Token,
    TokenAddress, TokenPair, Tranche, TrancheDelta, TrancheId, Wad,
};

pub use crate::calc::{
    assets_for_redemption, current_ratio, pool_delta, shares_for_deposit, split_from_a,
    split_from_b, tranche_delta, Valuation,
};

pub use crate::traits::{BalanceReader, FromConfig, RateSource, ShareLedger};

pub use crate::config::{KeeperConfig, PoolConfig, TrancheConfig};

pub use crate::engine::RebalanceEngine;
pub use crate::keeper::{IdleReason, Keeper, RebalancePlan, UpkeepState};
pub use crate::pool::TranchePool;

pub use crate::error::{EngineError, Result};
