//! Snapshot-consistent facade over the pool and its collaborators.

mod rebalance_engine;

pub use rebalance_engine::RebalanceEngine;
