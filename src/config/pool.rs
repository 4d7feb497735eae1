//! Configuration for a tranche pool.

use super::TrancheConfig;
use crate::domain::TokenPair;
use crate::error::{EngineError, Result};

/// Declarative blueprint of a [`TranchePool`](crate::pool::TranchePool):
/// the asset pair plus the tranches to create, in order.
///
/// Tranches are created empty; the list may be empty and tranches added
/// later through [`TranchePool::add_tranche`](crate::pool::TranchePool::add_tranche).
///
/// # Validation
///
/// - The pair must name two distinct assets (re-checked here because a
///   deserialized pair bypasses [`TokenPair::new`]).
/// - Every tranche config must be valid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    token_pair: TokenPair,
    tranches: Vec<TrancheConfig>,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, see [`PoolConfig::validate`].
    pub fn new(token_pair: TokenPair, tranches: Vec<TrancheConfig>) -> Result<Self> {
        let config = Self {
            token_pair,
            tranches,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidToken`] if the pair repeats an address.
    /// - [`EngineError::InvalidRatio`] if a tranche target is degenerate.
    pub fn validate(&self) -> Result<()> {
        let (a, b) = (self.token_pair.asset_a(), self.token_pair.asset_b());
        if a.address() == b.address() {
            return Err(EngineError::InvalidToken(
                "asset pair requires two distinct addresses",
            ));
        }
        self.tranches.iter().try_for_each(TrancheConfig::validate)
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    /// Returns the tranche blueprints in creation order.
    #[must_use]
    pub fn tranches(&self) -> &[TrancheConfig] {
        &self.tranches
    }
}
