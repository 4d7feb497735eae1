//! Configuration for the automated rebalance trigger.

use crate::domain::{BasisPoints, Wad};
use crate::error::{EngineError, Result};

/// Thresholds that gate an automated rebalance.
///
/// | Field | Meaning | Default |
/// |-------|---------|---------|
/// | `min_r_div` | smallest relative deviation worth acting on | 0.5 % |
/// | `rebalance_interval` | seconds between two upkeeps | 0 |
/// | `slippage` | buffer on top of the owed amount the subsidy must cover | 300 bp |
///
/// # Validation
///
/// - `slippage` must not exceed 100 %.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeeperConfig {
    min_r_div: Wad,
    rebalance_interval: u64,
    slippage: BasisPoints,
}

impl KeeperConfig {
    /// Creates a new `KeeperConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if `slippage` exceeds 100 %.
    pub fn new(min_r_div: Wad, rebalance_interval: u64, slippage: BasisPoints) -> Result<Self> {
        let config = Self {
            min_r_div,
            rebalance_interval,
            slippage,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if `slippage` exceeds 100 %.
    pub const fn validate(&self) -> Result<()> {
        if !self.slippage.is_valid_percent() {
            return Err(EngineError::InvalidConfiguration(
                "slippage buffer must be at most 10000 bp",
            ));
        }
        Ok(())
    }

    /// Smallest relative deviation that triggers an upkeep.
    #[must_use]
    pub const fn min_r_div(&self) -> Wad {
        self.min_r_div
    }

    /// Minimum seconds between two upkeeps.
    #[must_use]
    pub const fn rebalance_interval(&self) -> u64 {
        self.rebalance_interval
    }

    /// Slippage buffer applied to the owed amount.
    #[must_use]
    pub const fn slippage(&self) -> BasisPoints {
        self.slippage
    }
}

impl Default for KeeperConfig {
    fn default() -> Self {
        Self {
            min_r_div: Wad::from_per_mille(5),
            rebalance_interval: 0,
            slippage: BasisPoints::new(300),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = KeeperConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.min_r_div(), Wad::from_per_mille(5));
        assert_eq!(cfg.rebalance_interval(), 0);
        assert_eq!(cfg.slippage(), BasisPoints::new(300));
    }

    #[test]
    fn excessive_slippage_rejected() {
        let Err(EngineError::InvalidConfiguration(_)) =
            KeeperConfig::new(Wad::ONE, 60, BasisPoints::new(10_001))
        else {
            panic!("expected InvalidConfiguration");
        };
    }

    #[test]
    fn full_slippage_allowed() {
        assert!(KeeperConfig::new(Wad::ZERO, 0, BasisPoints::MAX_PERCENT).is_ok());
    }
}
