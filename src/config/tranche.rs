//! Configuration for a single tranche.

use crate::domain::{Decimals, Wad};
use crate::error::Result;

/// Parameters of one tranche: its target value ratio and the decimals of
/// its claim-share token.
///
/// # Validation
///
/// - `target_ratio` must be non-zero and below the [`Wad::MAX`] sentinel.
/// - `share_decimals` is validated at [`Decimals`] construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrancheConfig {
    target_ratio: Wad,
    share_decimals: Decimals,
}

impl TrancheConfig {
    /// Creates a new `TrancheConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRatio`](crate::error::EngineError::InvalidRatio)
    /// if `target_ratio` is degenerate.
    pub fn new(target_ratio: Wad, share_decimals: Decimals) -> Result<Self> {
        let config = Self {
            target_ratio,
            share_decimals,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRatio`](crate::error::EngineError::InvalidRatio)
    /// if `target_ratio` is degenerate.
    pub fn validate(&self) -> Result<()> {
        self.target_ratio.ensure_target().map(|_| ())
    }

    /// Returns the target value ratio A/B.
    #[must_use]
    pub const fn target_ratio(&self) -> Wad {
        self.target_ratio
    }

    /// Returns the claim-share decimals.
    #[must_use]
    pub const fn share_decimals(&self) -> Decimals {
        self.share_decimals
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn valid_config() {
        let Ok(cfg) = TrancheConfig::new(Wad::ONE, Decimals::MAX) else {
            panic!("expected Ok");
        };
        assert_eq!(cfg.target_ratio(), Wad::ONE);
        assert_eq!(cfg.share_decimals(), Decimals::MAX);
    }

    #[test]
    fn zero_target_rejected() {
        let Err(EngineError::InvalidRatio(_)) = TrancheConfig::new(Wad::ZERO, Decimals::MAX) else {
            panic!("expected InvalidRatio");
        };
    }

    #[test]
    fn sentinel_target_rejected() {
        assert!(TrancheConfig::new(Wad::MAX, Decimals::MAX).is_err());
    }
}
