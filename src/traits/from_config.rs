//! Generic construction trait for building engine components from
//! configuration.
//!
//! Implementations **must** validate all configuration invariants during
//! construction, so a successfully built component starts in a valid
//! state:
//!
//! - Token pair has two distinct addresses
//! - Every target ratio is non-zero and finite
//! - Share decimals are within `0..=18`
//!
//! There is no `impl<T> FromConfig<T>` blanket: every component-config
//! pairing is explicit.

use crate::error::Result;

/// Builds `Self` from a validated configuration.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for TranchePool`
/// - `impl FromConfig<KeeperConfig> for Keeper`
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfiguration`](crate::error::EngineError::InvalidConfiguration)
/// (or a more specific variant) if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidConfiguration`](crate::error::EngineError::InvalidConfiguration)
    ///   if a parameter is out of range or inconsistent.
    /// - [`EngineError::InvalidRatio`](crate::error::EngineError::InvalidRatio)
    ///   if a target ratio is degenerate.
    fn from_config(config: &C) -> Result<Self>
    where
        Self: Sized;
}
