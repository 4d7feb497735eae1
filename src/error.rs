//! Unified error type for the tranche rebalancing engine.
//!
//! Every fallible operation in the crate returns [`EngineError`].  Variants
//! carry a static description of the failing step rather than formatted
//! strings, so errors stay `Copy`-cheap to construct on hot arithmetic paths
//! and remain comparable in tests.
//!
//! # Propagation
//!
//! Arithmetic range violations are never clamped or wrapped: they surface
//! as [`EngineError::Overflow`] and the whole operation is rejected.  The
//! only silent adjustment in the crate is the documented zero-floor on
//! tranche deltas (see [`crate::calc::tranche_delta`]).

use thiserror::Error;

use crate::domain::TrancheId;
use crate::keeper::IdleReason;

/// Errors produced by the rebalancing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An intermediate product or sum left the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction would have produced a negative amount.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// A divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The supplied exchange rate is zero or otherwise unusable.
    #[error("invalid exchange rate: {0}")]
    InvalidRate(&'static str),

    /// A fixed-point ratio was out of its allowed range.
    #[error("invalid ratio: {0}")]
    InvalidRatio(&'static str),

    /// Decimal precision outside `0..=18`.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// Asset identities are inconsistent (duplicate or unknown asset).
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// A configuration struct failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Reserves and share supply contradict each other.
    #[error("inconsistent tranche state: {0}")]
    InvalidState(&'static str),

    /// A redemption asked for more shares than are outstanding.
    #[error("redemption exceeds outstanding share supply")]
    InsufficientShares,

    /// No tranche is registered under the given identifier.
    #[error("tranche {0} not found")]
    TrancheNotFound(TrancheId),

    /// `perform_upkeep` was called while the keeper is idle.
    #[error("upkeep not needed: {0}")]
    UpkeepNotNeeded(IdleReason),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, EngineError>;
