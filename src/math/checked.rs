//! Checked arithmetic on [`Amount`].
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning helpers on `Amount`
//! into `Result` so that reserve bookkeeping composes with `?`.
//!
//! # Examples
//!
//! ```
//! use tranche_rebalancer::domain::Amount;
//! use tranche_rebalancer::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(100);
//! assert_eq!(reserve.safe_add(&Amount::new(20)), Ok(Amount::new(120)));
//! assert!(reserve.safe_sub(&Amount::new(101)).is_err());
//! ```

use crate::domain::Amount;
use crate::error::{EngineError, Result};

/// Fallible arithmetic for quantity wrappers.
///
/// # Contract
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(EngineError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(EngineError::Underflow("amount subtraction underflow"))
    }
}
