//! Exchange-rate collaborator.

/// Supplies the live A-in-terms-of-B exchange rate.
///
/// The value is raw 18-decimal fixed point: `1_850 * 10^18` means one
/// whole A is worth 1850 whole B.  The engine reads it once per operation
/// and rejects zero with
/// [`EngineError::InvalidRate`](crate::error::EngineError::InvalidRate).
/// Staleness policy belongs to the implementor.
pub trait RateSource {
    /// Current raw rate.
    fn exchange_rate(&self) -> u128;
}

impl<T: RateSource + ?Sized> RateSource for &T {
    fn exchange_rate(&self) -> u128 {
        (**self).exchange_rate()
    }
}
