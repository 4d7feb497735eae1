//! Subsidy-reserve collaborator.

use crate::domain::{Amount, Token};

/// Reads the subsidy reserve that funds automated rebalances.
///
/// The keeper only fires when the reserve holds enough of the owed asset
/// to cover the correction plus its slippage buffer.
pub trait BalanceReader {
    /// Balance of `token` available to the rebalancer.
    fn balance_of(&self, token: &Token) -> Amount;
}

impl<T: BalanceReader + ?Sized> BalanceReader for &T {
    fn balance_of(&self, token: &Token) -> Amount {
        (**self).balance_of(token)
    }
}
