//! Claim-share supply collaborator.

use crate::domain::{Amount, TrancheId};

/// Reports the outstanding claim-share supply of each tranche.
///
/// Minting and burning happen outside the engine; the engine only reads
/// the supply to price issuance and redemption.
pub trait ShareLedger {
    /// Outstanding shares of `tranche`.
    fn total_supply(&self, tranche: TrancheId) -> Amount;
}

impl<T: ShareLedger + ?Sized> ShareLedger for &T {
    fn total_supply(&self, tranche: TrancheId) -> Amount {
        (**self).total_supply(tranche)
    }
}
