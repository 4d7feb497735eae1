//! Facade binding a tranche pool to its live collaborators.

use crate::calc::{self, Valuation};
use crate::domain::{Amount, PoolDelta, Tranche, TrancheDelta, TrancheId, Wad};
use crate::error::Result;
use crate::keeper::{Keeper, RebalancePlan, UpkeepState};
use crate::pool::TranchePool;
use crate::traits::{BalanceReader, RateSource, ShareLedger};

/// A [`TranchePool`] together with its rate source and share ledger.
///
/// Every query reads the exchange rate exactly once and, where shares are
/// involved, refreshes the tranche's supply from the ledger before
/// computing.  Results are therefore consistent with a single snapshot of
/// both collaborators.
#[derive(Debug)]
pub struct RebalanceEngine<R, L> {
    pool: TranchePool,
    rates: R,
    ledger: L,
}

impl<R, L> RebalanceEngine<R, L>
where
    R: RateSource,
    L: ShareLedger,
{
    /// Binds `pool` to its collaborators.
    pub const fn new(pool: TranchePool, rates: R, ledger: L) -> Self {
        Self {
            pool,
            rates,
            ledger,
        }
    }

    /// The underlying pool.
    pub const fn pool(&self) -> &TranchePool {
        &self.pool
    }

    /// Mutable access for recording executed deposits, withdrawals and
    /// rebalances.
    pub fn pool_mut(&mut self) -> &mut TranchePool {
        &mut self.pool
    }

    /// Reads the rate once and binds it to the pool's pair.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRate`](crate::error::EngineError::InvalidRate)
    /// if the source reports zero.
    pub fn valuation(&self) -> Result<Valuation> {
        Valuation::from_raw(*self.pool.token_pair(), self.rates.exchange_rate())
    }

    /// The tranche with its share supply refreshed from the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TrancheNotFound`](crate::error::EngineError::TrancheNotFound)
    /// for an unknown identifier.
    pub fn snapshot(&self, id: TrancheId) -> Result<Tranche> {
        let tranche = self.pool.get(id)?;
        Ok(tranche.with_share_supply(self.ledger.total_supply(id)))
    }

    /// See [`calc::current_ratio`].
    ///
    /// # Errors
    ///
    /// Unknown tranche, invalid rate, or arithmetic overflow.
    pub fn current_ratio(&self, id: TrancheId) -> Result<Wad> {
        calc::current_ratio(self.pool.get(id)?, &self.valuation()?)
    }

    /// See [`calc::tranche_delta`].
    ///
    /// # Errors
    ///
    /// Unknown tranche, invalid rate, or arithmetic overflow.
    pub fn tranche_delta(&self, id: TrancheId) -> Result<TrancheDelta> {
        calc::tranche_delta(self.pool.get(id)?, &self.valuation()?)
    }

    /// See [`calc::pool_delta`].
    ///
    /// # Errors
    ///
    /// Invalid rate or arithmetic overflow.
    pub fn pool_delta(&self) -> Result<PoolDelta> {
        calc::pool_delta(&self.pool, &self.valuation()?)
    }

    /// See [`calc::shares_for_deposit`].
    ///
    /// # Errors
    ///
    /// Unknown tranche, invalid rate, inconsistent supply, or arithmetic
    /// overflow.
    pub fn shares_for_deposit(
        &self,
        id: TrancheId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Amount> {
        calc::shares_for_deposit(
            &self.snapshot(id)?,
            amount_a,
            amount_b,
            &self.valuation()?,
        )
    }

    /// See [`calc::assets_for_redemption`].
    ///
    /// # Errors
    ///
    /// Unknown tranche, invalid rate, shares above supply, or arithmetic
    /// overflow.
    pub fn assets_for_redemption(&self, id: TrancheId, shares: Amount) -> Result<(Amount, Amount)> {
        calc::assets_for_redemption(&self.snapshot(id)?, shares, &self.valuation()?)
    }

    /// Splits a single-asset A amount at the tranche's target ratio.
    ///
    /// # Errors
    ///
    /// Unknown tranche, invalid rate, or arithmetic overflow.
    pub fn split_from_a(&self, id: TrancheId, total_a: Amount) -> Result<(Amount, Amount)> {
        let target = self.pool.get(id)?.target_ratio();
        calc::split_from_a(total_a, target, &self.valuation()?)
    }

    /// Splits a single-asset B amount at the tranche's target ratio.
    ///
    /// # Errors
    ///
    /// Unknown tranche, invalid rate, or arithmetic overflow.
    pub fn split_from_b(&self, id: TrancheId, total_b: Amount) -> Result<(Amount, Amount)> {
        let target = self.pool.get(id)?.target_ratio();
        calc::split_from_b(total_b, target, &self.valuation()?)
    }

    /// Runs [`Keeper::check_upkeep`] against this pool.
    ///
    /// # Errors
    ///
    /// Invalid rate or arithmetic overflow.
    pub fn check_upkeep<B>(&self, keeper: &Keeper, balances: &B, now: u64) -> Result<UpkeepState>
    where
        B: BalanceReader + ?Sized,
    {
        keeper.check_upkeep(&self.pool, &self.rates, balances, now)
    }

    /// Runs [`Keeper::perform_upkeep`] against this pool.
    ///
    /// # Errors
    ///
    /// [`EngineError::UpkeepNotNeeded`](crate::error::EngineError::UpkeepNotNeeded)
    /// when idle, otherwise invalid rate or arithmetic overflow.
    pub fn perform_upkeep<B>(
        &self,
        keeper: &mut Keeper,
        balances: &B,
        now: u64,
    ) -> Result<RebalancePlan>
    where
        B: BalanceReader + ?Sized,
    {
        keeper.perform_upkeep(&self.pool, &self.rates, balances, now)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::config::TrancheConfig;
    use crate::domain::{Decimals, Direction, ExchangeRate, Token, TokenAddress, TokenPair};
    use crate::error::EngineError;
    use crate::math::SCALE;

    const USDC: u128 = 1_000_000;

    struct FixedRate(u128);

    impl RateSource for FixedRate {
        fn exchange_rate(&self) -> u128 {
            self.0
        }
    }

    #[derive(Default)]
    struct Ledger(HashMap<TrancheId, Amount>);

    impl ShareLedger for Ledger {
        fn total_supply(&self, tranche: TrancheId) -> Amount {
            self.0.get(&tranche).copied().unwrap_or(Amount::ZERO)
        }
    }

    fn make_pair() -> TokenPair {
        let (Ok(d18), Ok(d6)) = (Decimals::new(18), Decimals::new(6)) else {
            panic!("valid decimals");
        };
        let Ok(pair) = TokenPair::new(
            Token::new(TokenAddress::from_bytes([1u8; 32]), d18),
            Token::new(TokenAddress::from_bytes([2u8; 32]), d6),
        ) else {
            panic!("valid pair");
        };
        pair
    }

    fn rate(units: u128) -> FixedRate {
        let Ok(r) = ExchangeRate::from_integer(units) else {
            panic!("valid rate");
        };
        FixedRate(r.get())
    }

    fn engine(rate_units: u128, ledger: Ledger) -> (RebalanceEngine<FixedRate, Ledger>, TrancheId) {
        let Ok(cfg) = TrancheConfig::new(Wad::ONE, Decimals::MAX) else {
            panic!("valid tranche config");
        };
        let mut pool = TranchePool::new(make_pair());
        let Ok(id) = pool.add_tranche(&cfg) else {
            panic!("valid tranche");
        };
        (RebalanceEngine::new(pool, rate(rate_units), ledger), id)
    }

    #[test]
    fn snapshot_reads_ledger_supply() {
        let mut ledger = Ledger::default();
        ledger.0.insert(TrancheId::new(0), Amount::new(77));
        let (e, id) = engine(2_000, ledger);
        let Ok(t) = e.snapshot(id) else {
            panic!("expected Ok");
        };
        assert_eq!(t.share_supply(), Amount::new(77));
    }

    #[test]
    fn deposit_uses_ledger_supply() {
        let mut ledger = Ledger::default();
        ledger.0.insert(TrancheId::new(0), Amount::new(20 * SCALE));
        let (mut e, id) = engine(2_000, ledger);
        let Ok(()) = e
            .pool_mut()
            .update_reserves(id, Amount::new(10 * SCALE), Amount::new(20_000 * USDC))
        else {
            panic!("known tranche");
        };
        assert_eq!(
            e.shares_for_deposit(id, Amount::new(SCALE), Amount::new(2_000 * USDC)),
            Ok(Amount::new(2 * SCALE))
        );
        assert_eq!(
            e.assets_for_redemption(id, Amount::new(10 * SCALE)),
            Ok((Amount::new(5 * SCALE), Amount::new(10_000 * USDC)))
        );
    }

    #[test]
    fn split_uses_tranche_target() {
        let (e, id) = engine(2_000, Ledger::default());
        assert_eq!(
            e.split_from_a(id, Amount::new(2 * SCALE)),
            Ok((Amount::new(SCALE), Amount::new(2_000 * USDC)))
        );
        assert_eq!(
            e.split_from_b(id, Amount::new(4_000 * USDC)),
            Ok((Amount::new(SCALE), Amount::new(2_000 * USDC)))
        );
    }

    #[test]
    fn zero_rate_rejected_everywhere() {
        let (mut e, id) = engine(1, Ledger::default());
        e.rates = FixedRate(0);
        assert!(matches!(e.current_ratio(id), Err(EngineError::InvalidRate(_))));
        assert!(matches!(e.pool_delta(), Err(EngineError::InvalidRate(_))));
        assert!(matches!(e.split_from_a(id, Amount::new(1)), Err(EngineError::InvalidRate(_))));
    }

    #[test]
    fn unknown_tranche_rejected() {
        let (e, _) = engine(2_000, Ledger::default());
        let ghost = TrancheId::new(9);
        assert_eq!(e.tranche_delta(ghost), Err(EngineError::TrancheNotFound(ghost)));
        assert_eq!(e.snapshot(ghost), Err(EngineError::TrancheNotFound(ghost)));
    }

    #[test]
    fn deltas_follow_rate() {
        let (mut e, id) = engine(2_000, Ledger::default());
        let Ok(()) = e
            .pool_mut()
            .update_reserves(id, Amount::new(SCALE), Amount::new(2_000 * USDC))
        else {
            panic!("known tranche");
        };
        assert_eq!(e.current_ratio(id), Ok(Wad::ONE));
        assert_eq!(e.pool_delta(), Ok(PoolDelta::balanced()));

        e.rates = rate(2_200);
        let Ok(d) = e.tranche_delta(id) else {
            panic!("expected Ok");
        };
        assert_eq!(d.direction, Direction::NeedMoreB);
        let Ok(pd) = e.pool_delta() else {
            panic!("expected Ok");
        };
        assert_eq!(pd.delta_b, d.delta_b);
    }
}
