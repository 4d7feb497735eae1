//! Automated rebalance trigger.

use crate::calc::{pool_delta, Valuation};
use crate::config::KeeperConfig;
use crate::domain::{Amount, PoolDelta, Rounding};
use crate::error::{EngineError, Result};
use crate::pool::TranchePool;
use crate::traits::{BalanceReader, FromConfig, RateSource};

use super::{IdleReason, RebalancePlan, UpkeepState};

/// Decides when an automated rebalance should fire and records when one
/// did.
///
/// An upkeep is needed when all of the following hold for one snapshot:
///
/// 1. at least `rebalance_interval` seconds have passed since the last
///    upkeep,
/// 2. the pool-level correction is non-zero,
/// 3. its deviation is at least `min_r_div`,
/// 4. the subsidy reserve holds the owed amount plus the slippage buffer.
///
/// The only mutable state is the last-upkeep timestamp, updated through
/// `&mut self` in [`perform_upkeep`](Self::perform_upkeep) from the same
/// snapshot that produced the decision.
///
/// # Examples
///
/// ```
/// use tranche_rebalancer::config::{KeeperConfig, TrancheConfig};
/// use tranche_rebalancer::domain::*;
/// use tranche_rebalancer::keeper::{IdleReason, Keeper, UpkeepState};
/// use tranche_rebalancer::pool::TranchePool;
/// use tranche_rebalancer::traits::{BalanceReader, RateSource};
///
/// struct Oracle(u128);
/// impl RateSource for Oracle {
///     fn exchange_rate(&self) -> u128 { self.0 }
/// }
/// struct Subsidy(Amount);
/// impl BalanceReader for Subsidy {
///     fn balance_of(&self, _token: &Token) -> Amount { self.0 }
/// }
///
/// let eth = Token::new(TokenAddress::from_bytes([1; 32]), Decimals::new(18).expect("valid"));
/// let usdc = Token::new(TokenAddress::from_bytes([2; 32]), Decimals::new(6).expect("valid"));
/// let mut pool = TranchePool::new(TokenPair::new(eth, usdc).expect("distinct"));
/// let config = TrancheConfig::new(Wad::from_fraction(30, 70).expect("valid"), Decimals::MAX)
///     .expect("valid");
/// let id = pool.add_tranche(&config).expect("valid target");
/// pool.update_reserves(id, eth.whole(30), usdc.whole(126_000)).expect("known id");
///
/// let keeper = Keeper::new(KeeperConfig::default());
/// let rate = Oracle(ExchangeRate::from_integer(1_850).expect("non-zero").get());
///
/// let funded = Subsidy(usdc.whole(2_000));
/// let state = keeper.check_upkeep(&pool, &rate, &funded, 0).expect("in range");
/// assert!(state.is_needed());
///
/// let state = keeper.check_upkeep(&pool, &rate, &Subsidy(Amount::ZERO), 0).expect("in range");
/// assert_eq!(state, UpkeepState::Idle(IdleReason::InsufficientFunding));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keeper {
    config: KeeperConfig,
    last_rebalance: u64,
}

impl Keeper {
    /// Creates a keeper that has never rebalanced.
    #[must_use]
    pub const fn new(config: KeeperConfig) -> Self {
        Self {
            config,
            last_rebalance: 0,
        }
    }

    /// Restores a keeper with a previously persisted timestamp.
    #[must_use]
    pub const fn with_last_rebalance(mut self, timestamp: u64) -> Self {
        self.last_rebalance = timestamp;
        self
    }

    /// The trigger thresholds.
    #[must_use]
    pub const fn config(&self) -> &KeeperConfig {
        &self.config
    }

    /// Timestamp (seconds) of the last performed upkeep.
    #[must_use]
    pub const fn last_rebalance(&self) -> u64 {
        self.last_rebalance
    }

    /// `true` once `rebalance_interval` has passed since the last upkeep.
    ///
    /// A clock that runs backwards counts as no time elapsed.
    #[must_use]
    pub const fn interval_elapsed(&self, now: u64) -> bool {
        now.saturating_sub(self.last_rebalance) >= self.config.rebalance_interval()
    }

    /// Evaluates the trigger against a live rate reading.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidRate`] if the rate source reports zero.
    /// - [`EngineError::Overflow`] if the deviation computation leaves the
    ///   representable range.
    pub fn check_upkeep<R, B>(
        &self,
        pool: &TranchePool,
        rates: &R,
        balances: &B,
        now: u64,
    ) -> Result<UpkeepState>
    where
        R: RateSource + ?Sized,
        B: BalanceReader + ?Sized,
    {
        let valuation = Valuation::from_raw(*pool.token_pair(), rates.exchange_rate())?;
        self.evaluate(pool, &valuation, balances, now)
    }

    /// Evaluates the trigger against an explicit rate snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the deviation computation leaves
    /// the representable range.
    pub fn evaluate<B>(
        &self,
        pool: &TranchePool,
        valuation: &Valuation,
        balances: &B,
        now: u64,
    ) -> Result<UpkeepState>
    where
        B: BalanceReader + ?Sized,
    {
        if !self.interval_elapsed(now) {
            return Ok(self.idle(IdleReason::IntervalNotElapsed));
        }

        let delta = pool_delta(pool, valuation)?;
        let Some(owed) = delta.direction.owed_asset(pool.token_pair()) else {
            return Ok(self.idle(IdleReason::Balanced));
        };
        if delta.r_div < self.config.min_r_div() {
            return Ok(self.idle(IdleReason::BelowThreshold));
        }

        let required = self.required_funding(&delta)?;
        let available = balances.balance_of(&owed);
        if available < required {
            tracing::debug!(%required, %available, "subsidy reserve short of owed amount");
            return Ok(self.idle(IdleReason::InsufficientFunding));
        }

        let plan = RebalancePlan {
            direction: delta.direction,
            delta_a: delta.delta_a,
            delta_b: delta.delta_b,
            r_div: delta.r_div,
            owed,
            required,
        };
        tracing::info!(
            direction = %plan.direction,
            r_div = %plan.r_div,
            delta_a = %plan.delta_a,
            delta_b = %plan.delta_b,
            required = %plan.required,
            "upkeep needed"
        );
        Ok(UpkeepState::UpkeepNeeded(plan))
    }

    /// Re-evaluates the trigger and, if an upkeep is needed, records `now`
    /// as the last upkeep and returns the plan for the caller to execute.
    ///
    /// The rate is read exactly once, so the decision and the timestamp
    /// update come from the same snapshot.
    ///
    /// # Errors
    ///
    /// - [`EngineError::UpkeepNotNeeded`] with the idle reason if no upkeep
    ///   is due; the timestamp is left untouched.
    /// - Any error of [`check_upkeep`](Self::check_upkeep).
    pub fn perform_upkeep<R, B>(
        &mut self,
        pool: &TranchePool,
        rates: &R,
        balances: &B,
        now: u64,
    ) -> Result<RebalancePlan>
    where
        R: RateSource + ?Sized,
        B: BalanceReader + ?Sized,
    {
        match self.check_upkeep(pool, rates, balances, now)? {
            UpkeepState::UpkeepNeeded(plan) => {
                self.last_rebalance = now;
                tracing::info!(timestamp = now, direction = %plan.direction, "upkeep performed");
                Ok(plan)
            }
            UpkeepState::Idle(reason) => Err(EngineError::UpkeepNotNeeded(reason)),
        }
    }

    /// Owed amount inflated by the slippage buffer, rounded up.
    fn required_funding(&self, delta: &PoolDelta) -> Result<Amount> {
        self.config
            .slippage()
            .inflate(delta.owed_amount(), Rounding::Up)
    }

    fn idle(&self, reason: IdleReason) -> UpkeepState {
        tracing::debug!(%reason, last_rebalance = self.last_rebalance, "upkeep idle");
        UpkeepState::Idle(reason)
    }
}

impl FromConfig<KeeperConfig> for Keeper {
    fn from_config(config: &KeeperConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(*config))
    }
}
