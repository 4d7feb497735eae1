//! Keeper cycle walkthrough.
//!
//! Builds a single 30/70 ETH/USDC tranche, replays a short price path and
//! lets the keeper decide at every tick whether to rebalance.  Executed
//! plans are written back into the pool the way an external executor
//! would after settling the trades.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=tranche_rebalancer=debug cargo run --example keeper_cycle
//! ```

use std::cell::Cell;

use tracing_subscriber::EnvFilter;
use tranche_rebalancer::config::{KeeperConfig, PoolConfig, TrancheConfig};
use tranche_rebalancer::domain::{
    Amount, BasisPoints, Decimals, Direction, ExchangeRate, Token, TokenAddress, TokenPair,
    TrancheId, Wad,
};
use tranche_rebalancer::engine::RebalanceEngine;
use tranche_rebalancer::keeper::{Keeper, RebalancePlan, UpkeepState};
use tranche_rebalancer::math::CheckedArithmetic;
use tranche_rebalancer::pool::TranchePool;
use tranche_rebalancer::traits::{BalanceReader, FromConfig, RateSource, ShareLedger};

/// Oracle whose price the walkthrough moves by hand.
struct Oracle(Cell<u128>);

impl RateSource for Oracle {
    fn exchange_rate(&self) -> u128 {
        self.0.get()
    }
}

/// Subsidy reserve holding a fixed amount of each asset.
struct Treasury {
    eth: Token,
    eth_balance: Amount,
    usdc_balance: Amount,
}

impl BalanceReader for Treasury {
    fn balance_of(&self, token: &Token) -> Amount {
        if *token == self.eth {
            self.eth_balance
        } else {
            self.usdc_balance
        }
    }
}

/// Share ledger with a single fixed supply.
struct Ledger(Amount);

impl ShareLedger for Ledger {
    fn total_supply(&self, _tranche: TrancheId) -> Amount {
        self.0
    }
}

fn apply(
    engine: &mut RebalanceEngine<&Oracle, Ledger>,
    id: TrancheId,
    plan: &RebalancePlan,
) -> Result<(), Box<dyn std::error::Error>> {
    let tranche = *engine.pool().get(id)?;
    let (a, b) = match plan.direction {
        Direction::NeedMoreA => (
            tranche.reserve_a().safe_add(&plan.delta_a)?,
            tranche.reserve_b().safe_sub(&plan.delta_b)?,
        ),
        Direction::NeedMoreB => (
            tranche.reserve_a().safe_sub(&plan.delta_a)?,
            tranche.reserve_b().safe_add(&plan.delta_b)?,
        ),
        Direction::Balanced => return Ok(()),
    };
    engine.pool_mut().update_reserves(id, a, b)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Tranche keeper cycle ===\n");

    // ── 1. Define tokens and the pool ───────────────────────────────────
    let eth = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::new(18)?);
    let usdc = Token::new(TokenAddress::from_bytes([2u8; 32]), Decimals::new(6)?);
    let pair = TokenPair::new(eth, usdc)?;

    let target = Wad::from_fraction(30, 70)?;
    let config = PoolConfig::new(pair, vec![TrancheConfig::new(target, Decimals::MAX)?])?;
    let mut pool = TranchePool::from_config(&config)?;
    let id = TrancheId::new(0);
    pool.update_reserves(id, eth.whole(30), usdc.whole(126_000))?;
    println!("Tranche {id}: 30 ETH + 126 000 USDC, target ratio {target}");

    // ── 2. Wire collaborators ───────────────────────────────────────────
    let oracle = Oracle(Cell::new(ExchangeRate::from_integer(1_800)?.get()));
    let treasury = Treasury {
        eth,
        eth_balance: eth.whole(5),
        usdc_balance: usdc.whole(10_000),
    };
    let mut engine = RebalanceEngine::new(pool, &oracle, Ledger(Amount::new(100 * 10u128.pow(18))));

    let keeper_config = KeeperConfig::new(Wad::from_per_mille(5), 60, BasisPoints::new(300))?;
    let mut keeper = Keeper::from_config(&keeper_config)?;
    println!(
        "Keeper: min deviation {}, interval {}s, slippage {}\n",
        keeper_config.min_r_div(),
        keeper_config.rebalance_interval(),
        keeper_config.slippage()
    );

    // ── 3. Replay a price path ──────────────────────────────────────────
    let path: [(u64, u128); 6] = [
        (0, 1_800),
        (30, 1_850),
        (60, 1_850),
        (90, 1_810),
        (150, 1_700),
        (210, 1_702),
    ];

    for (now, price) in path {
        oracle.0.set(ExchangeRate::from_integer(price)?.get());
        let ratio = engine.current_ratio(id)?;

        match engine.check_upkeep(&keeper, &treasury, now)? {
            UpkeepState::Idle(reason) => {
                println!("t={now:>4}s  price {price:>5}  ratio {ratio}  idle: {reason}");
            }
            UpkeepState::UpkeepNeeded(_) => {
                let plan = engine.perform_upkeep(&mut keeper, &treasury, now)?;
                println!(
                    "t={now:>4}s  price {price:>5}  ratio {ratio}  rebalance {}: ΔA={} ΔB={}",
                    plan.direction, plan.delta_a, plan.delta_b
                );
                println!("           subsidy must cover {} of the owed asset", plan.required);
                apply(&mut engine, id, &plan)?;
                println!("           ratio after execution {}", engine.current_ratio(id)?);
            }
        }
    }

    // ── 4. Share accounting at the final price ──────────────────────────
    let (a, b) = engine.assets_for_redemption(id, Amount::new(10u128.pow(18)))?;
    println!("\nOne share redeems {a} wei ETH + {b} µUSDC");
    let shares = engine.shares_for_deposit(id, eth.whole(1), Amount::ZERO)?;
    println!("Depositing 1 ETH mints {shares} share units");

    Ok(())
}
