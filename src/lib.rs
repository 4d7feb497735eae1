//! # Tranche Rebalancer
//!
//! Arithmetic and trigger logic for a two-asset liquidity pool split into
//! independent *tranches*.  Each tranche targets a fixed value ratio
//! between its reserves of Asset A and Asset B.  As the exchange rate
//! moves, the engine reports how far every tranche has drifted, how much
//! of each asset would restore the target, and whether an external keeper
//! should act.
//!
//! The crate holds no assets and executes no transfers.  Exchange rates,
//! share supplies and subsidy balances are read through injected
//! collaborator traits, and every calculation is a pure function of one
//! snapshot of those readings.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for domain and config types |
//!
//! # Quick Start
//!
//! ```rust
//! use tranche_rebalancer::prelude::*;
//!
//! let eth = Token::new(TokenAddress::from_bytes([1; 32]), Decimals::new(18).expect("valid"));
//! let usdc = Token::new(TokenAddress::from_bytes([2; 32]), Decimals::new(6).expect("valid"));
//! let pair = TokenPair::new(eth, usdc).expect("distinct tokens");
//!
//! // One tranche holding 30 % of its value in ETH.
//! let target = Wad::from_fraction(30, 70).expect("non-zero denominator");
//! let tranche = TrancheConfig::new(target, Decimals::MAX).expect("valid");
//! let config = PoolConfig::new(pair, vec![tranche]).expect("valid pool");
//! let mut pool = TranchePool::from_config(&config).expect("pool built");
//! let id = TrancheId::new(0);
//! pool.update_reserves(id, eth.whole(30), usdc.whole(126_000)).expect("known tranche");
//!
//! // ETH rallies from 1800 to 1850 USDC: the tranche now holds too much ETH.
//! let valuation = Valuation::new(pair, ExchangeRate::from_integer(1_850).expect("non-zero"));
//! let delta = tranche_delta(pool.get(id).expect("known tranche"), &valuation).expect("in range");
//! assert_eq!(delta.direction, Direction::NeedMoreB);
//! assert_eq!(delta.delta_b, usdc.whole(1_050));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Keeper     │  interval, threshold and funding gates
//! └──────┬───────┘
//!        │ check_upkeep / perform_upkeep
//!        ▼
//! ┌──────────────┐
//! │    Engine     │  binds the pool to RateSource + ShareLedger
//! └──────┬───────┘
//!        │ one Valuation per call
//!        ▼
//! ┌──────────────┐
//! │     Calc      │  ratio, deltas, issuance, splitting
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │    Domain     │  Amount, Wad, ExchangeRate, Tranche, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Wad`](domain::Wad), [`Tranche`](domain::Tranche), etc. |
//! | [`calc`] | Pure calculations over a [`Valuation`](calc::Valuation) snapshot |
//! | [`pool`] | [`TranchePool`](pool::TranchePool) arena of tranches |
//! | [`keeper`] | [`Keeper`](keeper::Keeper) trigger and [`UpkeepState`](keeper::UpkeepState) |
//! | [`engine`] | [`RebalanceEngine`](engine::RebalanceEngine) facade over live collaborators |
//! | [`traits`] | Collaborator capabilities and [`FromConfig`](traits::FromConfig) |
//! | [`config`] | Declarative pool, tranche and keeper blueprints |
//! | [`math`] | 256-bit intermediates, `mul_div`, integer square root |
//! | [`error`] | [`EngineError`](error::EngineError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod calc;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod keeper;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
