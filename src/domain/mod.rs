//! Value types modelling tranches, assets and fixed-point quantities.
//!
//! All types are newtypes or plain snapshots with validated constructors,
//! so an instance that exists is already within its invariants (non-zero
//! rate, decimals `0..=18`, non-degenerate target ratio, distinct assets).

mod amount;
mod basis_points;
mod decimals;
mod delta;
mod direction;
mod exchange_rate;
mod rounding;
mod token;
mod token_address;
mod token_pair;
mod tranche;
mod wad;

pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use decimals::Decimals;
pub use delta::{PoolDelta, TrancheDelta};
pub use direction::Direction;
pub use exchange_rate::ExchangeRate;
pub use rounding::Rounding;
pub use token::Token;
pub use token_address::TokenAddress;
pub use token_pair::TokenPair;
pub use tranche::{Tranche, TrancheId};
pub use wad::Wad;
