//! The two assets a tranche pool is denominated in.

use super::Token;
use crate::error::{EngineError, Result};

/// The ordered pair (Asset A, Asset B) shared by every tranche of a pool.
///
/// Unlike a sorted swap pair, the order here is semantic: target ratios
/// and exchange rates are always *value of A per value of B*, so the pair
/// keeps the roles the caller assigned.
///
/// # Examples
///
/// ```
/// use tranche_rebalancer::domain::{Decimals, Token, TokenAddress, TokenPair};
///
/// let weth = Token::new(TokenAddress::from_bytes([9u8; 32]), Decimals::new(18).expect("valid"));
/// let usdc = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::new(6).expect("valid"));
///
/// let pair = TokenPair::new(weth, usdc).expect("distinct");
/// assert_eq!(pair.asset_a(), weth);
/// assert_eq!(pair.asset_b(), usdc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenPair {
    asset_a: Token,
    asset_b: Token,
}

impl TokenPair {
    /// Creates a pair with `asset_a` in the A role and `asset_b` in the B role.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidToken`] if both assets share an address.
    pub fn new(asset_a: Token, asset_b: Token) -> Result<Self> {
        if asset_a.address() == asset_b.address() {
            return Err(EngineError::InvalidToken(
                "asset pair requires two distinct addresses",
            ));
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns Asset A.
    #[must_use]
    pub const fn asset_a(&self) -> Token {
        self.asset_a
    }

    /// Returns Asset B.
    #[must_use]
    pub const fn asset_b(&self) -> Token {
        self.asset_b
    }

    /// Returns `true` if `token` is one of the two assets.
    #[must_use]
    pub fn contains(&self, token: &Token) -> bool {
        self.asset_a == *token || self.asset_b == *token
    }
}
