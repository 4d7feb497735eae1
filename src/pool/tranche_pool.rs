//! Insert-only arena of tranches sharing one asset pair.

use crate::config::{PoolConfig, TrancheConfig};
use crate::domain::{Amount, TokenPair, Tranche, TrancheId};
use crate::error::{EngineError, Result};
use crate::traits::FromConfig;

/// A two-asset pool split into independently targeted tranches.
///
/// Tranches live in a `Vec` and are addressed by [`TrancheId`], their
/// index.  Tranches are never removed, so an identifier stays valid for
/// the life of the pool and iteration follows creation order.
///
/// The pool only records state.  Issuance, redemption and rebalance
/// amounts are computed by [`calc`](crate::calc), executed elsewhere, and
/// written back with [`update_reserves`](Self::update_reserves) and
/// [`update_share_supply`](Self::update_share_supply).
///
/// # Examples
///
/// ```
/// use tranche_rebalancer::config::TrancheConfig;
/// use tranche_rebalancer::domain::*;
/// use tranche_rebalancer::pool::TranchePool;
///
/// let eth = Token::new(TokenAddress::from_bytes([1; 32]), Decimals::new(18).expect("valid"));
/// let usdc = Token::new(TokenAddress::from_bytes([2; 32]), Decimals::new(6).expect("valid"));
/// let mut pool = TranchePool::new(TokenPair::new(eth, usdc).expect("distinct"));
///
/// let config = TrancheConfig::new(Wad::from_fraction(30, 70).expect("valid"), Decimals::MAX)
///     .expect("valid");
/// let conservative = pool.add_tranche(&config).expect("valid target");
/// pool.update_reserves(conservative, eth.whole(30), usdc.whole(126_000)).expect("known id");
///
/// assert_eq!(pool.len(), 1);
/// assert_eq!(pool.get(conservative).expect("known id").reserve_a(), eth.whole(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranchePool {
    token_pair: TokenPair,
    tranches: Vec<Tranche>,
}

impl TranchePool {
    /// Creates a pool with no tranches.
    #[must_use]
    pub const fn new(token_pair: TokenPair) -> Self {
        Self {
            token_pair,
            tranches: Vec::new(),
        }
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    /// Appends an empty tranche and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRatio`] if the config carries a
    /// degenerate target (possible only for a deserialized config).
    pub fn add_tranche(&mut self, config: &TrancheConfig) -> Result<TrancheId> {
        let id = TrancheId::new(self.tranches.len());
        let tranche = Tranche::new(id, config.target_ratio(), config.share_decimals())?;
        self.tranches.push(tranche);
        tracing::debug!(tranche = %id, target = %config.target_ratio(), "tranche created");
        Ok(id)
    }

    /// Looks up a tranche.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TrancheNotFound`] for an unknown identifier.
    pub fn get(&self, id: TrancheId) -> Result<&Tranche> {
        self.tranches
            .get(id.index())
            .ok_or(EngineError::TrancheNotFound(id))
    }

    fn get_mut(&mut self, id: TrancheId) -> Result<&mut Tranche> {
        self.tranches
            .get_mut(id.index())
            .ok_or(EngineError::TrancheNotFound(id))
    }

    /// Iterates tranches in creation order.
    pub fn iter(&self) -> core::slice::Iter<'_, Tranche> {
        self.tranches.iter()
    }

    /// All tranches in creation order.
    #[must_use]
    pub fn tranches(&self) -> &[Tranche] {
        &self.tranches
    }

    /// Number of tranches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tranches.len()
    }

    /// `true` if the pool has no tranches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tranches.is_empty()
    }

    /// Records new reserves after an external deposit, withdrawal or
    /// rebalance.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TrancheNotFound`] for an unknown identifier.
    pub fn update_reserves(
        &mut self,
        id: TrancheId,
        reserve_a: Amount,
        reserve_b: Amount,
    ) -> Result<()> {
        let tranche = self.get_mut(id)?;
        *tranche = tranche.with_reserves(reserve_a, reserve_b);
        Ok(())
    }

    /// Records the share supply reported by the share ledger.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TrancheNotFound`] for an unknown identifier.
    pub fn update_share_supply(&mut self, id: TrancheId, share_supply: Amount) -> Result<()> {
        let tranche = self.get_mut(id)?;
        *tranche = tranche.with_share_supply(share_supply);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TranchePool {
    type Item = &'a Tranche;
    type IntoIter = core::slice::Iter<'a, Tranche>;

    fn into_iter(self) -> Self::IntoIter {
        self.tranches.iter()
    }
}

impl FromConfig<PoolConfig> for TranchePool {
    fn from_config(config: &PoolConfig) -> Result<Self> {
        config.validate()?;
        let mut pool = Self::new(*config.token_pair());
        for tranche in config.tranches() {
            pool.add_tranche(tranche)?;
        }
        Ok(pool)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Decimals, Token, TokenAddress, Wad};

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

    fn tranche_config(per_mille: u64) -> TrancheConfig {
        let Ok(cfg) = TrancheConfig::new(Wad::from_per_mille(per_mille), Decimals::MAX) else {
            panic!("valid tranche config");
        };
        cfg
    }

    #[test]
    fn ids_follow_creation_order() {
        let mut pool = TranchePool::new(make_pair());
        let first = pool.add_tranche(&tranche_config(500));
        let second = pool.add_tranche(&tranche_config(1_500));
        assert_eq!(first, Ok(TrancheId::new(0)));
        assert_eq!(second, Ok(TrancheId::new(1)));
        let targets: Vec<_> = pool.iter().map(Tranche::target_ratio).collect();
        assert_eq!(targets, vec![Wad::from_per_mille(500), Wad::from_per_mille(1_500)]);
    }

    #[test]
    fn new_tranches_are_empty() {
        let mut pool = TranchePool::new(make_pair());
        let Ok(id) = pool.add_tranche(&tranche_config(1_000)) else {
            panic!("valid tranche");
        };
        let Ok(t) = pool.get(id) else {
            panic!("expected tranche");
        };
        assert!(t.is_empty());
        assert_eq!(t.share_supply(), Amount::ZERO);
    }

    #[test]
    fn updates_are_recorded() {
        let mut pool = TranchePool::new(make_pair());
        let Ok(id) = pool.add_tranche(&tranche_config(1_000)) else {
            panic!("valid tranche");
        };
        assert!(pool.update_reserves(id, Amount::new(5), Amount::new(7)).is_ok());
        assert!(pool.update_share_supply(id, Amount::new(11)).is_ok());
        let Ok(t) = pool.get(id) else {
            panic!("expected tranche");
        };
        assert_eq!((t.reserve_a(), t.reserve_b()), (Amount::new(5), Amount::new(7)));
        assert_eq!(t.share_supply(), Amount::new(11));
        assert_eq!(t.target_ratio(), Wad::from_per_mille(1_000));
    }

    #[test]
    fn unknown_id_rejected() {
        let mut pool = TranchePool::new(make_pair());
        let ghost = TrancheId::new(3);
        assert_eq!(pool.get(ghost).err(), Some(EngineError::TrancheNotFound(ghost)));
        assert_eq!(
            pool.update_reserves(ghost, Amount::ZERO, Amount::ZERO),
            Err(EngineError::TrancheNotFound(ghost))
        );
        assert_eq!(
            pool.update_share_supply(ghost, Amount::ZERO),
            Err(EngineError::TrancheNotFound(ghost))
        );
    }

    #[test]
    fn from_config_creates_all_tranches() {
        let Ok(cfg) = PoolConfig::new(make_pair(), vec![tranche_config(300), tranche_config(700)])
        else {
            panic!("valid pool config");
        };
        let Ok(pool) = TranchePool::from_config(&cfg) else {
            panic!("expected Ok");
        };
        assert_eq!(pool.len(), 2);
        assert_eq!(*pool.token_pair(), make_pair());
        assert!(pool.iter().all(Tranche::is_empty));
    }
}
