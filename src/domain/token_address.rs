//! Opaque on-chain identity of an asset.

use core::fmt;

/// A chain-agnostic 32-byte identifier for an asset or share token.
///
/// The engine never dereferences addresses; they only let a
/// [`BalanceReader`](crate::traits::BalanceReader) know which subsidy
/// balance is being asked for.
///
/// # Examples
///
/// ```
/// use tranche_rebalancer::domain::TokenAddress;
///
/// let addr = TokenAddress::from_bytes([0xab; 32]);
/// assert_eq!(addr.as_bytes()[0], 0xab);
/// assert!(format!("{addr}").starts_with("0xabab"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenAddress([u8; 32]);

impl TokenAddress {
    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
