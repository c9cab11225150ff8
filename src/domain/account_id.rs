//! Ledger account identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An account on the ledger: a pool creator, a liquidity provider, a trader,
/// or the pool's own escrow account.
///
/// Wraps a fixed-size `[u8; 32]` public-key digest.  All 32-byte sequences
/// are valid, so construction is infallible.
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::AccountId;
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// assert_eq!(alice.as_bytes(), [1u8; 32]);
/// assert!(!alice.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Builds an account id from a byte slice, as read back from the
    /// key/value store.
    ///
    /// Returns `None` unless `bytes` is exactly 32 bytes long.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        <[u8; 32]>::try_from(bytes).ok().map(Self)
    }

    /// Returns the all-zero account.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the all-zero account.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0.iter().take(4) {
            write!(f, "{b:02x}")?;
        }
        write!(f, "…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_all_zeros() {
        assert_eq!(AccountId::zero().as_bytes(), [0u8; 32]);
        assert!(AccountId::zero().is_zero());
    }

    #[test]
    fn from_slice_requires_exact_length() {
        assert_eq!(
            AccountId::from_slice(&[3u8; 32]),
            Some(AccountId::from_bytes([3u8; 32]))
        );
        assert_eq!(AccountId::from_slice(&[3u8; 31]), None);
        assert_eq!(AccountId::from_slice(&[3u8; 33]), None);
    }

    #[test]
    fn equality() {
        let a = AccountId::from_bytes([1u8; 32]);
        assert_eq!(a, AccountId::from_bytes([1u8; 32]));
        assert_ne!(a, AccountId::from_bytes([2u8; 32]));
    }

    #[test]
    fn display_is_short_hex() {
        let a = AccountId::from_bytes([0xab; 32]);
        assert_eq!(a.to_string(), "abababab…");
    }
}
