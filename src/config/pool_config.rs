//! Creation parameters for a constant-product pool.

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Amount, BasisPoints, TokenPair};
use crate::error::AmmError;

/// Immutable parameters a pool is created with (`x · y = k`).
///
/// Everything here is fixed for the pool's lifetime: there is no
/// governance path that changes the fee or the minimum increment.
///
/// # Validation
///
/// - The fee must be below 10 000 basis points.
/// - The reserve tokens must differ, which [`TokenPair`] already enforces
///   at construction and on deserialization.
///
/// A blueprint loaded with serde should be passed through
/// [`validate`](Self::validate) before use.
///
/// # Examples
///
/// ```
/// use cpmm_engine::config::PoolConfig;
/// use cpmm_engine::domain::{AccountId, Amount, AssetId, BasisPoints, TokenPair};
///
/// let Ok(pair) = TokenPair::new(AssetId::new(1), AssetId::new(2)) else { return; };
/// let cfg = PoolConfig::new(
///     AccountId::from_bytes([7u8; 32]),
///     pair,
///     BasisPoints::new(30),
///     Amount::new(1_000),
/// );
/// assert!(cfg.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolConfig {
    creator: AccountId,
    token_pair: TokenPair,
    fee: BasisPoints,
    min_increment: Amount,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `fee` is 10 000 bp or more.
    pub fn new(
        creator: AccountId,
        token_pair: TokenPair,
        fee: BasisPoints,
        min_increment: Amount,
    ) -> Result<Self, AmmError> {
        let config = Self {
            creator,
            token_pair,
            fee,
            min_increment,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reassembles a config from parts already validated elsewhere.
    pub(crate) const fn from_parts(
        creator: AccountId,
        token_pair: TokenPair,
        fee: BasisPoints,
        min_increment: Amount,
    ) -> Self {
        Self {
            creator,
            token_pair,
            fee,
            min_increment,
        }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee is out of range.
    pub fn validate(&self) -> Result<(), AmmError> {
        self.fee.validate_fee()
    }

    /// Returns the account that created the pool.
    #[must_use]
    pub const fn creator(&self) -> AccountId {
        self.creator
    }

    /// Returns the reserve token pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn fee(&self) -> BasisPoints {
        self.fee
    }

    /// Returns the minimum per-token amount accepted by Supply.
    #[must_use]
    pub const fn min_increment(&self) -> Amount {
        self.min_increment
    }
}
