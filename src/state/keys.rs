//! Persisted key schema of the pool record.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::AmmError;

/// Global keys under which pool fields are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StateKey {
    /// Creator identity, bytes.
    Creator,
    /// Reserve token A, uint.
    TokenA,
    /// Reserve token B, uint.
    TokenB,
    /// Claim token id, uint; absent until setup.
    ClaimToken,
    /// Fee in basis points, uint.
    FeeBps,
    /// Minimum supply increment, uint.
    MinIncrement,
    /// Outstanding claim supply, uint; absent until setup.
    ClaimOutstanding,
}

impl StateKey {
    /// Every key, in persistence order.
    pub const ALL: [Self; 7] = [
        Self::Creator,
        Self::TokenA,
        Self::TokenB,
        Self::ClaimToken,
        Self::FeeBps,
        Self::MinIncrement,
        Self::ClaimOutstanding,
    ];

    /// Ledger-side name of the key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Creator => "creator_key",
            Self::TokenA => "token_a_key",
            Self::TokenB => "token_b_key",
            Self::ClaimToken => "pool_token_key",
            Self::FeeBps => "fee_bps_key",
            Self::MinIncrement => "min_increment_key",
            Self::ClaimOutstanding => "pool_tokens_outstanding_key",
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value in the ledger's global store: a byte string or a 64-bit uint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateValue {
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// Unsigned integer.
    Uint(u64),
}

impl StateValue {
    pub(crate) fn as_uint(&self, what: &'static str) -> Result<u64, AmmError> {
        match self {
            Self::Uint(v) => Ok(*v),
            Self::Bytes(_) => Err(AmmError::CorruptState(what)),
        }
    }

    pub(crate) fn as_bytes(&self, what: &'static str) -> Result<&[u8], AmmError> {
        match self {
            Self::Bytes(b) => Ok(b),
            Self::Uint(_) => Err(AmmError::CorruptState(what)),
        }
    }
}

impl From<Amount> for StateValue {
    fn from(value: Amount) -> Self {
        Self::Uint(value.get())
    }
}

impl From<AssetId> for StateValue {
    fn from(value: AssetId) -> Self {
        Self::Uint(value.get())
    }
}

impl From<AccountId> for StateValue {
    fn from(value: AccountId) -> Self {
        Self::Bytes(value.as_bytes().to_vec())
    }
}
