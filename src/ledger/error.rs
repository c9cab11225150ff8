//! Errors raised by the in-memory ledger.

use thiserror::Error;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::AmmError;

/// A group the ledger could not settle.
///
/// Either the engine rejected it ([`LedgerError::Rejected`]) or one of its
/// transfers could not be executed.  In both cases every balance and the
/// pool record are left exactly as they were before the group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The engine rejected the group.
    #[error("rejected by pool: {0}")]
    Rejected(#[from] AmmError),

    /// The sender holds less than the transfer amount.
    #[error("{account} holds {available} of {asset}, needs {needed}")]
    InsufficientBalance {
        /// Sending account.
        account: AccountId,
        /// Asset transferred.
        asset: AssetId,
        /// Transfer amount.
        needed: Amount,
        /// Sender's balance.
        available: Amount,
    },

    /// The account has not opted in to the asset.
    #[error("{account} is not opted in to {asset}")]
    NotOptedIn {
        /// Account lacking the holding.
        account: AccountId,
        /// Asset concerned.
        asset: AssetId,
    },

    /// No such asset exists on the ledger.
    #[error("unknown asset {0}")]
    UnknownAsset(AssetId),

    /// A claim-token issuance would not receive the id the engine recorded.
    #[error("issuance expected id {expected}, ledger would assign {actual}")]
    AssetIdMismatch {
        /// Id the engine recorded.
        expected: AssetId,
        /// Id the ledger allocates next.
        actual: AssetId,
    },

    /// A receiver's balance would exceed the amount width.
    #[error("balance overflow for {account} in {asset}")]
    BalanceOverflow {
        /// Receiving account.
        account: AccountId,
        /// Asset concerned.
        asset: AssetId,
    },
}

impl LedgerError {
    /// Returns the engine error if the pool rejected the group.
    #[must_use]
    pub const fn as_rejection(&self) -> Option<&AmmError> {
        match self {
            Self::Rejected(e) => Some(e),
            _ => None,
        }
    }
}
