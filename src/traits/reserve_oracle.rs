//! Read-only view of ledger balances.
//!
//! [`ReserveOracle`] is how the engine observes the pool's reserves.  It
//! is queried after the group's incoming transfers have been applied, so
//! the balance it reports for a received asset already includes the
//! amount just received.  The engine infers the pre-transfer reserve by
//! subtracting that amount back out:
//!
//! ```text
//! reserve_before = balance_of(pool, asset) − incoming.amount
//! ```
//!
//! This relies on the ledger serializing groups: nothing else may touch
//! the pool's balances between the transfer and the read.

use crate::domain::{AccountId, Amount, AssetId};

/// Balance lookup by account and asset.
///
/// # Implementors
///
/// - [`MemoryLedger`](crate::ledger::MemoryLedger)
pub trait ReserveOracle {
    /// Returns `account`'s holding of `asset`.
    ///
    /// `None` means the account does not hold the asset at all (not opted
    /// in), which is distinct from a zero balance.
    fn balance_of(&self, account: &AccountId, asset: AssetId) -> Option<Amount>;
}

impl<T: ReserveOracle + ?Sized> ReserveOracle for &T {
    fn balance_of(&self, account: &AccountId, asset: AssetId) -> Option<Amount> {
        (**self).balance_of(account, asset)
    }
}
