//! Allocation of new ledger asset identifiers.

use crate::domain::AssetId;

/// Source of the identifier the claim token will receive at setup.
///
/// The engine only learns the id; the issuance itself is emitted as an
/// [`Instruction::IssueClaimToken`](crate::domain::Instruction::IssueClaimToken)
/// and carried out by the ledger.  Implementations must return the id the
/// ledger will assign to the next asset it creates.
pub trait AssetIssuer {
    /// Returns the id the next created asset will receive.
    fn next_asset_id(&self) -> AssetId;
}

impl<T: AssetIssuer + ?Sized> AssetIssuer for &T {
    fn next_asset_id(&self) -> AssetId {
        (**self).next_asset_id()
    }
}
