//! Value transfers into and out of the pool.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, AssetId};

/// A transfer record delivered by the ledger as part of an atomic group.
///
/// By the time the engine evaluates the group, the ledger has already
/// applied every transfer that precedes the control call, so the reserve
/// oracle reflects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transfer {
    /// Account debited.
    pub sender: AccountId,
    /// Account credited.
    pub receiver: AccountId,
    /// Asset moved.
    pub asset: AssetId,
    /// Amount moved.
    pub amount: Amount,
}

impl Transfer {
    /// Creates a transfer record.
    pub const fn new(sender: AccountId, receiver: AccountId, asset: AssetId, amount: Amount) -> Self {
        Self {
            sender,
            receiver,
            asset,
            amount,
        }
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} -> {}",
            self.amount, self.asset, self.sender, self.receiver
        )
    }
}

/// An outgoing transfer from the pool account, executed by the ledger only
/// if the whole group is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payout {
    /// Asset to send.
    pub asset: AssetId,
    /// Recipient.
    pub receiver: AccountId,
    /// Amount to send; zero only for opt-in acknowledgements.
    pub amount: Amount,
}

/// An instruction the engine asks the ledger to execute on accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Send `amount` of `asset` from the pool account to `receiver`.
    Pay(Payout),
    /// Issue the pool's claim token with `total` units, all held in reserve
    /// by `reserve`.
    IssueClaimToken {
        /// Identifier the issuance will receive.
        asset: AssetId,
        /// Total units issued.
        total: Amount,
        /// Account holding the unissued supply (the pool account).
        reserve: AccountId,
    },
}

impl Instruction {
    /// Shorthand for [`Instruction::Pay`].
    pub const fn pay(asset: AssetId, receiver: AccountId, amount: Amount) -> Self {
        Self::Pay(Payout {
            asset,
            receiver,
            amount,
        })
    }

    /// Returns the payout, if this instruction is one.
    #[must_use]
    pub const fn as_payout(&self) -> Option<&Payout> {
        match self {
            Self::Pay(p) => Some(p),
            Self::IssueClaimToken { .. } => None,
        }
    }
}
