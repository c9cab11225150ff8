//! Atomic groups: the unit of work the ledger hands to the engine.
//!
//! A group is a list of [`Transfer`]s followed by exactly one
//! [`ControlCall`].  Instead of reading transfers at fixed offsets before
//! the call, the engine asks the group for the incoming transfers it
//! expects and validates them by field.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{AccountId, Transfer};
use crate::config::PoolConfig;
use crate::error::AmmError;

/// The operation a control call requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Create the pool record with the given parameters.
    Create(PoolConfig),
    /// Issue the claim token and opt the pool into both reserve assets.
    Setup,
    /// Add paired liquidity.
    Supply,
    /// Redeem claim tokens for a share of both reserves.
    Withdraw,
    /// Trade one reserve asset for the other.
    Swap,
    /// Remove the pool record.
    Delete,
}

impl Operation {
    /// Returns the operation's wire name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Setup => "setup",
            Self::Supply => "supply",
            Self::Withdraw => "withdraw",
            Self::Swap => "swap",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = AmmError;

    /// Parses a parameterless operation name.
    ///
    /// `create` carries pool parameters and cannot be parsed from a bare
    /// name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "setup" => Ok(Self::Setup),
            "supply" => Ok(Self::Supply),
            "withdraw" => Ok(Self::Withdraw),
            "swap" => Ok(Self::Swap),
            "delete" => Ok(Self::Delete),
            "create" => Err(AmmError::InvalidGroup("create requires pool parameters")),
            _ => Err(AmmError::UnknownOperation),
        }
    }
}

/// The single control call of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlCall {
    /// Requested operation.
    pub operation: Operation,
    /// Identity that signed the call.
    pub sender: AccountId,
}

/// An ordered set of transfers plus one control call, executed together or
/// not at all.
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::{AccountId, Amount, AssetId, AtomicGroup, Operation, Transfer};
///
/// let trader = AccountId::from_bytes([1u8; 32]);
/// let pool = AccountId::from_bytes([9u8; 32]);
/// let group = AtomicGroup::new(
///     vec![Transfer::new(trader, pool, AssetId::new(1), Amount::new(1_000))],
///     Operation::Swap,
///     trader,
/// );
/// let incoming = group.incoming(&pool, 1).expect("one valid transfer");
/// assert_eq!(incoming.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomicGroup {
    transfers: Vec<Transfer>,
    call: ControlCall,
}

impl AtomicGroup {
    /// Builds a group from its transfers and the control call.
    #[must_use]
    pub fn new(transfers: Vec<Transfer>, operation: Operation, sender: AccountId) -> Self {
        Self {
            transfers,
            call: ControlCall { operation, sender },
        }
    }

    /// Builds a group that carries only a control call.
    #[must_use]
    pub fn call_only(operation: Operation, sender: AccountId) -> Self {
        Self::new(Vec::new(), operation, sender)
    }

    /// Returns the transfers preceding the call.
    #[must_use]
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Returns the control call.
    #[must_use]
    pub const fn call(&self) -> &ControlCall {
        &self.call
    }

    /// Returns the requested operation.
    #[must_use]
    pub const fn operation(&self) -> &Operation {
        &self.call.operation
    }

    /// Returns the call's sender.
    #[must_use]
    pub const fn sender(&self) -> AccountId {
        self.call.sender
    }

    /// Returns the group's transfers after checking that there are exactly
    /// `expected` of them and that each one is a positive payment from the
    /// call sender to `pool`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidGroup`] on a count mismatch, a foreign
    /// sender, a receiver other than `pool`, or a zero amount.
    pub fn incoming(&self, pool: &AccountId, expected: usize) -> Result<&[Transfer], AmmError> {
        if self.transfers.len() != expected {
            return Err(AmmError::InvalidGroup(
                "unexpected number of transfers for operation",
            ));
        }
        for t in &self.transfers {
            if t.sender != self.call.sender {
                return Err(AmmError::InvalidGroup("transfer not sent by the caller"));
            }
            if t.receiver != *pool {
                return Err(AmmError::InvalidGroup("transfer not received by the pool"));
            }
            if t.amount.is_zero() {
                return Err(AmmError::InvalidGroup("transfer amount must be positive"));
            }
        }
        Ok(&self.transfers)
    }
}
