//! The transition engine.
//!
//! [`Engine::evaluate`] is a pure function from the current pool record
//! and one [`AtomicGroup`] to either a [`Transition`] or an [`AmmError`]:
//!
//! ```text
//! (Option<&PoolState>, &AtomicGroup) ──evaluate──▶ Ok(Transition { state, instructions, receipt })
//!                                                 └▶ Err(AmmError)   // nothing changes
//! ```
//!
//! The engine never writes reserves.  It observes them through a
//! [`ReserveOracle`] and describes every movement of value as an
//! [`Instruction`] for the ledger to execute.  Every check runs before any
//! result is built, so a rejected group has no effects at all.
//!
//! # Operations
//!
//! | Operation | Incoming transfers | Effect |
//! |-----------|--------------------|--------|
//! | `create`   | none | new record, not set up |
//! | `setup`    | none | issue claim token, opt in to both reserves |
//! | `supply`   | token A and token B | mint claim tokens, refund excess |
//! | `withdraw` | claim token | pay out both reserves pro rata |
//! | `swap`     | token A or token B | pay out the other token |
//! | `delete`   | none | record removed |

mod lifecycle;
mod supply;
mod swap;
mod withdraw;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod proptest_properties;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::{AccountId, Amount, AssetId, AtomicGroup, Instruction, Operation, Receipt};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::state::PoolState;
use crate::traits::{AssetIssuer, ReserveOracle};

/// Outcome of an accepted group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The new pool record; `None` after `delete`.
    pub state: Option<PoolState>,
    /// Outgoing instructions, in execution order.
    pub instructions: Vec<Instruction>,
    /// Summary of what happened.
    pub receipt: Receipt,
}

impl Transition {
    fn new(state: Option<PoolState>, instructions: Vec<Instruction>, receipt: Receipt) -> Self {
        Self {
            state,
            instructions,
            receipt,
        }
    }
}

/// State-transition engine for a single pool account.
///
/// `L` is the ledger view: balances via [`ReserveOracle`] and the next
/// asset id via [`AssetIssuer`].  Both traits are implemented for
/// references, so `Engine<&MyLedger>` works without cloning.
///
/// # Examples
///
/// ```
/// use cpmm_engine::prelude::*;
///
/// let pool = AccountId::from_bytes([9u8; 32]);
/// let ledger = MemoryLedger::new(pool);
/// let engine = Engine::new(pool, &ledger);
///
/// let Ok(pair) = TokenPair::new(AssetId::new(1), AssetId::new(2)) else { return; };
/// let creator = AccountId::from_bytes([1u8; 32]);
/// let Ok(cfg) = PoolConfig::new(creator, pair, BasisPoints::new(30), Amount::new(1)) else { return; };
///
/// let group = AtomicGroup::call_only(Operation::Create(cfg), creator);
/// let Ok(t) = engine.evaluate(None, &group) else { return; };
/// assert_eq!(t.receipt, Receipt::Created);
/// assert!(t.instructions.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Engine<L> {
    pool_account: AccountId,
    ledger: L,
}

impl<L: ReserveOracle + AssetIssuer> Engine<L> {
    /// Creates an engine for the pool held by `pool_account`.
    pub const fn new(pool_account: AccountId, ledger: L) -> Self {
        Self {
            pool_account,
            ledger,
        }
    }

    /// Returns the pool's ledger account.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.pool_account
    }

    /// Evaluates `group` against `state`.
    ///
    /// `state` is `None` when no pool exists; only `create` is valid then.
    ///
    /// # Errors
    ///
    /// Any [`AmmError`]; the group is rejected as a whole and the caller
    /// must persist nothing.
    pub fn evaluate(
        &self,
        state: Option<&PoolState>,
        group: &AtomicGroup,
    ) -> Result<Transition, AmmError> {
        let operation = group.operation().name();
        debug!(
            operation,
            caller = %group.sender(),
            transfers = group.transfers().len(),
            "evaluating group"
        );

        let result = match (group.operation(), state) {
            (Operation::Create(config), None) => self.create(config, group),
            (Operation::Create(_), Some(_)) => Err(AmmError::PoolAlreadyExists),
            (_, None) => Err(AmmError::PoolNotFound),
            (Operation::Setup, Some(s)) => self.setup(s, group),
            (Operation::Supply, Some(s)) => self.supply(s, group),
            (Operation::Withdraw, Some(s)) => self.withdraw(s, group),
            (Operation::Swap, Some(s)) => self.swap(s, group),
            (Operation::Delete, Some(s)) => self.delete(s, group),
        };

        match &result {
            Ok(t) => info!(operation, receipt = %t.receipt, "group accepted"),
            Err(e) => warn!(operation, error = %e, kind = %e.kind(), "group rejected"),
        }
        result
    }

    /// Current pool holding of `asset`.
    fn reserve(&self, asset: AssetId, what: &'static str) -> Result<Amount, AmmError> {
        self.ledger
            .balance_of(&self.pool_account, asset)
            .ok_or(AmmError::ReserveUnavailable(what))
    }

    /// Pool holding of `asset` before `received` arrived in this group.
    fn reserve_before(
        &self,
        asset: AssetId,
        received: Amount,
        what: &'static str,
    ) -> Result<Amount, AmmError> {
        self.reserve(asset, what)?.safe_sub(&received, what)
    }
}
