//! Reference in-memory ledger.
//!
//! [`MemoryLedger`] plays the part of the chain the engine runs on: it
//! tracks asset holdings, hands out asset ids, stores the pool record in a
//! [`MemoryStore`], and settles atomic groups.  Settling a group means
//!
//! 1. executing the group's transfers,
//! 2. evaluating the engine against the stored record, with balances that
//!    already include those transfers,
//! 3. executing the emitted instructions from the pool account,
//! 4. persisting the new record.
//!
//! Any failure in any step restores the ledger to its state before the
//! group, so a group is applied completely or not at all.

mod error;

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

pub use error::LedgerError;

use crate::domain::{AccountId, Amount, AssetId, AtomicGroup, Instruction, Receipt};
use crate::engine::Engine;
use crate::error::AmmError;
use crate::state::{MemoryStore, PoolState};
use crate::traits::{AssetIssuer, ReserveOracle};

/// In-memory ledger hosting a single pool.
///
/// An account "holds" an asset once it has opted in; opting in creates a
/// zero balance.  Transfers require the receiver to hold the asset.
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::{AccountId, Amount};
/// use cpmm_engine::ledger::MemoryLedger;
///
/// let pool = AccountId::from_bytes([9u8; 32]);
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let bob = AccountId::from_bytes([2u8; 32]);
///
/// let mut ledger = MemoryLedger::new(pool);
/// let usd = ledger.create_asset(alice, Amount::new(1_000));
/// assert!(ledger.transfer(alice, bob, usd, Amount::new(10)).is_err()); // bob not opted in
///
/// let Ok(()) = ledger.opt_in(bob, usd) else { return; };
/// let Ok(()) = ledger.transfer(alice, bob, usd, Amount::new(10)) else { return; };
/// assert_eq!(ledger.balance(&bob, usd), Some(Amount::new(10)));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryLedger {
    pool_account: AccountId,
    holdings: BTreeMap<(AccountId, AssetId), Amount>,
    /// Total issuance per created asset.
    assets: BTreeMap<AssetId, Amount>,
    next_asset: u64,
    store: MemoryStore,
}

impl MemoryLedger {
    /// Creates an empty ledger whose pool lives at `pool_account`.
    #[must_use]
    pub fn new(pool_account: AccountId) -> Self {
        Self {
            pool_account,
            holdings: BTreeMap::new(),
            assets: BTreeMap::new(),
            next_asset: 1,
            store: MemoryStore::new(),
        }
    }

    /// Returns the pool account.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.pool_account
    }

    /// Returns the raw store holding the pool record.
    #[must_use]
    pub const fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Decodes the stored pool record.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::CorruptState`] if the record is malformed.
    pub fn pool_state(&self) -> Result<Option<PoolState>, AmmError> {
        PoolState::load(&self.store)
    }

    /// Returns `account`'s balance of `asset`, `None` if not opted in.
    #[must_use]
    pub fn balance(&self, account: &AccountId, asset: AssetId) -> Option<Amount> {
        self.holdings.get(&(*account, asset)).copied()
    }

    /// Total issuance of `asset`.
    #[must_use]
    pub fn total_supply(&self, asset: AssetId) -> Option<Amount> {
        self.assets.get(&asset).copied()
    }

    /// Creates an asset with `total` units, all held by `reserve`.
    pub fn create_asset(&mut self, reserve: AccountId, total: Amount) -> AssetId {
        let id = AssetId::new(self.next_asset);
        self.next_asset += 1;
        self.assets.insert(id, total);
        self.holdings.insert((reserve, id), total);
        debug!(asset = %id, total = %total, reserve = %reserve, "asset created");
        id
    }

    /// Opts `account` in to `asset`.  Opting in twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownAsset`] if the asset does not exist.
    pub fn opt_in(&mut self, account: AccountId, asset: AssetId) -> Result<(), LedgerError> {
        if !self.assets.contains_key(&asset) {
            return Err(LedgerError::UnknownAsset(asset));
        }
        self.holdings.entry((account, asset)).or_insert(Amount::ZERO);
        Ok(())
    }

    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// A zero-amount transfer to oneself is an opt-in.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnknownAsset`] for a nonexistent asset.
    /// - [`LedgerError::NotOptedIn`] if either side lacks the holding.
    /// - [`LedgerError::InsufficientBalance`] if `from` holds too little.
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        asset: AssetId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if from == to && amount.is_zero() {
            return self.opt_in(to, asset);
        }
        if !self.assets.contains_key(&asset) {
            return Err(LedgerError::UnknownAsset(asset));
        }
        let available = self.balance(&from, asset).ok_or(LedgerError::NotOptedIn {
            account: from,
            asset,
        })?;
        let received = self.balance(&to, asset).ok_or(LedgerError::NotOptedIn {
            account: to,
            asset,
        })?;
        let Some(debited) = available.checked_sub(&amount) else {
            return Err(LedgerError::InsufficientBalance {
                account: from,
                asset,
                needed: amount,
                available,
            });
        };
        self.holdings.insert((from, asset), debited);
        // Re-read after the debit so a self-transfer nets to zero.
        let received = if from == to { debited } else { received };
        let credited = received
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow { account: to, asset })?;
        self.holdings.insert((to, asset), credited);
        Ok(())
    }

    /// Settles `group` atomically.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Rejected`] if the engine rejects the group, or any
    /// transfer error.  The ledger is unchanged on error.
    pub fn submit(&mut self, group: &AtomicGroup) -> Result<Receipt, LedgerError> {
        let snapshot = self.clone();
        match self.settle(group) {
            Ok(receipt) => {
                info!(operation = group.operation().name(), receipt = %receipt, "group settled");
                Ok(receipt)
            }
            Err(e) => {
                *self = snapshot;
                warn!(operation = group.operation().name(), error = %e, "group rolled back");
                Err(e)
            }
        }
    }

    fn settle(&mut self, group: &AtomicGroup) -> Result<Receipt, LedgerError> {
        for t in group.transfers() {
            self.transfer(t.sender, t.receiver, t.asset, t.amount)?;
        }

        let state = PoolState::load(&self.store)?;
        let transition = Engine::new(self.pool_account, &*self).evaluate(state.as_ref(), group)?;

        for instruction in &transition.instructions {
            self.execute(instruction)?;
        }
        PoolState::store(transition.state.as_ref(), &mut self.store);
        Ok(transition.receipt)
    }

    fn execute(&mut self, instruction: &Instruction) -> Result<(), LedgerError> {
        match *instruction {
            Instruction::Pay(p) => self.transfer(self.pool_account, p.receiver, p.asset, p.amount),
            Instruction::IssueClaimToken {
                asset,
                total,
                reserve,
            } => {
                let actual = self.next_asset_id();
                if actual != asset {
                    return Err(LedgerError::AssetIdMismatch {
                        expected: asset,
                        actual,
                    });
                }
                self.create_asset(reserve, total);
                Ok(())
            }
        }
    }
}

impl ReserveOracle for MemoryLedger {
    fn balance_of(&self, account: &AccountId, asset: AssetId) -> Option<Amount> {
        self.balance(account, asset)
    }
}

impl AssetIssuer for MemoryLedger {
    fn next_asset_id(&self) -> AssetId {
        AssetId::new(self.next_asset)
    }
}
