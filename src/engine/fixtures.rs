//! Shared test fixtures: a hand-set balance table and canned pool records.

#![allow(clippy::panic)]

use std::collections::BTreeMap;

use super::Engine;
use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, AssetId, BasisPoints, TokenPair, Transfer};
use crate::state::PoolState;
use crate::traits::{AssetIssuer, FromConfig, ReserveOracle};

/// Balance table whose entries are the post-transfer view of one group.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeLedger {
    balances: BTreeMap<(AccountId, AssetId), Amount>,
    next_asset: Option<AssetId>,
}

impl FakeLedger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(&mut self, account: AccountId, asset: AssetId, amount: u64) {
        self.balances.insert((account, asset), Amount::new(amount));
    }

    /// Pool reserves as seen after the group's incoming transfers.
    pub(crate) fn with_reserves(a: u64, b: u64) -> Self {
        let mut l = Self::new();
        l.set(pool(), token_a(), a);
        l.set(pool(), token_b(), b);
        l
    }

    /// Makes the next issued asset reuse `asset`.
    pub(crate) fn issuing(mut self, asset: AssetId) -> Self {
        self.next_asset = Some(asset);
        self
    }
}

impl ReserveOracle for FakeLedger {
    fn balance_of(&self, account: &AccountId, asset: AssetId) -> Option<Amount> {
        self.balances.get(&(*account, asset)).copied()
    }
}

impl AssetIssuer for FakeLedger {
    fn next_asset_id(&self) -> AssetId {
        self.next_asset.unwrap_or_else(claim_token)
    }
}

pub(crate) fn engine(ledger: &FakeLedger) -> Engine<&FakeLedger> {
    Engine::new(pool(), ledger)
}

pub(crate) fn pool() -> AccountId {
    AccountId::from_bytes([0xAA; 32])
}

pub(crate) fn creator() -> AccountId {
    AccountId::from_bytes([0xC0; 32])
}

pub(crate) fn alice() -> AccountId {
    AccountId::from_bytes([1u8; 32])
}

pub(crate) fn bob() -> AccountId {
    AccountId::from_bytes([2u8; 32])
}

pub(crate) fn token_a() -> AssetId {
    AssetId::new(1)
}

pub(crate) fn token_b() -> AssetId {
    AssetId::new(2)
}

pub(crate) fn claim_token() -> AssetId {
    AssetId::new(100)
}

pub(crate) fn config(fee_bps: u16) -> PoolConfig {
    let Ok(pair) = TokenPair::new(token_a(), token_b()) else {
        panic!("valid pair");
    };
    let Ok(cfg) = PoolConfig::new(
        creator(),
        pair,
        BasisPoints::new(fee_bps),
        Amount::new(1_000),
    ) else {
        panic!("valid config");
    };
    cfg
}

pub(crate) fn created_state() -> PoolState {
    let Ok(s) = PoolState::from_config(&config(30)) else {
        panic!("valid state");
    };
    s
}

pub(crate) fn set_up_state(outstanding: u64) -> PoolState {
    created_state()
        .with_claim_token(claim_token())
        .with_outstanding(Amount::new(outstanding))
}

pub(crate) fn send(from: AccountId, asset: AssetId, amount: u64) -> Transfer {
    Transfer::new(from, pool(), asset, Amount::new(amount))
}
