//! The persisted pool record and its lifecycle phase.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{KeyValueStore, StateKey, StateValue};
use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, AssetId, BasisPoints, TokenPair};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::FromConfig;

/// Total issuance of every pool's claim token, held in reserve by the pool
/// account at setup.
pub const CLAIM_TOKEN_TOTAL: Amount = Amount::new(10_000_000_000_000);

/// Lifecycle phase derived from a [`PoolState`].
///
/// `Deleted` has no variant: a deleted pool has no record at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Created, claim token not yet issued.
    Created,
    /// Set up with zero claim tokens outstanding, freshly or after the last
    /// withdrawal.
    Empty,
    /// Claim tokens are outstanding.
    Active,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Empty => write!(f, "empty"),
            Self::Active => write!(f, "active"),
        }
    }
}

/// The single pool record.
///
/// Immutable creation parameters plus the two fields setup introduces:
/// the claim token id and the outstanding claim supply.  Both are `None`
/// until setup and `Some` afterwards.
///
/// Values are only ever replaced wholesale by the engine: every accepted
/// transition returns a new `PoolState` and a rejected one returns nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolState {
    creator: AccountId,
    token_pair: TokenPair,
    fee: BasisPoints,
    min_increment: Amount,
    claim_token: Option<AssetId>,
    claim_outstanding: Option<Amount>,
}

impl FromConfig<PoolConfig> for PoolState {
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            creator: config.creator(),
            token_pair: *config.token_pair(),
            fee: config.fee(),
            min_increment: config.min_increment(),
            claim_token: None,
            claim_outstanding: None,
        })
    }
}

impl PoolState {
    /// Returns the creation parameters.
    #[must_use]
    pub const fn config(&self) -> PoolConfig {
        PoolConfig::from_parts(self.creator, self.token_pair, self.fee, self.min_increment)
    }

    /// Returns the creator.
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

    /// Returns the minimum supply increment.
    #[must_use]
    pub const fn min_increment(&self) -> Amount {
        self.min_increment
    }

    /// Returns the claim token, if set up.
    #[must_use]
    pub const fn claim_token(&self) -> Option<AssetId> {
        self.claim_token
    }

    /// Returns the outstanding claim supply, if set up.
    #[must_use]
    pub const fn claim_outstanding(&self) -> Option<Amount> {
        self.claim_outstanding
    }

    /// Outstanding claim supply, reading "not set up" as zero.
    #[must_use]
    pub fn outstanding(&self) -> Amount {
        self.claim_outstanding.unwrap_or(Amount::ZERO)
    }

    /// Returns `true` once setup has run.
    #[must_use]
    pub const fn is_set_up(&self) -> bool {
        self.claim_token.is_some() || self.claim_outstanding.is_some()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.claim_outstanding {
            None => Phase::Created,
            Some(o) if o.is_zero() => Phase::Empty,
            Some(_) => Phase::Active,
        }
    }

    /// Claim token and outstanding supply of a set-up pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NotSetUp`] before setup.
    pub fn claims(&self) -> Result<(AssetId, Amount), AmmError> {
        match (self.claim_token, self.claim_outstanding) {
            (Some(token), Some(outstanding)) => Ok((token, outstanding)),
            _ => Err(AmmError::NotSetUp),
        }
    }

    /// Claim tokens still held in reserve by the pool account.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the record claims more outstanding
    /// than was ever issued.
    pub fn unissued_claims(&self) -> Result<Amount, AmmError> {
        CLAIM_TOKEN_TOTAL.safe_sub(&self.outstanding(), "unissued claim tokens")
    }

    /// Returns this record set up with `claim_token` and zero outstanding.
    #[must_use]
    pub const fn with_claim_token(mut self, claim_token: AssetId) -> Self {
        self.claim_token = Some(claim_token);
        self.claim_outstanding = Some(Amount::ZERO);
        self
    }

    /// Returns this record with a new outstanding claim supply.
    #[must_use]
    pub const fn with_outstanding(mut self, outstanding: Amount) -> Self {
        self.claim_outstanding = Some(outstanding);
        self
    }

    // -- persistence --------------------------------------------------------

    /// Reads the record from `store`.
    ///
    /// Returns `Ok(None)` when no key is present.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::CorruptState`] if a required key is missing, a
    /// value has the wrong type, or the decoded parameters are invalid.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Self>, AmmError> {
        if StateKey::ALL.iter().all(|k| !store.contains(*k)) {
            return Ok(None);
        }

        let creator = required(store, StateKey::Creator)?.as_bytes("creator")?;
        let creator = AccountId::from_slice(creator)
            .ok_or(AmmError::CorruptState("creator is not 32 bytes"))?;
        let token_a = AssetId::new(required(store, StateKey::TokenA)?.as_uint("token a")?);
        let token_b = AssetId::new(required(store, StateKey::TokenB)?.as_uint("token b")?);
        let token_pair = TokenPair::new(token_a, token_b)
            .map_err(|_| AmmError::CorruptState("reserve tokens are identical"))?;
        let fee = required(store, StateKey::FeeBps)?.as_uint("fee")?;
        let fee = u16::try_from(fee)
            .ok()
            .and_then(|bps| BasisPoints::fee(bps).ok())
            .ok_or(AmmError::CorruptState("fee out of range"))?;
        let min_increment =
            Amount::new(required(store, StateKey::MinIncrement)?.as_uint("min increment")?);

        let claim_token = store
            .get(StateKey::ClaimToken)
            .map(|v| v.as_uint("claim token").map(AssetId::new))
            .transpose()?;
        let claim_outstanding = store
            .get(StateKey::ClaimOutstanding)
            .map(|v| v.as_uint("claim outstanding").map(Amount::new))
            .transpose()?;
        if claim_token.is_some() != claim_outstanding.is_some() {
            return Err(AmmError::CorruptState(
                "claim token and outstanding supply must be set together",
            ));
        }

        Ok(Some(Self {
            creator,
            token_pair,
            fee,
            min_increment,
            claim_token,
            claim_outstanding,
        }))
    }

    /// Writes every field to `store`, removing keys for absent fields.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        store.put(StateKey::Creator, self.creator.into());
        store.put(StateKey::TokenA, self.token_pair.token_a().into());
        store.put(StateKey::TokenB, self.token_pair.token_b().into());
        store.put(StateKey::FeeBps, StateValue::Uint(u64::from(self.fee.get())));
        store.put(StateKey::MinIncrement, self.min_increment.into());
        match self.claim_token {
            Some(t) => store.put(StateKey::ClaimToken, t.into()),
            None => {
                store.remove(StateKey::ClaimToken);
            }
        }
        match self.claim_outstanding {
            Some(o) => store.put(StateKey::ClaimOutstanding, o.into()),
            None => {
                store.remove(StateKey::ClaimOutstanding);
            }
        }
    }

    /// Removes every pool key from `store`.
    pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) {
        for key in StateKey::ALL {
            store.remove(key);
        }
    }

    /// Persists `state`, or clears the record when it is `None`.
    pub fn store<S: KeyValueStore + ?Sized>(state: Option<&Self>, store: &mut S) {
        match state {
            Some(s) => s.save(store),
            None => Self::clear(store),
        }
    }
}

fn required<S: KeyValueStore + ?Sized>(
    store: &S,
    key: StateKey,
) -> Result<&StateValue, AmmError> {
    store
        .get(key)
        .ok_or(AmmError::CorruptState("required pool key missing"))
}
