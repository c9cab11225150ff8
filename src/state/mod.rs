//! Pool state and its persisted form.
//!
//! [`PoolState`] is the in-memory record the engine transitions.  It maps
//! onto a [`KeyValueStore`] under the fixed [`StateKey`] schema, the shape
//! a ledger's global storage takes.

mod keys;
mod pool_state;
mod store;

pub use keys::{StateKey, StateValue};
pub use pool_state::{Phase, PoolState, CLAIM_TOKEN_TOTAL};
pub use store::{KeyValueStore, MemoryStore};
