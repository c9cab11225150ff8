//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use cpmm_engine::prelude::*;
//! ```

pub use crate::config::PoolConfig;
pub use crate::domain::{
    AccountId, Amount, AssetId, AtomicGroup, BasisPoints, Instruction, Operation, Receipt,
    TokenPair, Transfer,
};
pub use crate::engine::{Engine, Transition};
pub use crate::error::{AmmError, RejectionKind};
pub use crate::ledger::{LedgerError, MemoryLedger};
pub use crate::math::CheckedArithmetic;
pub use crate::state::{Phase, PoolState};
pub use crate::traits::{AssetIssuer, FromConfig, ReserveOracle};
