//! Fundamental domain value types used throughout the engine.
//!
//! Amounts, fee rates, ledger identities, transfer records, atomic groups
//! and receipts.  Newtypes with validated constructors enforce invariants
//! (distinct reserve assets, fee below 100%) at the type level.

mod account_id;
mod amount;
mod asset_id;
mod basis_points;
mod group;
mod receipt;
mod token_pair;
mod transfer;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use group::{AtomicGroup, ControlCall, Operation};
pub use receipt::Receipt;
pub use token_pair::{Side, TokenPair};
pub use transfer::{Instruction, Payout, Transfer};
