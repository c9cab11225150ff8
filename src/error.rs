//! Unified error types for the pool engine.
//!
//! Every fallible operation in the crate returns [`AmmError`].  A returned
//! error always means the whole atomic group is rejected: the engine never
//! produces a partial transition.  [`AmmError::kind`] classifies each
//! variant into one of four [`RejectionKind`]s.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Amount;

/// Broad classification of why a group was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionKind {
    /// Operation invoked in the wrong lifecycle state.
    Precondition,
    /// Malformed or insufficient atomic group.
    Validation,
    /// A computed amount is zero, out of bounds, or not representable.
    Arithmetic,
    /// Caller is not allowed to perform the operation.
    Authorization,
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Precondition => write!(f, "precondition failure"),
            Self::Validation => write!(f, "validation failure"),
            Self::Arithmetic => write!(f, "arithmetic infeasibility"),
            Self::Authorization => write!(f, "authorization failure"),
        }
    }
}

/// Errors produced while evaluating an atomic group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    // -- precondition -------------------------------------------------------
    /// `create` was called while a pool record already exists.
    #[error("pool already exists")]
    PoolAlreadyExists,

    /// An operation other than `create` was called with no pool record.
    #[error("pool does not exist")]
    PoolNotFound,

    /// `setup` was called on a pool that already issued its claim token.
    #[error("pool is already set up")]
    AlreadySetUp,

    /// Supply, withdraw or swap was called before `setup`.
    #[error("pool is not set up")]
    NotSetUp,

    /// The pool has no outstanding claim tokens to trade or redeem against.
    #[error("pool has no liquidity")]
    NoLiquidity,

    /// `delete` was called while claim tokens are still outstanding.
    #[error("{0} claim tokens still outstanding")]
    OutstandingClaims(Amount),

    /// The reserve oracle has no holding for the pool account.
    #[error("reserve unavailable: {0}")]
    ReserveUnavailable(&'static str),

    // -- validation ---------------------------------------------------------
    /// The atomic group does not have the shape the operation expects.
    #[error("invalid group: {0}")]
    InvalidGroup(&'static str),

    /// An incoming transfer carries the wrong asset.
    #[error("unexpected asset: {0}")]
    UnexpectedAsset(&'static str),

    /// A supplied amount is smaller than the pool's minimum increment.
    #[error("amount {amount} is below the minimum increment {minimum}")]
    BelowMinIncrement {
        /// Amount received.
        amount: Amount,
        /// Configured minimum increment.
        minimum: Amount,
    },

    /// Fee is outside `[0, 10000)` basis points.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Token identifiers are invalid (e.g. identical reserve tokens).
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// The control call names an operation the engine does not know.
    #[error("unknown operation")]
    UnknownOperation,

    /// The persisted pool record is missing fields or has the wrong types.
    #[error("corrupt pool record: {0}")]
    CorruptState(&'static str),

    // -- arithmetic ---------------------------------------------------------
    /// A result does not fit the native amount width.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction would go below zero.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Supplied amounts cannot be matched to the pool's current ratio.
    #[error("supplied amounts do not match the pool ratio")]
    RatioMismatch,

    /// A proportional share rounds down to zero.
    #[error("share rounds to zero: {0}")]
    ZeroShare(&'static str),

    /// Swap output is zero or would drain the opposite reserve.
    #[error("swap output {output} not in (0, {reserve})")]
    OutputOutOfBounds {
        /// Computed output.
        output: Amount,
        /// Opposite reserve before the swap.
        reserve: Amount,
    },

    /// Redeeming more claim tokens than are outstanding.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// Minting would exceed the claim token's unissued reserve.
    #[error("claim token issuance exhausted")]
    IssuanceExhausted,

    // -- authorization ------------------------------------------------------
    /// Caller is not the pool creator.
    #[error("caller is not the pool creator")]
    NotCreator,
}

impl AmmError {
    /// Returns the rejection class of this error.
    #[must_use]
    pub const fn kind(&self) -> RejectionKind {
        match self {
            Self::PoolAlreadyExists
            | Self::PoolNotFound
            | Self::AlreadySetUp
            | Self::NotSetUp
            | Self::NoLiquidity
            | Self::OutstandingClaims(_)
            | Self::ReserveUnavailable(_) => RejectionKind::Precondition,
            Self::InvalidGroup(_)
            | Self::UnexpectedAsset(_)
            | Self::BelowMinIncrement { .. }
            | Self::InvalidFee(_)
            | Self::InvalidToken(_)
            | Self::UnknownOperation
            | Self::CorruptState(_) => RejectionKind::Validation,
            Self::Overflow(_)
            | Self::Underflow(_)
            | Self::DivisionByZero
            | Self::RatioMismatch
            | Self::ZeroShare(_)
            | Self::OutputOutOfBounds { .. }
            | Self::InsufficientLiquidity
            | Self::IssuanceExhausted => RejectionKind::Arithmetic,
            Self::NotCreator => RejectionKind::Authorization,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
