//! Generic construction trait for building state from configuration.
//!
//! [`FromConfig`] provides a uniform interface for creating a value from
//! its declarative configuration.  The engine's `create` operation builds
//! the initial [`PoolState`](crate::state::PoolState) through it:
//!
//! ```text
//! Operation::Create(cfg) => PoolState::from_config(&cfg)
//! ```
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction.  A successfully constructed value is guaranteed to be in
//! a valid initial state:
//!
//! - Reserve tokens are distinct
//! - Fee is below 10 000 basis points
//!
//! Re-validating matters because configs may arrive through serde, which
//! bypasses the validating constructor.

use crate::error::AmmError;

/// Generic construction trait for building a value from a configuration.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for PoolState`
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// The configuration is taken by reference because the caller may
    /// reuse it (e.g., for logging).
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if the fee is out of range.
    /// - [`AmmError::InvalidToken`] if the token pair is invalid.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
