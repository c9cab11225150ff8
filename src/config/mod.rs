//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint a pool is created from.  It
//! travels inside [`Operation::Create`](crate::domain::Operation::Create)
//! and becomes the immutable half of [`PoolState`](crate::state::PoolState).

mod pool_config;

pub use pool_config::PoolConfig;
