//! Core trait abstractions at the engine's seams.
//!
//! The engine reads the world through [`ReserveOracle`] and
//! [`AssetIssuer`], both implemented by the ledger that drives it, and
//! builds initial state through [`FromConfig`].

mod asset_issuer;
mod from_config;
mod reserve_oracle;

pub use asset_issuer::AssetIssuer;
pub use from_config::FromConfig;
pub use reserve_oracle::ReserveOracle;
