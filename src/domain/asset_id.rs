//! Ledger asset identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a fungible asset on the ledger.
///
/// The ledger allocates identifiers; the engine only compares them.  The
/// pool's reserve tokens and its claim token are all `AssetId`s.
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::AssetId;
///
/// let usdc = AssetId::new(31_566_704);
/// assert_eq!(usdc.get(), 31_566_704);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AssetId(u64);

impl AssetId {
    /// Wraps a raw ledger asset id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset#{}", self.0)
    }
}
