//! The pool's two reserve assets.

use serde::{Deserialize, Serialize};

use super::AssetId;
use crate::error::AmmError;

/// Which side of the pair an asset sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Token A.
    A,
    /// Token B.
    B,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// An ordered pair of distinct reserve assets.
///
/// Unlike a canonical (sorted) pair, the order is significant: token A is
/// the one the creator named first, and Supply expects its token-A transfer
/// to carry `token_a`.
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::{AssetId, Side, TokenPair};
///
/// let pair = TokenPair::new(AssetId::new(20), AssetId::new(10)).expect("distinct");
/// assert_eq!(pair.token_a(), AssetId::new(20));
/// assert_eq!(pair.side_of(AssetId::new(10)), Some(Side::B));
/// assert!(TokenPair::new(AssetId::new(1), AssetId::new(1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTokenPair")]
pub struct TokenPair {
    token_a: AssetId,
    token_b: AssetId,
}

impl TokenPair {
    /// Creates a new pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both ids are equal.
    pub fn new(token_a: AssetId, token_b: AssetId) -> Result<Self, AmmError> {
        if token_a == token_b {
            return Err(AmmError::InvalidToken(
                "token pair requires two distinct assets",
            ));
        }
        Ok(Self { token_a, token_b })
    }

    /// Returns token A.
    #[must_use]
    pub const fn token_a(&self) -> AssetId {
        self.token_a
    }

    /// Returns token B.
    #[must_use]
    pub const fn token_b(&self) -> AssetId {
        self.token_b
    }

    /// Returns the asset on `side`.
    #[must_use]
    pub const fn get(&self, side: Side) -> AssetId {
        match side {
            Side::A => self.token_a,
            Side::B => self.token_b,
        }
    }

    /// Returns which side `asset` is on, or `None` if it is not in the pair.
    #[must_use]
    pub fn side_of(&self, asset: AssetId) -> Option<Side> {
        if asset == self.token_a {
            Some(Side::A)
        } else if asset == self.token_b {
            Some(Side::B)
        } else {
            None
        }
    }

    /// Returns `true` if `asset` is one of the two reserve assets.
    #[must_use]
    pub fn contains(&self, asset: AssetId) -> bool {
        self.side_of(asset).is_some()
    }
}

#[derive(Deserialize)]
struct RawTokenPair {
    token_a: AssetId,
    token_b: AssetId,
}

impl TryFrom<RawTokenPair> for TokenPair {
    type Error = AmmError;

    fn try_from(raw: RawTokenPair) -> Result<Self, Self::Error> {
        Self::new(raw.token_a, raw.token_b)
    }
}
