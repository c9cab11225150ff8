//! Raw token amount with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A raw token amount in the ledger's smallest unit.
///
/// Amounts are native-width (`u64`) integers, matching what the ledger can
/// hold in a single balance.  Products of two amounts are computed in
/// double width via [`widening_mul`](Self::widening_mul) and narrowed back
/// through [`Amount::try_from_wide`].
///
/// Addition and subtraction are checked: they return `None` on overflow
/// or underflow instead of panicking.  Division happens only in
/// [`mul_div`](crate::math::mul_div), which floors.
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// assert_eq!(a.widening_mul(&b), 20_000u128);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(u64);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a new `Amount` from a raw `u64` value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Narrows a double-width value back to an `Amount`.
    ///
    /// Returns `None` if `value` exceeds [`Amount::MAX`].
    #[must_use]
    pub const fn try_from_wide(value: u128) -> Option<Self> {
        if value > u64::MAX as u128 {
            None
        } else {
            Some(Self(value as u64))
        }
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns the value widened to `u128`.
    #[must_use]
    pub const fn wide(&self) -> u128 {
        self.0 as u128
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Full double-width product; never overflows.
    #[must_use]
    pub const fn widening_mul(&self, other: &Self) -> u128 {
        (self.0 as u128) * (other.0 as u128)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
