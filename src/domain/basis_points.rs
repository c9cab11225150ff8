//! Basis-point fee rate.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::AmmError;

/// Basis-point denominator (10 000 = 100%).
pub const BPS_DENOMINATOR: u16 = 10_000;

/// A fee rate expressed in basis points (1 bp = 0.01%).
///
/// A pool fee must lie in `[0, 10_000)`: a 100% fee would leave nothing of
/// the swap input to price against.  [`BasisPoints::fee`] enforces the range
/// at construction; [`BasisPoints::new`] accepts any value and leaves the
/// check to [`validate_fee`](Self::validate_fee).
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::BasisPoints;
///
/// let bp = BasisPoints::fee(30).expect("valid fee");
/// assert_eq!(bp.get(), 30);
/// assert_eq!(bp.complement(), 9_970);
/// assert!(BasisPoints::fee(10_000).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u16);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// Creates a `BasisPoints` without range checks.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Creates a fee rate, rejecting values `>= 10_000`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `value >= 10_000`.
    pub const fn fee(value: u16) -> crate::error::Result<Self> {
        let bp = Self(value);
        match bp.validate_fee() {
            Ok(()) => Ok(bp),
            Err(e) => Err(e),
        }
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Checks that this value is usable as a pool fee.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the value is `>= 10_000`.
    pub const fn validate_fee(&self) -> crate::error::Result<()> {
        if self.0 >= BPS_DENOMINATOR {
            return Err(AmmError::InvalidFee("fee must be below 10000 basis points"));
        }
        Ok(())
    }

    /// Returns `10_000 - self`, the share of the input that is priced.
    ///
    /// Saturates at zero for out-of-range values.
    #[must_use]
    pub const fn complement(&self) -> u16 {
        BPS_DENOMINATOR.saturating_sub(self.0)
    }

    /// Returns the complement as an [`Amount`] numerator for
    /// [`mul_div`](crate::math::mul_div).
    pub const fn complement_amount(&self) -> Amount {
        Amount::new(self.complement() as u64)
    }

    /// Returns the denominator as an [`Amount`].
    pub const fn denominator() -> Amount {
        Amount::new(BPS_DENOMINATOR as u64)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
