//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic operations
//! that return [`Result<Self, AmmError>`](crate::error::AmmError) instead
//! of panicking on overflow or underflow.  Every error
//! carries a short context string naming the quantity that failed.
//!
//! # Examples
//!
//! ```
//! use cpmm_engine::domain::Amount;
//! use cpmm_engine::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(1_000);
//! let received = Amount::new(250);
//! let before = reserve.safe_sub(&received, "reserve before transfer");
//! assert_eq!(before, Ok(Amount::new(750)));
//! assert!(received.safe_sub(&reserve, "reserve before transfer").is_err());
//! ```

use crate::domain::Amount;
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] tagged with `what`.
    fn safe_add(&self, other: &Self, what: &'static str) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] tagged with `what`.
    fn safe_sub(&self, other: &Self, what: &'static str) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, what: &'static str) -> Result<Self, AmmError> {
        self.checked_add(other).ok_or(AmmError::Overflow(what))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, what: &'static str) -> Result<Self, AmmError> {
        self.checked_sub(other).ok_or(AmmError::Underflow(what))
    }
}
