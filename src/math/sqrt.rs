//! Integer square root for first-liquidity minting.

use crate::domain::Amount;
use crate::error::AmmError;

/// `floor(sqrt(n))` via Newton's method.
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// `floor(sqrt(a · b))`, the geometric mean of two amounts.
///
/// The product of two `u64` values is below `2^128`, so its square root is
/// below `2^64` and always fits an [`Amount`].
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] only if that bound were violated.
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::Amount;
/// use cpmm_engine::math::geometric_mean;
///
/// let minted = geometric_mean(Amount::new(500_000), Amount::new(100_000_000));
/// assert_eq!(minted, Ok(Amount::new(7_071_067)));
/// ```
pub fn geometric_mean(a: Amount, b: Amount) -> Result<Amount, AmmError> {
    Amount::try_from_wide(isqrt(a.widening_mul(&b)))
        .ok_or(AmmError::Overflow("geometric mean exceeds u64"))
}
