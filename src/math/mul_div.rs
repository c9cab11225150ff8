//! Scaled multiply-then-divide.
//!
//! [`mul_div`] is the single ratio primitive of the engine.  Proportional
//! mints, proportional withdrawals, ratio matching on Supply and the swap
//! fee all go through it, so they all share one rounding policy.
//!
//! # Convention
//!
//! **Always floor.**  Every derived amount is biased toward the pool:
//!
//! | Quantity | Direction | Effect |
//! |----------|-----------|--------|
//! | Claim tokens minted | down | Supplier gets at most their share |
//! | Withdrawal payout | down | Withdrawer gets at most their share |
//! | Matched counter-amount | down | Pool keeps at most the implied amount |
//! | Fee-adjusted input | down | Fee is rounded up in effect |
//!
//! # Width
//!
//! The ledger program this engine models computes
//! `(x · y · S) / (z · S)` with `S = 10^13` so its wide-ratio opcode keeps
//! precision.  `S` cancels exactly, so with a `u128` intermediate for `u64`
//! operands the result is bit-identical to `floor(x · y / z)`.

use crate::domain::Amount;
use crate::error::AmmError;

/// Scale applied symmetrically to numerator and denominator by the ledger
/// program's wide-ratio form of [`mul_div`].
pub const SCALING_FACTOR: u128 = 10_000_000_000_000;

/// Computes `floor(x · y / z)` without intermediate overflow.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `z` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit an [`Amount`].
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::Amount;
/// use cpmm_engine::math::mul_div;
///
/// // 100_000 · 100_000_000 / 500_000
/// let matched = mul_div(Amount::new(100_000), Amount::new(100_000_000), Amount::new(500_000));
/// assert_eq!(matched, Ok(Amount::new(20_000_000)));
///
/// // 10 · 1 / 3 floors to 3
/// assert_eq!(mul_div(Amount::new(10), Amount::new(1), Amount::new(3)), Ok(Amount::new(3)));
/// ```
pub fn mul_div(x: Amount, y: Amount, z: Amount) -> Result<Amount, AmmError> {
    if z.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let quotient = x.widening_mul(&y) / z.wide();
    Amount::try_from_wide(quotient).ok_or(AmmError::Overflow("mul_div quotient exceeds u64"))
}
