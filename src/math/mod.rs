//! Arithmetic utilities for pool calculations.
//!
//! [`CheckedArithmetic`] for overflow-safe operations on [`Amount`](crate::domain::Amount),
//! [`mul_div`] for every reserve ratio, and [`geometric_mean`] for the
//! first deposit.  All of it is integer-only and floors.

mod checked;
mod mul_div;
mod sqrt;

pub use checked::CheckedArithmetic;
pub use mul_div::{mul_div, SCALING_FACTOR};
pub use sqrt::{geometric_mean, isqrt};
