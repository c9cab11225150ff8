//! Summary of an accepted transition.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, AssetId};

/// What an accepted group did, with the amounts the engine computed.
///
/// The authoritative effects are the emitted
/// [`Instruction`](super::Instruction)s and the new pool state; the receipt
/// restates them in operation terms for callers and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Receipt {
    /// Pool record created.
    Created,
    /// Claim token issued.
    SetUp {
        /// Identifier of the new claim token.
        claim_token: AssetId,
    },
    /// Liquidity added.
    Supplied {
        /// Token A kept by the pool.
        kept_a: Amount,
        /// Token B kept by the pool.
        kept_b: Amount,
        /// Claim tokens minted to the supplier.
        minted: Amount,
        /// Unmatched input returned to the supplier, if any.
        refund: Option<(AssetId, Amount)>,
    },
    /// Liquidity removed.
    Withdrawn {
        /// Claim tokens burned.
        burned: Amount,
        /// Token A paid out.
        out_a: Amount,
        /// Token B paid out.
        out_b: Amount,
    },
    /// Swap executed.
    Swapped {
        /// Asset received from the trader.
        asset_in: AssetId,
        /// Amount received.
        amount_in: Amount,
        /// Part of `amount_in` retained as fee.
        fee: Amount,
        /// Asset paid out.
        asset_out: AssetId,
        /// Amount paid out.
        amount_out: Amount,
    },
    /// Pool record deleted.
    Deleted,
}

impl Receipt {
    /// Returns the claim tokens minted (Supply) or burned (Withdraw).
    #[must_use]
    pub const fn claim_delta(&self) -> Option<Amount> {
        match self {
            Self::Supplied { minted, .. } => Some(*minted),
            Self::Withdrawn { burned, .. } => Some(*burned),
            _ => None,
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "Created"),
            Self::SetUp { claim_token } => write!(f, "SetUp(claim={claim_token})"),
            Self::Supplied {
                kept_a,
                kept_b,
                minted,
                ..
            } => write!(f, "Supplied(a={kept_a}, b={kept_b}, minted={minted})"),
            Self::Withdrawn {
                burned,
                out_a,
                out_b,
            } => write!(f, "Withdrawn(burned={burned}, a={out_a}, b={out_b})"),
            Self::Swapped {
                amount_in,
                fee,
                amount_out,
                ..
            } => write!(f, "Swapped(in={amount_in}, out={amount_out}, fee={fee})"),
            Self::Deleted => write!(f, "Deleted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_delta() {
        let s = Receipt::Supplied {
            kept_a: Amount::new(1),
            kept_b: Amount::new(2),
            minted: Amount::new(3),
            refund: None,
        };
        assert_eq!(s.claim_delta(), Some(Amount::new(3)));
        assert_eq!(Receipt::Deleted.claim_delta(), None);
    }

    #[test]
    fn display() {
        let w = Receipt::Withdrawn {
            burned: Amount::new(5),
            out_a: Amount::new(6),
            out_b: Amount::new(7),
        };
        assert_eq!(w.to_string(), "Withdrawn(burned=5, a=6, b=7)");
    }
}
