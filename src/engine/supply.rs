//! Supply: deposit both reserve tokens, receive claim tokens.
//!
//! The first deposit into an empty pool sets the price and mints the
//! geometric mean of the two amounts.  Later deposits are matched to the
//! current reserve ratio: the engine keeps all of one token, only the
//! matching amount of the other, refunds the excess and mints in
//! proportion to the kept amount.

use super::{Engine, Transition};
use crate::domain::{Amount, AtomicGroup, Instruction, Receipt, Side};
use crate::error::AmmError;
use crate::math::{geometric_mean, mul_div, CheckedArithmetic};
use crate::state::PoolState;
use crate::traits::{AssetIssuer, ReserveOracle};

/// One side of a deposit: amount received and the reserve before it.
#[derive(Clone, Copy)]
struct Leg {
    received: Amount,
    reserve: Amount,
}

/// A satisfiable ratio match.
struct Match {
    /// Amount of the counter token kept.
    counter_kept: Amount,
    minted: Amount,
}

/// Tries to keep all of `keep` and the ratio-implied part of `counter`.
///
/// The implied amount must be positive, covered by what was sent, and at
/// least the pool's minimum increment.
fn try_keep(
    keep: Leg,
    counter: Leg,
    outstanding: Amount,
    min_increment: Amount,
) -> Result<Option<Match>, AmmError> {
    let implied = mul_div(keep.received, counter.reserve, keep.reserve)?;
    if implied.is_zero() || implied < min_increment || counter.received < implied {
        return Ok(None);
    }
    let minted = mul_div(outstanding, keep.received, keep.reserve)?;
    Ok(Some(Match {
        counter_kept: implied,
        minted,
    }))
}

impl<L: ReserveOracle + AssetIssuer> Engine<L> {
    pub(super) fn supply(
        &self,
        state: &PoolState,
        group: &AtomicGroup,
    ) -> Result<Transition, AmmError> {
        let (claim_token, outstanding) = state.claims()?;
        let pair = state.token_pair();

        let [first, second] = group.incoming(&self.pool_account, 2)? else {
            return Err(AmmError::InvalidGroup("supply needs two transfers"));
        };
        let (in_a, in_b) = match (pair.side_of(first.asset), pair.side_of(second.asset)) {
            (Some(Side::A), Some(Side::B)) => (first, second),
            (Some(Side::B), Some(Side::A)) => (second, first),
            _ => {
                return Err(AmmError::UnexpectedAsset(
                    "supply needs one transfer of each reserve token",
                ))
            }
        };

        let minimum = state.min_increment();
        for amount in [in_a.amount, in_b.amount] {
            if amount < minimum {
                return Err(AmmError::BelowMinIncrement { amount, minimum });
            }
        }

        let a = Leg {
            received: in_a.amount,
            reserve: self.reserve_before(pair.token_a(), in_a.amount, "token a reserve")?,
        };
        let b = Leg {
            received: in_b.amount,
            reserve: self.reserve_before(pair.token_b(), in_b.amount, "token b reserve")?,
        };

        let (kept_a, kept_b, minted) = if a.reserve.is_zero() || b.reserve.is_zero() {
            (a.received, b.received, geometric_mean(a.received, b.received)?)
        } else if let Some(m) = try_keep(a, b, outstanding, minimum)? {
            (a.received, m.counter_kept, m.minted)
        } else if let Some(m) = try_keep(b, a, outstanding, minimum)? {
            (m.counter_kept, b.received, m.minted)
        } else {
            return Err(AmmError::RatioMismatch);
        };

        if minted.is_zero() {
            return Err(AmmError::ZeroShare("claim tokens minted"));
        }
        if minted > state.unissued_claims()? {
            return Err(AmmError::IssuanceExhausted);
        }
        let outstanding = outstanding.safe_add(&minted, "claim outstanding")?;

        let refund_a = a.received.safe_sub(&kept_a, "token a refund")?;
        let refund_b = b.received.safe_sub(&kept_b, "token b refund")?;
        let refund = if !refund_a.is_zero() {
            Some((pair.token_a(), refund_a))
        } else if !refund_b.is_zero() {
            Some((pair.token_b(), refund_b))
        } else {
            None
        };

        let supplier = group.sender();
        let mut instructions = Vec::with_capacity(2);
        if let Some((asset, amount)) = refund {
            instructions.push(Instruction::pay(asset, supplier, amount));
        }
        instructions.push(Instruction::pay(claim_token, supplier, minted));

        Ok(Transition::new(
            Some(state.with_outstanding(outstanding)),
            instructions,
            Receipt::Supplied {
                kept_a,
                kept_b,
                minted,
                refund,
            },
        ))
    }
}
