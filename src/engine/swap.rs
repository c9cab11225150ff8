//! Swap: send one reserve token, receive the other.
//!
//! The fee is taken off the input before pricing:
//!
//! ```text
//! after_fee = floor(amount_in · (10000 − fee_bps) / 10000)
//! output    = other − floor(given · other / (given + after_fee))
//! ```
//!
//! Both floors favour the pool, so `given · other` never decreases.

use super::{Engine, Transition};
use crate::domain::{Amount, AtomicGroup, BasisPoints, Instruction, Receipt};
use crate::error::AmmError;
use crate::math::{mul_div, CheckedArithmetic};
use crate::state::PoolState;
use crate::traits::{AssetIssuer, ReserveOracle};

/// Input after the fee and the resulting output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Quote {
    pub(crate) after_fee: Amount,
    pub(crate) output: Amount,
}

/// Prices `amount_in` against reserves `given` (the sent token, before the
/// transfer) and `other`.
pub(crate) fn quote(
    amount_in: Amount,
    given: Amount,
    other: Amount,
    fee: BasisPoints,
) -> Result<Quote, AmmError> {
    let after_fee = mul_div(amount_in, fee.complement_amount(), BasisPoints::denominator())?;
    let grown = given.safe_add(&after_fee, "given reserve after input")?;
    let remaining = mul_div(given, other, grown)?;
    let output = other.safe_sub(&remaining, "swap output")?;
    Ok(Quote { after_fee, output })
}

impl<L: ReserveOracle + AssetIssuer> Engine<L> {
    pub(super) fn swap(
        &self,
        state: &PoolState,
        group: &AtomicGroup,
    ) -> Result<Transition, AmmError> {
        let (_, outstanding) = state.claims()?;
        if outstanding.is_zero() {
            return Err(AmmError::NoLiquidity);
        }

        let [sent] = group.incoming(&self.pool_account, 1)? else {
            return Err(AmmError::InvalidGroup("swap needs one transfer"));
        };
        let pair = state.token_pair();
        let side = pair
            .side_of(sent.asset)
            .ok_or(AmmError::UnexpectedAsset("swap takes token a or token b"))?;
        let asset_in = pair.get(side);
        let asset_out = pair.get(side.opposite());

        let given = self.reserve_before(asset_in, sent.amount, "given reserve")?;
        let other = self.reserve(asset_out, "other reserve")?;
        let Quote { after_fee, output } = quote(sent.amount, given, other, state.fee())?;
        if output.is_zero() || output >= other {
            return Err(AmmError::OutputOutOfBounds {
                output,
                reserve: other,
            });
        }
        let fee = sent.amount.safe_sub(&after_fee, "swap fee")?;

        Ok(Transition::new(
            Some(*state),
            vec![Instruction::pay(asset_out, group.sender(), output)],
            Receipt::Swapped {
                asset_in,
                amount_in: sent.amount,
                fee,
                asset_out,
                amount_out: output,
            },
        ))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::domain::{AssetId, Operation};

    const OUTSTANDING: u64 = 7_071_067;

    fn swap_group(asset: AssetId, amount: u64) -> AtomicGroup {
        AtomicGroup::new(vec![send(alice(), asset, amount)], Operation::Swap, alice())
    }

    // -- quote --------------------------------------------------------------

    #[test]
    fn quote_reference_values() {
        let Ok(q) = quote(
            Amount::new(1_000),
            Amount::new(500_000),
            Amount::new(100_000_000),
            BasisPoints::new(30),
        ) else {
            panic!("quote");
        };
        assert_eq!(q.after_fee, Amount::new(997));
        assert_eq!(q.output, Amount::new(199_004));
    }

    #[test]
    fn zero_fee_keeps_full_input() {
        let Ok(q) = quote(
            Amount::new(1_000),
            Amount::new(1_000),
            Amount::new(1_000),
            BasisPoints::ZERO,
        ) else {
            panic!("quote");
        };
        assert_eq!(q.after_fee, Amount::new(1_000));
        assert_eq!(q.output, Amount::new(500));
    }

    #[test]
    fn empty_pool_quote_divides_by_zero() {
        let r = quote(Amount::new(1), Amount::ZERO, Amount::new(10), BasisPoints::new(30));
        assert_eq!(r, Err(AmmError::DivisionByZero));
    }

    // -- swap ---------------------------------------------------------------

    #[test]
    fn a_for_b_within_bounds() {
        let l = FakeLedger::with_reserves(500_000 + 1_000, 100_000_000);
        let Ok(t) = engine(&l).evaluate(Some(&set_up_state(OUTSTANDING)), &swap_group(token_a(), 1_000))
        else {
            panic!("swap accepted");
        };
        assert_eq!(
            t.receipt,
            Receipt::Swapped {
                asset_in: token_a(),
                amount_in: Amount::new(1_000),
                fee: Amount::new(3),
                asset_out: token_b(),
                amount_out: Amount::new(199_004),
            }
        );
        assert_eq!(
            t.instructions,
            vec![Instruction::pay(token_b(), alice(), Amount::new(199_004))]
        );
        assert_eq!(t.state, Some(set_up_state(OUTSTANDING)));
    }

    #[test]
    fn b_for_a_preserves_product() {
        let (ra, rb, input) = (500_000u64, 100_000_000u64, 1_003_000u64);
        let l = FakeLedger::with_reserves(ra, rb + input);
        let Ok(t) = engine(&l).evaluate(Some(&set_up_state(OUTSTANDING)), &swap_group(token_b(), input))
        else {
            panic!("swap accepted");
        };
        let Receipt::Swapped { amount_out, asset_out, .. } = t.receipt else {
            panic!("swap receipt");
        };
        assert_eq!(asset_out, token_a());
        assert_eq!(amount_out, Amount::new(4_951));
        let before = u128::from(ra) * u128::from(rb);
        let after = u128::from(ra - amount_out.get()) * u128::from(rb + input);
        assert!(after >= before);
    }

    #[test]
    fn dust_input_rejected() {
        // 1 unit at 30bp floors to zero after the fee.
        let l = FakeLedger::with_reserves(500_001, 100_000_000);
        let r = engine(&l).evaluate(Some(&set_up_state(OUTSTANDING)), &swap_group(token_a(), 1));
        assert_eq!(
            r,
            Err(AmmError::OutputOutOfBounds {
                output: Amount::ZERO,
                reserve: Amount::new(100_000_000),
            })
        );
    }

    #[test]
    fn draining_output_rejected() {
        // No token A in the pool: the whole B reserve would be paid out.
        let l = FakeLedger::with_reserves(1_000, 100);
        let r = engine(&l).evaluate(Some(&set_up_state(OUTSTANDING)), &swap_group(token_a(), 1_000));
        assert_eq!(
            r,
            Err(AmmError::OutputOutOfBounds {
                output: Amount::new(100),
                reserve: Amount::new(100),
            })
        );
    }

    #[test]
    fn no_liquidity_rejected() {
        let l = FakeLedger::with_reserves(1_000, 1_000);
        let r = engine(&l).evaluate(Some(&set_up_state(0)), &swap_group(token_a(), 10));
        assert_eq!(r, Err(AmmError::NoLiquidity));
        let r = engine(&l).evaluate(Some(&created_state()), &swap_group(token_a(), 10));
        assert_eq!(r, Err(AmmError::NotSetUp));
    }

    #[test]
    fn claim_token_rejected() {
        let l = FakeLedger::with_reserves(1_000, 1_000);
        let r = engine(&l).evaluate(Some(&set_up_state(OUTSTANDING)), &swap_group(claim_token(), 10));
        let Err(AmmError::UnexpectedAsset(_)) = r else {
            panic!("expected UnexpectedAsset");
        };
    }

    #[test]
    fn two_inputs_rejected() {
        let l = FakeLedger::with_reserves(1_000, 1_000);
        let g = AtomicGroup::new(
            vec![send(alice(), token_a(), 10), send(alice(), token_b(), 10)],
            Operation::Swap,
            alice(),
        );
        let Err(AmmError::InvalidGroup(_)) = engine(&l).evaluate(Some(&set_up_state(OUTSTANDING)), &g)
        else {
            panic!("expected InvalidGroup");
        };
    }
}
