//! Withdraw: return claim tokens, receive a pro-rata share of both
//! reserves.

use super::{Engine, Transition};
use crate::domain::{Amount, AtomicGroup, Instruction, Receipt};
use crate::error::AmmError;
use crate::math::{mul_div, CheckedArithmetic};
use crate::state::PoolState;
use crate::traits::{AssetIssuer, ReserveOracle};

impl<L: ReserveOracle + AssetIssuer> Engine<L> {
    pub(super) fn withdraw(
        &self,
        state: &PoolState,
        group: &AtomicGroup,
    ) -> Result<Transition, AmmError> {
        let (claim_token, outstanding) = state.claims()?;
        let pair = state.token_pair();

        let [returned] = group.incoming(&self.pool_account, 1)? else {
            return Err(AmmError::InvalidGroup("withdraw needs one transfer"));
        };
        if returned.asset != claim_token {
            return Err(AmmError::UnexpectedAsset("withdraw takes the claim token"));
        }
        let burned = returned.amount;

        if outstanding.is_zero() {
            return Err(AmmError::NoLiquidity);
        }
        if burned > outstanding {
            return Err(AmmError::InsufficientLiquidity);
        }

        let reserve_a = self.reserve(pair.token_a(), "token a reserve")?;
        let reserve_b = self.reserve(pair.token_b(), "token b reserve")?;
        if reserve_a.is_zero() || reserve_b.is_zero() {
            return Err(AmmError::NoLiquidity);
        }

        let out_a = share(reserve_a, burned, outstanding, "token a share")?;
        let out_b = share(reserve_b, burned, outstanding, "token b share")?;
        let outstanding = outstanding.safe_sub(&burned, "claim outstanding")?;

        let withdrawer = group.sender();
        Ok(Transition::new(
            Some(state.with_outstanding(outstanding)),
            vec![
                Instruction::pay(pair.token_a(), withdrawer, out_a),
                Instruction::pay(pair.token_b(), withdrawer, out_b),
            ],
            Receipt::Withdrawn {
                burned,
                out_a,
                out_b,
            },
        ))
    }
}

/// `floor(reserve · burned / outstanding)`, which must be positive.
fn share(
    reserve: Amount,
    burned: Amount,
    outstanding: Amount,
    what: &'static str,
) -> Result<Amount, AmmError> {
    let out = mul_div(reserve, burned, outstanding)?;
    if out.is_zero() {
        return Err(AmmError::ZeroShare(what));
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::domain::Operation;
    use crate::state::Phase;

    const OUTSTANDING: u64 = 7_071_067;

    fn withdraw_group(amount: u64) -> AtomicGroup {
        AtomicGroup::new(
            vec![send(alice(), claim_token(), amount)],
            Operation::Withdraw,
            alice(),
        )
    }

    fn ledger() -> FakeLedger {
        FakeLedger::with_reserves(500_000, 100_000_000)
    }

    #[test]
    fn half_withdrawal_floors_both_legs() {
        let l = ledger();
        let Ok(t) = engine(&l).evaluate(Some(&set_up_state(OUTSTANDING)), &withdraw_group(3_535_533))
        else {
            panic!("withdraw accepted");
        };
        assert_eq!(
            t.instructions,
            vec![
                Instruction::pay(token_a(), alice(), Amount::new(249_999)),
                Instruction::pay(token_b(), alice(), Amount::new(49_999_992)),
            ]
        );
        let Some(s) = t.state else {
            panic!("state kept");
        };
        assert_eq!(s.outstanding(), Amount::new(OUTSTANDING - 3_535_533));
    }

    #[test]
    fn full_withdrawal_drains_and_empties() {
        let l = ledger();
        let Ok(t) = engine(&l).evaluate(Some(&set_up_state(OUTSTANDING)), &withdraw_group(OUTSTANDING))
        else {
            panic!("withdraw accepted");
        };
        assert_eq!(
            t.receipt,
            Receipt::Withdrawn {
                burned: Amount::new(OUTSTANDING),
                out_a: Amount::new(500_000),
                out_b: Amount::new(100_000_000),
            }
        );
        let Some(s) = t.state else {
            panic!("state kept");
        };
        assert_eq!(s.phase(), Phase::Empty);
    }

    #[test]
    fn over_redemption_rejected() {
        let l = ledger();
        let r = engine(&l).evaluate(Some(&set_up_state(OUTSTANDING)), &withdraw_group(OUTSTANDING + 1));
        assert_eq!(r, Err(AmmError::InsufficientLiquidity));
    }

    #[test]
    fn dust_share_rejected() {
        // 1 claim token of 7_071_067 against 500_000 A rounds to zero A.
        let l = ledger();
        let r = engine(&l).evaluate(Some(&set_up_state(OUTSTANDING)), &withdraw_group(1));
        assert_eq!(r, Err(AmmError::ZeroShare("token a share")));
    }

    #[test]
    fn empty_pool_rejected() {
        let l = ledger();
        let r = engine(&l).evaluate(Some(&set_up_state(0)), &withdraw_group(10));
        assert_eq!(r, Err(AmmError::NoLiquidity));
    }

    #[test]
    fn zero_reserve_rejected() {
        let l = FakeLedger::with_reserves(0, 100_000_000);
        let r = engine(&l).evaluate(Some(&set_up_state(OUTSTANDING)), &withdraw_group(1_000));
        assert_eq!(r, Err(AmmError::NoLiquidity));
    }

    #[test]
    fn missing_holding_rejected() {
        let l = FakeLedger::new();
        let r = engine(&l).evaluate(Some(&set_up_state(OUTSTANDING)), &withdraw_group(1_000));
        let Err(AmmError::ReserveUnavailable(_)) = r else {
            panic!("expected ReserveUnavailable");
        };
    }

    #[test]
    fn reserve_token_instead_of_claim_rejected() {
        let l = ledger();
        let g = AtomicGroup::new(
            vec![send(alice(), token_a(), 1_000)],
            Operation::Withdraw,
            alice(),
        );
        let Err(AmmError::UnexpectedAsset(_)) = engine(&l).evaluate(Some(&set_up_state(OUTSTANDING)), &g)
        else {
            panic!("expected UnexpectedAsset");
        };
    }

    #[test]
    fn claim_sent_by_other_account_rejected() {
        let l = ledger();
        let g = AtomicGroup::new(
            vec![send(bob(), claim_token(), 1_000)],
            Operation::Withdraw,
            alice(),
        );
        let Err(AmmError::InvalidGroup(_)) = engine(&l).evaluate(Some(&set_up_state(OUTSTANDING)), &g)
        else {
            panic!("expected InvalidGroup");
        };
    }
}
