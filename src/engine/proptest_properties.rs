//! Property-based tests using `proptest` for pool invariants.
//!
//! 1. **Value conservation**: a swap never decreases `given · other`.
//! 2. **Floor bias**: `mul_div` never rounds up; withdrawal shares never
//!    exceed the exact pro-rata amount.
//! 3. **Supply/withdraw bound**: supplying then withdrawing everything
//!    returns at most what was supplied.
//! 4. **Atomicity**: a rejected group leaves balances and the record
//!    untouched.

#![allow(clippy::panic)]

use proptest::prelude::*;

use super::fixtures::{claim_token, engine, pool, set_up_state, token_a, FakeLedger};
use super::swap::quote;
use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, AssetId, AtomicGroup, BasisPoints, Operation, Receipt, TokenPair, Transfer,
};
use crate::ledger::MemoryLedger;
use crate::math::mul_div;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn lp() -> AccountId {
    AccountId::from_bytes([0x11; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([0x22; 32])
}

const FUNDING: u64 = 1_000_000_000_000;

/// Ledger with a set-up pool seeded by `lp()` with `(ra, rb)`, and
/// `trader()` funded and opted in to everything.
fn seeded_ledger(ra: u64, rb: u64, fee_bps: u16) -> (MemoryLedger, AssetId, AssetId, AssetId) {
    let mut l = MemoryLedger::new(pool());
    let a = l.create_asset(lp(), Amount::new(2 * FUNDING));
    let b = l.create_asset(lp(), Amount::new(2 * FUNDING));
    for t in [a, b] {
        let Ok(()) = l.opt_in(trader(), t) else {
            panic!("opt in");
        };
        let Ok(()) = l.transfer(lp(), trader(), t, Amount::new(FUNDING)) else {
            panic!("fund trader");
        };
    }
    let Ok(pair) = TokenPair::new(a, b) else {
        panic!("pair");
    };
    let Ok(cfg) = PoolConfig::new(lp(), pair, BasisPoints::new(fee_bps), Amount::new(1)) else {
        panic!("config");
    };
    let Ok(_) = l.submit(&AtomicGroup::call_only(Operation::Create(cfg), lp())) else {
        panic!("create");
    };
    let Ok(Receipt::SetUp { claim_token }) =
        l.submit(&AtomicGroup::call_only(Operation::Setup, lp()))
    else {
        panic!("setup");
    };
    for who in [lp(), trader()] {
        let Ok(()) = l.opt_in(who, claim_token) else {
            panic!("opt in claim");
        };
    }
    let Ok(_) = l.submit(&supply(lp(), a, b, ra, rb)) else {
        panic!("seed liquidity");
    };
    (l, a, b, claim_token)
}

fn supply(who: AccountId, a: AssetId, b: AssetId, qa: u64, qb: u64) -> AtomicGroup {
    AtomicGroup::new(
        vec![
            Transfer::new(who, pool(), a, Amount::new(qa)),
            Transfer::new(who, pool(), b, Amount::new(qb)),
        ],
        Operation::Supply,
        who,
    )
}

fn bal(l: &MemoryLedger, who: AccountId, asset: AssetId) -> u128 {
    l.balance(&who, asset).map_or(0, |a| a.wide())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [10_000, 10^11].
fn reserve_strategy() -> impl Strategy<Value = u64> {
    10_000u64..=100_000_000_000u64
}

/// Fees up to 10%.
fn fee_strategy() -> impl Strategy<Value = u16> {
    0u16..=1_000u16
}

// ---------------------------------------------------------------------------
// Property 1: Value conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_swap_never_decreases_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        input_frac in 1u64..=1_000u64,
        fee in fee_strategy(),
    ) {
        let input = (ra / 1_000 * input_frac).max(1);
        let fee = BasisPoints::new(fee);
        let Ok(q) = quote(Amount::new(input), Amount::new(ra), Amount::new(rb), fee) else {
            return Ok(());
        };
        let out = q.output.wide();
        prop_assert!(out <= u128::from(rb));
        let before = u128::from(ra) * u128::from(rb);
        let after = (u128::from(ra) + u128::from(input)) * (u128::from(rb) - out);
        prop_assert!(after >= before, "k decreased: {} < {}", after, before);
    }

    #[test]
    fn prop_engine_swap_output_in_open_interval(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        input in 1u64..=10_000_000u64,
    ) {
        let ledger = FakeLedger::with_reserves(ra + input, rb);
        let g = AtomicGroup::new(
            vec![Transfer::new(lp(), pool(), token_a(), Amount::new(input))],
            Operation::Swap,
            lp(),
        );
        if let Ok(t) = engine(&ledger).evaluate(Some(&set_up_state(1)), &g) {
            let Receipt::Swapped { amount_out, fee, .. } = t.receipt else {
                panic!("swap receipt");
            };
            prop_assert!(!amount_out.is_zero());
            prop_assert!(amount_out.get() < rb);
            prop_assert!(fee.get() <= input);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Floor bias
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_mul_div_floors(x in any::<u64>(), y in any::<u64>(), z in 1u64..) {
        let Ok(r) = mul_div(Amount::new(x), Amount::new(y), Amount::new(z)) else {
            return Ok(());
        };
        let product = u128::from(x) * u128::from(y);
        let z = u128::from(z);
        prop_assert!(r.wide() * z <= product);
        prop_assert!((r.wide() + 1) * z > product);
    }

    #[test]
    fn prop_withdraw_share_never_exceeds_pro_rata(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        outstanding in 1_000u64..=1_000_000_000u64,
        burned_frac in 1u64..=1_000u64,
    ) {
        let burned = (outstanding / 1_000 * burned_frac).max(1);
        let ledger = FakeLedger::with_reserves(ra, rb);
        let g = AtomicGroup::new(
            vec![Transfer::new(lp(), pool(), claim_token(), Amount::new(burned))],
            Operation::Withdraw,
            lp(),
        );
        if let Ok(t) = engine(&ledger).evaluate(Some(&set_up_state(outstanding)), &g) {
            let Receipt::Withdrawn { out_a, out_b, .. } = t.receipt else {
                panic!("withdraw receipt");
            };
            let o = u128::from(outstanding);
            prop_assert!(out_a.wide() * o <= u128::from(ra) * u128::from(burned));
            prop_assert!(out_b.wide() * o <= u128::from(rb) * u128::from(burned));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Supply then withdraw returns at most what was supplied
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_supply_withdraw_round_trip_loses(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        qa in 1_000u64..=10_000_000_000u64,
        qb in 1_000u64..=10_000_000_000u64,
    ) {
        let (mut l, a, b, claim) = seeded_ledger(ra, rb, 30);
        let (start_a, start_b) = (bal(&l, trader(), a), bal(&l, trader(), b));

        let Ok(Receipt::Supplied { minted, .. }) = l.submit(&supply(trader(), a, b, qa, qb)) else {
            return Ok(());
        };
        let g = AtomicGroup::new(
            vec![Transfer::new(trader(), pool(), claim, minted)],
            Operation::Withdraw,
            trader(),
        );
        let Ok(_) = l.submit(&g) else {
            return Ok(());
        };
        prop_assert!(bal(&l, trader(), a) <= start_a);
        prop_assert!(bal(&l, trader(), b) <= start_b);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Atomicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rejected_supply_changes_nothing(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        qa in 1u64..=1_000_000u64,
        qb in 1u64..=1_000_000u64,
    ) {
        let (mut l, a, b, _) = seeded_ledger(ra, rb, 30);
        let before = l.clone();
        if l.submit(&supply(trader(), a, b, qa, qb)).is_err() {
            for who in [pool(), trader()] {
                prop_assert_eq!(l.balance(&who, a), before.balance(&who, a));
                prop_assert_eq!(l.balance(&who, b), before.balance(&who, b));
            }
            prop_assert_eq!(l.store(), before.store());
        }
    }

    #[test]
    fn prop_rejected_swap_changes_nothing(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        input in 1u64..=100u64,
        fee in fee_strategy(),
    ) {
        let (mut l, a, b, _) = seeded_ledger(ra, rb, fee);
        let before = l.clone();
        let g = AtomicGroup::new(
            vec![Transfer::new(trader(), pool(), a, Amount::new(input))],
            Operation::Swap,
            trader(),
        );
        if l.submit(&g).is_err() {
            prop_assert_eq!(l.balance(&pool(), a), before.balance(&pool(), a));
            prop_assert_eq!(l.balance(&pool(), b), before.balance(&pool(), b));
            prop_assert_eq!(l.balance(&trader(), a), before.balance(&trader(), a));
        }
    }
}
