//! Full pool lifecycle on the in-memory ledger.
//!
//! Creates a pool, seeds it, shows a rejected and a refunded deposit,
//! swaps both ways, withdraws everything and deletes the pool.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=cpmm_engine=debug cargo run --example lifecycle
//! ```

use cpmm_engine::prelude::*;
use tracing_subscriber::EnvFilter;

fn balances(ledger: &MemoryLedger, who: AccountId, assets: &[AssetId]) -> String {
    assets
        .iter()
        .map(|a| {
            let held = ledger.balance(&who, *a).unwrap_or(Amount::ZERO);
            format!("{a}={held}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn supply(pool: AccountId, who: AccountId, a: AssetId, b: AssetId, qa: u64, qb: u64) -> AtomicGroup {
    AtomicGroup::new(
        vec![
            Transfer::new(who, pool, a, Amount::new(qa)),
            Transfer::new(who, pool, b, Amount::new(qb)),
        ],
        Operation::Supply,
        who,
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Constant Product Pool Lifecycle ===\n");

    // ── 1. Ledger, accounts and reserve tokens ──────────────────────────
    let pool = AccountId::from_bytes([0xAA; 32]);
    let alice = AccountId::from_bytes([0x01; 32]);
    let mut ledger = MemoryLedger::new(pool);
    let token_a = ledger.create_asset(alice, Amount::new(1_000_000_000));
    let token_b = ledger.create_asset(alice, Amount::new(1_000_000_000));
    println!("Alice: {}", balances(&ledger, alice, &[token_a, token_b]));

    // ── 2. Create and set up (0.30% fee, min increment 1 000) ───────────
    let pair = TokenPair::new(token_a, token_b)?;
    let cfg = PoolConfig::new(alice, pair, BasisPoints::new(30), Amount::new(1_000))?;
    ledger.submit(&AtomicGroup::call_only(Operation::Create(cfg), alice))?;
    let receipt = ledger.submit(&AtomicGroup::call_only(Operation::Setup, alice))?;
    println!("\n{receipt}");
    let Receipt::SetUp { claim_token } = receipt else {
        return Err("setup produced no claim token".into());
    };
    ledger.opt_in(alice, claim_token)?;
    let all = [token_a, token_b, claim_token];

    // ── 3. Deposits ─────────────────────────────────────────────────────
    let deposits = [
        ("initial liquidity", 500_000, 100_000_000),
        ("same ratio", 100_000, 20_000_000),
        ("too little B", 100_000, 100_000),
        ("too much B", 100_000, 100_000_000),
    ];
    for (label, qa, qb) in deposits {
        match ledger.submit(&supply(pool, alice, token_a, token_b, qa, qb)) {
            Ok(r) => println!("\nSupply {label} ({qa}, {qb}): {r}"),
            Err(e) => println!("\nSupply {label} ({qa}, {qb}) rejected: {e}"),
        }
        println!("  Pool:  {}", balances(&ledger, pool, &[token_a, token_b]));
        println!("  Alice: {}", balances(&ledger, alice, &all));
    }
    let first_position = Amount::new(7_071_067);
    let total_position = ledger.balance(&alice, claim_token).unwrap_or(Amount::ZERO);

    // ── 4. Swaps ────────────────────────────────────────────────────────
    for (asset, amount) in [(token_a, 1_000), (token_b, 1_003_000)] {
        let g = AtomicGroup::new(
            vec![Transfer::new(alice, pool, asset, Amount::new(amount))],
            Operation::Swap,
            alice,
        );
        let r = ledger.submit(&g)?;
        println!("\n{r}");
        println!("  Pool:  {}", balances(&ledger, pool, &[token_a, token_b]));
    }

    // ── 5. Withdrawals ──────────────────────────────────────────────────
    let rest = total_position.safe_sub(&first_position, "remaining position")?;
    for burn in [first_position, rest] {
        let g = AtomicGroup::new(
            vec![Transfer::new(alice, pool, claim_token, burn)],
            Operation::Withdraw,
            alice,
        );
        let r = ledger.submit(&g)?;
        println!("\n{r}");
        println!("  Pool:  {}", balances(&ledger, pool, &[token_a, token_b]));
    }

    // ── 6. Close ────────────────────────────────────────────────────────
    let r = ledger.submit(&AtomicGroup::call_only(Operation::Delete, alice))?;
    println!("\n{r}; record present: {}", ledger.pool_state()?.is_some());
    println!("Alice: {}", balances(&ledger, alice, &all));

    Ok(())
}
