//! # cpmm-engine
//!
//! Constant-product liquidity pool engine: validated, all-or-nothing state
//! transitions over atomic groups of ledger transfers.
//!
//! A pool holds two reserve tokens.  Liquidity providers deposit both and
//! receive a claim token representing their share; they redeem claim
//! tokens for a pro-rata slice of both reserves.  Traders swap one reserve
//! token for the other along `x · y = k`, minus a fee.
//!
//! The engine itself is a pure function.  It never moves funds: it reads
//! reserves through a [`ReserveOracle`](traits::ReserveOracle), validates
//! the incoming [`AtomicGroup`](domain::AtomicGroup), and returns the new
//! [`PoolState`](state::PoolState) together with the
//! [`Instruction`](domain::Instruction)s the ledger must execute.  A
//! rejected group yields an [`AmmError`](error::AmmError) and nothing else.
//!
//! # Quick Start
//!
//! ```rust
//! use cpmm_engine::prelude::*;
//!
//! let pool = AccountId::from_bytes([9u8; 32]);
//! let alice = AccountId::from_bytes([1u8; 32]);
//! let mut ledger = MemoryLedger::new(pool);
//!
//! // 1. Two reserve tokens, both owned by Alice
//! let usd = ledger.create_asset(alice, Amount::new(1_000_000_000));
//! let eur = ledger.create_asset(alice, Amount::new(1_000_000_000));
//!
//! // 2. Create and set up the pool
//! let pair = TokenPair::new(usd, eur).expect("distinct tokens");
//! let cfg = PoolConfig::new(alice, pair, BasisPoints::new(30), Amount::new(1_000))
//!     .expect("valid config");
//! ledger.submit(&AtomicGroup::call_only(Operation::Create(cfg), alice)).expect("created");
//! let Receipt::SetUp { claim_token } =
//!     ledger.submit(&AtomicGroup::call_only(Operation::Setup, alice)).expect("set up")
//! else {
//!     unreachable!()
//! };
//! ledger.opt_in(alice, claim_token).expect("opted in");
//!
//! // 3. First liquidity mints floor(sqrt(qa · qb))
//! let supply = AtomicGroup::new(
//!     vec![
//!         Transfer::new(alice, pool, usd, Amount::new(500_000)),
//!         Transfer::new(alice, pool, eur, Amount::new(100_000_000)),
//!     ],
//!     Operation::Supply,
//!     alice,
//! );
//! let receipt = ledger.submit(&supply).expect("supplied");
//! assert_eq!(receipt.claim_delta(), Some(Amount::new(7_071_067)));
//!
//! // 4. Swap 1 000 USD for EUR
//! let swap = AtomicGroup::new(
//!     vec![Transfer::new(alice, pool, usd, Amount::new(1_000))],
//!     Operation::Swap,
//!     alice,
//! );
//! let Receipt::Swapped { amount_out, .. } = ledger.submit(&swap).expect("swapped") else {
//!     unreachable!()
//! };
//! assert_eq!(amount_out, Amount::new(199_004));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Ledger     │  executes transfers, owns balances and the record store
//! └──────┬───────┘
//!        │ evaluate(state, group)
//!        ▼
//! ┌──────────────┐
//! │    Engine     │  create / setup / supply / withdraw / swap / delete
//! └──────┬───────┘
//!        │ ReserveOracle + AssetIssuer
//!        ▼
//! ┌──────────────┐
//! │  State, Math  │  PoolState, mul_div, geometric_mean
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │    Domain     │  Amount, AssetId, Transfer, AtomicGroup, Receipt, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`AtomicGroup`](domain::AtomicGroup), [`Instruction`](domain::Instruction), etc. |
//! | [`config`] | [`PoolConfig`](config::PoolConfig), the creation blueprint |
//! | [`state`]  | [`PoolState`](state::PoolState) and its key/value persistence |
//! | [`traits`] | [`ReserveOracle`](traits::ReserveOracle), [`AssetIssuer`](traits::AssetIssuer), [`FromConfig`](traits::FromConfig) |
//! | [`engine`] | [`Engine`](engine::Engine) and [`Transition`](engine::Transition) |
//! | [`ledger`] | [`MemoryLedger`](ledger::MemoryLedger), a reference ledger |
//! | [`math`]   | Checked arithmetic, `mul_div`, integer square root |
//! | [`error`]  | [`AmmError`](error::AmmError) and [`RejectionKind`](error::RejectionKind) |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod math;
pub mod prelude;
pub mod state;
pub mod traits;
