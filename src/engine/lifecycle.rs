//! Create, setup and delete.

use super::{Engine, Transition};
use crate::config::PoolConfig;
use crate::domain::{Amount, AtomicGroup, Instruction, Receipt};
use crate::error::AmmError;
use crate::state::{PoolState, CLAIM_TOKEN_TOTAL};
use crate::traits::{AssetIssuer, FromConfig, ReserveOracle};

impl<L: ReserveOracle + AssetIssuer> Engine<L> {
    /// Records a new pool.  The creator named in `config` need not be the
    /// caller.
    pub(super) fn create(
        &self,
        config: &PoolConfig,
        group: &AtomicGroup,
    ) -> Result<Transition, AmmError> {
        group.incoming(&self.pool_account, 0)?;
        let state = PoolState::from_config(config)?;
        Ok(Transition::new(Some(state), Vec::new(), Receipt::Created))
    }

    /// Issues the claim token and opts the pool into both reserve tokens.
    pub(super) fn setup(
        &self,
        state: &PoolState,
        group: &AtomicGroup,
    ) -> Result<Transition, AmmError> {
        if state.is_set_up() {
            return Err(AmmError::AlreadySetUp);
        }
        group.incoming(&self.pool_account, 0)?;

        let claim_token = self.ledger.next_asset_id();
        let pair = state.token_pair();
        if pair.contains(claim_token) {
            return Err(AmmError::InvalidToken("claim token collides with a reserve token"));
        }
        let instructions = vec![
            Instruction::IssueClaimToken {
                asset: claim_token,
                total: CLAIM_TOKEN_TOTAL,
                reserve: self.pool_account,
            },
            Instruction::pay(pair.token_a(), self.pool_account, Amount::ZERO),
            Instruction::pay(pair.token_b(), self.pool_account, Amount::ZERO),
        ];
        Ok(Transition::new(
            Some(state.with_claim_token(claim_token)),
            instructions,
            Receipt::SetUp { claim_token },
        ))
    }

    /// Removes the record.  Creator only, and only with nothing
    /// outstanding.
    pub(super) fn delete(
        &self,
        state: &PoolState,
        group: &AtomicGroup,
    ) -> Result<Transition, AmmError> {
        let outstanding = state.outstanding();
        if !outstanding.is_zero() {
            return Err(AmmError::OutstandingClaims(outstanding));
        }
        if group.sender() != state.creator() {
            return Err(AmmError::NotCreator);
        }
        group.incoming(&self.pool_account, 0)?;
        Ok(Transition::new(None, Vec::new(), Receipt::Deleted))
    }
}
