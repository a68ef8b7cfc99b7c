use crate::ledger::Ledger;
use anchor_lang::prelude::*;

/// Accounts the AMM needs to settle fees of one position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimFeeAccounts {
    /// Custodian of the position, the lock authority for locked positions.
    pub position_owner: Pubkey,
    pub position: Pubkey,
    pub pool: Pubkey,
    pub token_x: Pubkey,
    pub token_y: Pubkey,
    pub account_x: Pubkey,
    pub account_y: Pubkey,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClaimedFees {
    pub amount_x: u64,
    pub amount_y: u64,
}

/// Fee settlement entry point of the AMM.
///
/// `signer_seeds` prove the custodian's authority when it is a program derived
/// address; an implementation must reject a claim it cannot authorize. On
/// success the engine rewrites the position's fee snapshot and owed tokens in
/// `ledger` and moves the claimed tokens to `account_x` / `account_y`.
pub trait FeeEngine {
    fn claim_fee(
        &mut self,
        ledger: &mut Ledger,
        accounts: ClaimFeeAccounts,
        signer_seeds: &[&[u8]],
        index: u32,
        lower_tick_index: i32,
        upper_tick_index: i32,
    ) -> Result<ClaimedFees>;
}
