use crate::address::{lock_authority, position_address};
use crate::engine::{ClaimFeeAccounts, ClaimedFees, FeeEngine};
use crate::events::ClaimLockedFeeEvent;
use crate::ledger::Ledger;
use crate::structs::{DerivedAccountIdent, Locks, PositionList};
use crate::ErrorCode;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

pub struct ClaimFee {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub token_x: Pubkey,
    pub token_y: Pubkey,
    pub account_x: Pubkey,
    pub account_y: Pubkey,
}

impl ClaimFee {
    /// Claims into the owner's associated token accounts of the pool mints.
    pub fn new(owner: Pubkey, pool: Pubkey, token_x: Pubkey, token_y: Pubkey) -> Self {
        Self {
            owner,
            pool,
            token_x,
            token_y,
            account_x: get_associated_token_address(&owner, &token_x),
            account_y: get_associated_token_address(&owner, &token_y),
        }
    }

    pub fn with_accounts(mut self, account_x: Pubkey, account_y: Pubkey) -> Self {
        self.account_x = account_x;
        self.account_y = account_y;
        self
    }

    pub fn process<E: FeeEngine>(
        &self,
        ledger: &mut Ledger,
        engine: &mut E,
        signers: &[Pubkey],
        index: u32,
        lower_tick_index: i32,
        upper_tick_index: i32,
    ) -> Result<ClaimedFees> {
        msg!("LOCKER: CLAIM FEE");
        require!(signers.contains(&self.owner), ErrorCode::Unauthorized);

        ledger.atomic(|ledger| {
            let (authority, bump) = lock_authority(&self.owner);
            let locks = ledger.load::<Locks>(&authority)?;

            let position = PositionList::get(ledger, &authority, index)?;
            let position_id = position.id;

            require_keys_eq!(position.owner, authority, ErrorCode::InvalidPosition);
            require_keys_eq!(position.pool, self.pool, ErrorCode::InvalidPosition);
            require!(
                lower_tick_index == { position.lower_tick_index }
                    && upper_tick_index == { position.upper_tick_index },
                ErrorCode::InvalidPosition
            );
            locks.get_index(position_id)?;

            let accounts = ClaimFeeAccounts {
                position_owner: authority,
                position: position_address(&authority, index).0,
                pool: self.pool,
                token_x: self.token_x,
                token_y: self.token_y,
                account_x: self.account_x,
                account_y: self.account_y,
            };
            let signer_seeds: &[&[u8]] = &[Locks::IDENT, self.owner.as_ref(), &[bump]];

            let claimed = engine.claim_fee(
                ledger,
                accounts,
                signer_seeds,
                index,
                lower_tick_index,
                upper_tick_index,
            )?;

            emit!(ClaimLockedFeeEvent {
                owner: self.owner,
                authority,
                position_id,
                amount_x: claimed.amount_x,
                amount_y: claimed.amount_y,
            });

            Ok(claimed)
        })
    }
}
