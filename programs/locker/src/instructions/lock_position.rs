use crate::events::LockPositionEvent;
use crate::instructions::InitializeUserLocks;
use crate::ledger::Ledger;
use crate::structs::{Locks, PositionList};
use crate::ErrorCode;
use anchor_lang::prelude::*;

pub struct LockPosition {
    pub owner: Pubkey,
    pub payer: Pubkey,
}

impl LockPosition {
    pub fn new(owner: Pubkey, payer: Pubkey) -> Self {
        Self { owner, payer }
    }

    pub fn process(
        &self,
        ledger: &mut Ledger,
        signers: &[Pubkey],
        index: u32,
        lock_duration: u64,
    ) -> Result<()> {
        msg!("LOCKER: LOCK POSITION");
        require!(signers.contains(&self.owner), ErrorCode::Unauthorized);
        require!(signers.contains(&self.payer), ErrorCode::Unauthorized);

        let now = Locks::now(ledger.clock())?;
        let end_timestamp = Locks::end_timestamp(now, lock_duration)?;

        ledger.atomic(|ledger| {
            let authority = InitializeUserLocks::init_if_needed(ledger, &self.owner)?;
            let mut locks = ledger.load::<Locks>(&authority)?;

            require!(!locks.is_full(), ErrorCode::ExceededLockLimit);

            let owner_head = PositionList::head(ledger, &self.owner)?;
            require!(index < owner_head, ErrorCode::InvalidPositionIndex);

            PositionList::create_if_absent(ledger, &authority, &self.payer)?;

            let (position, _) = PositionList::transfer(ledger, &self.owner, &authority, index)?;
            let position_id = position.id;

            locks.add_lock(position_id, end_timestamp)?;
            ledger.store(&authority, &locks)?;

            emit!(LockPositionEvent {
                owner: self.owner,
                authority,
                position_id,
                end_timestamp,
            });

            Ok(())
        })
    }
}
