use crate::address::lock_authority;
use crate::events::UnlockPositionEvent;
use crate::ledger::Ledger;
use crate::structs::{Locks, PositionList};
use crate::ErrorCode;
use anchor_lang::prelude::*;

pub struct UnlockPosition {
    pub owner: Pubkey,
}

impl UnlockPosition {
    pub fn new(owner: Pubkey) -> Self {
        Self { owner }
    }

    pub fn process(&self, ledger: &mut Ledger, signers: &[Pubkey], index: u32) -> Result<()> {
        msg!("LOCKER: UNLOCK POSITION");
        require!(signers.contains(&self.owner), ErrorCode::Unauthorized);

        let now = Locks::now(ledger.clock())?;

        ledger.atomic(|ledger| {
            let (authority, _) = lock_authority(&self.owner);
            let mut locks = ledger.load::<Locks>(&authority)?;

            let position = PositionList::get(ledger, &authority, index)?;
            let position_id = position.id;

            // registry and list are compacted independently, match by id
            let lock_index = locks.get_index(position_id)?;
            require!(
                locks.is_expired(lock_index, now)?,
                ErrorCode::LockNotExpired
            );

            PositionList::create_if_absent(ledger, &self.owner, &self.owner)?;
            PositionList::transfer(ledger, &authority, &self.owner, index)?;

            locks.remove_lock(position_id)?;
            ledger.store(&authority, &locks)?;

            emit!(UnlockPositionEvent {
                owner: self.owner,
                authority,
                position_id,
                current_timestamp: now,
            });

            Ok(())
        })
    }
}
