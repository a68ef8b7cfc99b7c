use crate::address::lock_authority;
use crate::ledger::Ledger;
use crate::structs::Locks;
use crate::ErrorCode;
use anchor_lang::prelude::*;

pub struct InitializeUserLocks {
    pub owner: Pubkey,
}

impl InitializeUserLocks {
    pub fn new(owner: Pubkey) -> Self {
        Self { owner }
    }

    pub fn process(&self, ledger: &mut Ledger, signers: &[Pubkey]) -> Result<()> {
        msg!("LOCKER: INITIALIZE USER LOCKS");
        require!(signers.contains(&self.owner), ErrorCode::Unauthorized);

        ledger.atomic(|ledger| {
            Self::init_if_needed(ledger, &self.owner)?;
            Ok(())
        })
    }

    /// Creates the registry of `owner` unless it already exists and returns
    /// its address.
    pub fn init_if_needed(ledger: &mut Ledger, owner: &Pubkey) -> Result<Pubkey> {
        let (locks, bump) = lock_authority(owner);
        ledger.create_if_absent(&locks, &Locks::new(bump))?;
        Ok(locks)
    }
}
