use crate::address::lock_authority;
use crate::ledger::Ledger;
use crate::structs::{LockedPosition, Locks, Position, PositionList};
use anchor_lang::prelude::*;

/// Lock entries of `owner` in registry order.
pub fn get_user_locks(ledger: &Ledger, owner: &Pubkey) -> Result<Vec<LockedPosition>> {
    let (locks, _) = lock_authority(owner);
    Ok(ledger.load::<Locks>(&locks)?.positions)
}

/// Positions currently held by `owner`'s lock authority.
pub fn get_user_locked_positions(ledger: &Ledger, owner: &Pubkey) -> Result<Vec<Position>> {
    let (authority, _) = lock_authority(owner);
    if !PositionList::exists(ledger, &authority) {
        return Ok(vec![]);
    }
    PositionList::positions(ledger, &authority)
}

/// Every locked position across all lock authorities, grouped by authority.
pub fn get_all_locked_positions(ledger: &Ledger) -> Result<Vec<Position>> {
    let mut positions = vec![];
    for (authority, _) in ledger.program_accounts::<Locks>()? {
        if PositionList::exists(ledger, &authority) {
            positions.extend(PositionList::positions(ledger, &authority)?);
        }
    }
    Ok(positions)
}
