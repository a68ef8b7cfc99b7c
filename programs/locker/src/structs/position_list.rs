use super::{DerivedAccountSize, Position};
use crate::address::{position_address, position_list_address};
use crate::ledger::Ledger;
use crate::ErrorCode;
use crate::{size, stored_zero_copy_account};
use anchor_lang::prelude::*;

/// Header of a dense position list. Slots `[0, head)` live at
/// `position_address(authority, i)`; nothing is stored at or past `head`.
#[account(zero_copy(unsafe))]
#[repr(packed)]
#[derive(PartialEq, Default, Debug)]
pub struct PositionList {
    pub head: u32,
    pub bump: u8,
}

size!(PositionList);
stored_zero_copy_account!(PositionList);

impl PositionList {
    pub fn load(ledger: &Ledger, authority: &Pubkey) -> Result<PositionList> {
        let (address, _) = position_list_address(authority);
        if !ledger.exists(&address) {
            return err!(ErrorCode::PositionListNotFound);
        }
        ledger.load(&address)
    }

    pub fn exists(ledger: &Ledger, authority: &Pubkey) -> bool {
        ledger.exists(&position_list_address(authority).0)
    }

    pub fn head(ledger: &Ledger, authority: &Pubkey) -> Result<u32> {
        Ok(Self::load(ledger, authority)?.head)
    }

    /// Creates an empty list for `authority`. An existing list is not an
    /// error and is left as it is.
    pub fn create_if_absent(ledger: &mut Ledger, authority: &Pubkey, payer: &Pubkey) -> Result<bool> {
        let (address, bump) = position_list_address(authority);
        let created = ledger.create_if_absent(&address, &PositionList { head: 0, bump })?;
        if created {
            msg!("LOCKER: position list of {} created, paid by {}", authority, payer);
        }
        Ok(created)
    }

    pub fn get(ledger: &Ledger, authority: &Pubkey, index: u32) -> Result<Position> {
        let head = Self::head(ledger, authority)?;
        require!(index < head, ErrorCode::InvalidPositionIndex);
        ledger.load(&position_address(authority, index).0)
    }

    /// All positions of `authority` in slot order.
    pub fn positions(ledger: &Ledger, authority: &Pubkey) -> Result<Vec<Position>> {
        let head = Self::head(ledger, authority)?;
        (0..head)
            .map(|index| ledger.load(&position_address(authority, index).0))
            .collect()
    }

    /// Writes `position` into slot `head` and grows the list by one. Returns
    /// the slot the position landed in.
    pub fn append(ledger: &mut Ledger, authority: &Pubkey, mut position: Position) -> Result<u32> {
        let mut list = Self::load(ledger, authority)?;
        let index = list.head;
        let (address, bump) = position_address(authority, index);

        position.bump = bump;
        ledger.store(&address, &position)?;

        list.head = index.checked_add(1).ok_or(ErrorCode::PositionListFull)?;
        ledger.store(&position_list_address(authority).0, &list)?;

        Ok(index)
    }

    /// Removes slot `index` and returns the record that was there. The last
    /// record is moved into the hole so the list stays dense; removing the
    /// last slot moves nothing.
    pub fn remove_at(ledger: &mut Ledger, authority: &Pubkey, index: u32) -> Result<Position> {
        let mut list = Self::load(ledger, authority)?;
        let head = list.head;
        require!(index < head, ErrorCode::InvalidPositionIndex);

        let last = head - 1;
        let (removed_address, removed_bump) = position_address(authority, index);
        let removed: Position = ledger.load(&removed_address)?;

        let (last_address, _) = position_address(authority, last);
        if index != last {
            let mut backfill: Position = ledger.load(&last_address)?;
            backfill.bump = removed_bump;
            ledger.store(&removed_address, &backfill)?;
        }
        ledger.close(&last_address);

        list.head = last;
        ledger.store(&position_list_address(authority).0, &list)?;

        Ok(removed)
    }

    /// Moves slot `index` of `from` to the end of `to`'s list and makes `to`
    /// its custodian. Returns the moved record as stored in `to`'s list.
    pub fn transfer(
        ledger: &mut Ledger,
        from: &Pubkey,
        to: &Pubkey,
        index: u32,
    ) -> Result<(Position, u32)> {
        let mut position = Self::remove_at(ledger, from, index)?;
        position.owner = *to;
        let new_index = Self::append(ledger, to, position)?;
        let moved = ledger.load(&position_address(to, new_index).0)?;
        Ok((moved, new_index))
    }
}
